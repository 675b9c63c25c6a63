//! Error types for sampler construction.
//!
//! Every failure in this crate is raised while a sampler is being built.
//! Once construction succeeds, drawing is infallible.

use thiserror::Error;

/// Categorised sampler construction errors.
///
/// # Variants
/// - `InvalidArgument`: malformed input (length mismatch, empty input,
///   negative or non-finite alias weights, bad configuration values)
/// - `NumericConsistency`: normalised alias probabilities do not re-sum to 1.0
/// - `PreconditionViolation`: weights that the chosen sampler cannot use
///   (zero total mass, non-integer expansion counts, overflowing sums)
///
/// # Examples
/// ```
/// use sampler_core::SamplerError;
///
/// let err = SamplerError::InvalidArgument("empty value sequence".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: empty value sequence");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    /// Invalid input data or parameters.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Normalised probabilities drifted away from a unit sum.
    ///
    /// This signals a defect in normalisation rather than bad input.
    #[error("Normalised weights sum to {sum}, expected 1.0 within {tolerance}")]
    NumericConsistency {
        /// The re-summed probability mass
        sum: f64,
        /// The tolerance that was exceeded
        tolerance: f64,
    },

    /// Weights violate a sampler-specific precondition.
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),
}

impl SamplerError {
    /// Returns true for errors caused by caller input rather than an
    /// internal numeric defect.
    #[inline]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, SamplerError::NumericConsistency { .. })
    }
}

/// Checks that values and weights are non-empty and of equal length.
///
/// Shared by every sampler constructor.
pub(crate) fn validate_lengths(values: usize, weights: usize) -> Result<(), SamplerError> {
    if values == 0 || weights == 0 {
        return Err(SamplerError::InvalidArgument(format!(
            "value and weight sequences must be non-empty: got {} values and {} weights",
            values, weights
        )));
    }
    if values != weights {
        return Err(SamplerError::InvalidArgument(format!(
            "value and weight sequences must have the same length: got {} and {}",
            values, weights
        )));
    }
    Ok(())
}
