//! Sampler configuration.
//!
//! This module provides [`SamplerConfig`] and its builder. The configuration
//! carries the tunable numeric tolerance used by the alias sampler and an
//! optional seed for reproducible sources.

use crate::error::SamplerError;
use crate::rng::RandomSource;

/// Default tolerance for the alias sampler's unit-sum checks.
///
/// Machine epsilon is too strict: accumulating a long weight vector in
/// `f64` routinely drifts by more than one ulp.
pub const DEFAULT_NORMALISATION_TOLERANCE: f64 = 1e-9;

/// Largest accepted normalisation tolerance.
pub const MAX_NORMALISATION_TOLERANCE: f64 = 1e-3;

/// Immutable sampler configuration.
///
/// Use [`SamplerConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use sampler_core::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .seed(42)
///     .normalisation_tolerance(1e-12)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.normalisation_tolerance(), 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Tolerance for the alias sampler's unit-sum checks.
    normalisation_tolerance: f64,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            normalisation_tolerance: DEFAULT_NORMALISATION_TOLERANCE,
            seed: None,
        }
    }
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the alias sampler's unit-sum tolerance.
    #[inline]
    pub fn normalisation_tolerance(&self) -> f64 {
        self.normalisation_tolerance
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Creates an owned random source honouring the configured seed.
    ///
    /// Without a seed the source is entropy-seeded.
    pub fn make_source(&self) -> RandomSource {
        match self.seed {
            Some(seed) => RandomSource::from_seed(seed),
            None => RandomSource::from_entropy(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvalidArgument` if the tolerance is not a
    /// finite value in `(0, MAX_NORMALISATION_TOLERANCE]`.
    pub fn validate(&self) -> Result<(), SamplerError> {
        let tol = self.normalisation_tolerance;
        if !tol.is_finite() || tol <= 0.0 || tol > MAX_NORMALISATION_TOLERANCE {
            return Err(SamplerError::InvalidArgument(format!(
                "normalisation tolerance {} must be in (0, {}]",
                tol, MAX_NORMALISATION_TOLERANCE
            )));
        }
        Ok(())
    }
}

/// Builder for [`SamplerConfig`].
///
/// Validation happens in [`SamplerConfigBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    normalisation_tolerance: Option<f64>,
    seed: Option<u64>,
}

impl SamplerConfigBuilder {
    /// Sets the alias sampler's unit-sum tolerance.
    #[inline]
    pub fn normalisation_tolerance(mut self, tolerance: f64) -> Self {
        self.normalisation_tolerance = Some(tolerance);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvalidArgument` for an out-of-range tolerance.
    pub fn build(self) -> Result<SamplerConfig, SamplerError> {
        let config = SamplerConfig {
            normalisation_tolerance: self
                .normalisation_tolerance
                .unwrap_or(DEFAULT_NORMALISATION_TOLERANCE),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
