//! Prefix-sum sampler with binary search.
//!
//! Construction builds running weight totals in O(n); a draw picks a point
//! on the mass line `[1, total]` (integer weights) or `(0, total]` (float
//! weights) and locates the first prefix sum at or above it in O(log n).
//! Because the drawn point is never zero, entries of weight zero, leading
//! ones included, are never selected.

use rand::{Rng, RngCore};

use crate::error::{validate_lengths, SamplerError};
use crate::rng::{random_source, ThreadSource};
use crate::sampler::WeightedSampler;
use crate::weight::Weight;

/// Weighted sampler over cumulative weight sums.
///
/// # Type Parameters
///
/// * `T` - Value type returned by draws
/// * `R` - Random source; defaults to the ambient [`ThreadSource`]
/// * `W` - Weight type, also used for the prefix sums (default `u32`)
///
/// # Examples
///
/// ```rust
/// use sampler_core::{BinarySampler, RandomSource, WeightedSampler};
///
/// let mut sampler =
///     BinarySampler::with_source(&[1, 2, 3], &[0_u32, 5, 5], RandomSource::from_seed(1)).unwrap();
///
/// assert_eq!(sampler.prefix_sums(), &[0, 5, 10]);
/// assert_ne!(sampler.sample(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct BinarySampler<T, R = ThreadSource, W = u32> {
    values: Vec<T>,
    prefix: Vec<W>,
    source: R,
}

impl<T: Clone, W: Weight> BinarySampler<T, ThreadSource, W> {
    /// Builds a sampler drawing from the calling thread's ambient source.
    ///
    /// # Errors
    ///
    /// See [`BinarySampler::with_source`].
    pub fn new(values: &[T], weights: &[W]) -> Result<Self, SamplerError> {
        Self::with_source(values, weights, random_source(None))
    }
}

impl<T: Clone, R: RngCore, W: Weight> BinarySampler<T, R, W> {
    /// Builds a sampler drawing from `source`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the sequences are empty or differ in length
    /// - `PreconditionViolation` if a weight is negative or non-finite, the
    ///   running sum overflows `W`, or the total weight is zero
    pub fn with_source(values: &[T], weights: &[W], source: R) -> Result<Self, SamplerError> {
        validate_lengths(values.len(), weights.len())?;

        let mut prefix = Vec::with_capacity(weights.len());
        let mut running = W::ZERO;
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_valid() {
                return Err(SamplerError::PreconditionViolation(format!(
                    "weight at index {} must be finite and non-negative: got {:?}",
                    i, w
                )));
            }
            running = running.checked_accumulate(w).ok_or_else(|| {
                SamplerError::PreconditionViolation(format!(
                    "running weight sum overflows at index {}",
                    i
                ))
            })?;
            prefix.push(running);
        }

        if running <= W::ZERO {
            return Err(SamplerError::PreconditionViolation(
                "total weight must be positive".to_string(),
            ));
        }

        tracing::debug!(entries = prefix.len(), total = ?running, "built prefix sums");

        Ok(Self {
            values: values.to_vec(),
            prefix,
            source,
        })
    }

    /// Draws a value using an external generator instead of the owned source.
    #[inline]
    pub fn sample_with<G: Rng>(&self, rng: &mut G) -> T {
        self.values[self.locate(W::draw_mass(self.total_weight(), rng))].clone()
    }

    /// Returns the prefix sums.
    #[inline]
    pub fn prefix_sums(&self) -> &[W] {
        &self.prefix
    }

    /// Returns the total weight mass.
    #[inline]
    pub fn total_weight(&self) -> W {
        self.prefix[self.prefix.len() - 1]
    }

    /// Returns the input values in their original order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Index of the first prefix sum greater than or equal to `mass`.
    #[inline]
    fn locate(&self, mass: W) -> usize {
        self.prefix.partition_point(|&p| p < mass)
    }
}

impl<T: Clone, R: RngCore, W: Weight> WeightedSampler<T> for BinarySampler<T, R, W> {
    #[inline]
    fn sample(&mut self) -> T {
        let mass = W::draw_mass(self.total_weight(), &mut self.source);
        self.values[self.locate(mass)].clone()
    }

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }
}
