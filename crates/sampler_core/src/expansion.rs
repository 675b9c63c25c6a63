//! Weight expansion sampler.
//!
//! Every value is copied into a flat array once per unit of weight, so a
//! draw is a single uniform index. Memory and build cost are O(ΣW): only use
//! this for small integer weights. The total is not capped; constructions
//! above [`LARGE_EXPANSION_WARNING`] slots are logged.

use rand::{Rng, RngCore};

use crate::error::{validate_lengths, SamplerError};
use crate::rng::{random_source, ThreadSource};
use crate::sampler::WeightedSampler;
use crate::weight::Weight;

/// Expansion size above which construction logs a warning.
pub const LARGE_EXPANSION_WARNING: usize = 1 << 24;

/// Weighted sampler over a flattened, weight-expanded value array.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{ExpansionSampler, RandomSource, WeightedSampler};
///
/// let mut sampler =
///     ExpansionSampler::with_source(&['a', 'b'], &[1_u8, 3], RandomSource::from_seed(0)).unwrap();
///
/// assert_eq!(sampler.expanded(), &['a', 'b', 'b', 'b']);
/// let v = sampler.sample();
/// assert!(v == 'a' || v == 'b');
/// ```
#[derive(Clone, Debug)]
pub struct ExpansionSampler<T, R = ThreadSource> {
    expanded: Vec<T>,
    distinct: usize,
    source: R,
}

impl<T: Clone> ExpansionSampler<T> {
    /// Builds a sampler drawing from the calling thread's ambient source.
    ///
    /// # Errors
    ///
    /// See [`ExpansionSampler::with_source`].
    pub fn new<W: Weight>(values: &[T], weights: &[W]) -> Result<Self, SamplerError> {
        Self::with_source(values, weights, random_source(None))
    }
}

impl<T: Clone, R: RngCore> ExpansionSampler<T, R> {
    /// Builds a sampler drawing from `source`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the sequences are empty or differ in length
    /// - `PreconditionViolation` if a weight is not a non-negative integer
    ///   count, the counts overflow `usize`, or they sum to zero
    pub fn with_source<W: Weight>(
        values: &[T],
        weights: &[W],
        source: R,
    ) -> Result<Self, SamplerError> {
        validate_lengths(values.len(), weights.len())?;

        let counts = weights
            .iter()
            .enumerate()
            .map(|(i, w)| {
                w.to_count().ok_or_else(|| {
                    SamplerError::PreconditionViolation(format!(
                        "weight at index {} must be a non-negative integer count: got {:?}",
                        i, w
                    ))
                })
            })
            .collect::<Result<Vec<usize>, _>>()?;

        let total = counts
            .iter()
            .try_fold(0_usize, |acc, &c| acc.checked_add(c))
            .ok_or_else(|| {
                SamplerError::PreconditionViolation("expanded size overflows usize".to_string())
            })?;
        if total == 0 {
            return Err(SamplerError::PreconditionViolation(
                "total weight must be positive".to_string(),
            ));
        }
        if total > LARGE_EXPANSION_WARNING {
            tracing::warn!(
                slots = total,
                "weight expansion allocates one slot per unit of weight"
            );
        }

        let mut expanded = Vec::with_capacity(total);
        for (value, &count) in values.iter().zip(counts.iter()) {
            expanded.extend(std::iter::repeat(value).take(count).cloned());
        }

        tracing::debug!(slots = total, "built expansion array");

        Ok(Self {
            expanded,
            distinct: values.len(),
            source,
        })
    }

    /// Draws a value using an external generator instead of the owned source.
    #[inline]
    pub fn sample_with<G: Rng>(&self, rng: &mut G) -> T {
        let idx = rng.gen_range(0..=self.expanded.len() - 1);
        self.expanded[idx].clone()
    }

    /// Returns the flattened array.
    #[inline]
    pub fn expanded(&self) -> &[T] {
        &self.expanded
    }

    /// Returns the total weight, i.e. the flattened array length.
    #[inline]
    pub fn total_weight(&self) -> usize {
        self.expanded.len()
    }
}

impl<T: Clone, R: RngCore> WeightedSampler<T> for ExpansionSampler<T, R> {
    #[inline]
    fn sample(&mut self) -> T {
        let idx = self.source.gen_range(0..=self.expanded.len() - 1);
        self.expanded[idx].clone()
    }

    #[inline]
    fn len(&self) -> usize {
        self.distinct
    }
}
