//! Walker/Vose alias method.
//!
//! Construction is O(n); every draw is O(1) and consumes one uniform index
//! plus one uniform real from the sampler's source.
//!
//! Reference: K. Schwarz, "Darts, Dice, and Coins: Sampling from a Discrete
//! Distribution" (2011), and M. D. Vose, "A linear algorithm for generating
//! random numbers with a given distribution", IEEE TSE 17(9), 1991.

use std::collections::VecDeque;

use rand::{Rng, RngCore};

use crate::config::SamplerConfig;
use crate::error::{validate_lengths, SamplerError};
use crate::rng::{random_source, ThreadSource};
use crate::sampler::WeightedSampler;
use crate::weight::Weight;

/// One slot of an [`AliasTable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AliasEntry {
    /// Probability in `[0, 1]` of keeping the slot's own index.
    pub cutoff: f64,
    /// Index returned when the cutoff test fails; `None` means self-accept.
    pub alias: Option<usize>,
}

/// Alias table built from normalised probabilities.
///
/// Drawing a slot uniformly and then keeping it with probability `cutoff`
/// (else jumping to `alias`) reproduces the input distribution.
#[derive(Clone, Debug)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Builds the table from probabilities that already sum to one.
    ///
    /// Uses the small/large partition sweep with FIFO queues. Slots left over
    /// once either queue empties only differ from a full bucket by rounding
    /// residue, so their cutoff is set to exactly 1.0.
    pub fn from_probabilities(probabilities: &[f64]) -> Self {
        let n = probabilities.len();
        let mut scaled: Vec<f64> = probabilities.iter().map(|p| p * n as f64).collect();
        let mut entries = vec![
            AliasEntry {
                cutoff: 1.0,
                alias: None,
            };
            n
        ];

        let mut small = VecDeque::new();
        let mut large = VecDeque::new();
        for (i, &s) in scaled.iter().enumerate() {
            if s < 1.0 {
                small.push_back(i);
            } else {
                large.push_back(i);
            }
        }

        while !small.is_empty() && !large.is_empty() {
            let (Some(s), Some(l)) = (small.pop_front(), large.pop_front()) else {
                break;
            };

            entries[s] = AliasEntry {
                cutoff: scaled[s].clamp(0.0, 1.0),
                alias: Some(l),
            };
            scaled[l] -= 1.0 - scaled[s];

            if scaled[l] < 1.0 {
                small.push_back(l);
            } else {
                large.push_back(l);
            }
        }

        Self { entries }
    }

    /// Returns the table entries.
    #[inline]
    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    /// Returns the number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reconstructs the probability of each index implied by the table.
    pub fn probabilities(&self) -> Vec<f64> {
        let n = self.entries.len() as f64;
        let mut probs = vec![0.0; self.entries.len()];
        for (i, entry) in self.entries.iter().enumerate() {
            probs[i] += entry.cutoff / n;
            let spill = (1.0 - entry.cutoff) / n;
            probs[entry.alias.unwrap_or(i)] += spill;
        }
        probs
    }

    /// Draws a slot index.
    #[inline]
    pub fn draw<R: Rng>(&self, rng: &mut R) -> usize {
        let idx = rng.gen_range(0..=self.entries.len() - 1);
        let entry = self.entries[idx];
        let u: f64 = rng.gen();
        match entry.alias {
            Some(alias) if u >= entry.cutoff => alias,
            _ => idx,
        }
    }
}

/// Converts weights into probabilities summing to one.
///
/// Weights are divided by their total unless it is exactly one, so a loose
/// `tolerance` never lets unnormalised mass into the table.
///
/// # Errors
///
/// - `InvalidArgument` for a negative or non-finite weight
/// - `PreconditionViolation` if the total mass is zero or not finite
/// - `NumericConsistency` if the normalised probabilities do not re-sum to
///   one within `tolerance`
pub fn normalise<W: Weight>(weights: &[W], tolerance: f64) -> Result<Vec<f64>, SamplerError> {
    if let Some((index, weight)) = weights.iter().enumerate().find(|(_, w)| !w.is_valid()) {
        return Err(SamplerError::InvalidArgument(format!(
            "weight at index {} must be finite and non-negative: got {:?}",
            index, weight
        )));
    }

    let mass: Vec<f64> = weights.iter().map(|w| w.to_mass()).collect();
    let total: f64 = mass.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(SamplerError::PreconditionViolation(format!(
            "total weight must be positive and finite: got {}",
            total
        )));
    }

    let probabilities = if total != 1.0 {
        mass.iter().map(|m| m / total).collect()
    } else {
        mass
    };

    check_unit_sum(probabilities.iter().sum(), tolerance)?;
    Ok(probabilities)
}

fn check_unit_sum(sum: f64, tolerance: f64) -> Result<(), SamplerError> {
    if (1.0 - sum).abs() < tolerance {
        Ok(())
    } else {
        Err(SamplerError::NumericConsistency { sum, tolerance })
    }
}

/// Weighted sampler backed by an [`AliasTable`].
///
/// # Type Parameters
///
/// * `T` - Value type returned by draws
/// * `R` - Random source; defaults to the ambient [`ThreadSource`]
///
/// # Examples
///
/// ```rust
/// use sampler_core::{AliasSampler, RandomSource, WeightedSampler};
///
/// let mut sampler = AliasSampler::with_source(
///     &["rare", "common"],
///     &[1.0, 9.0],
///     RandomSource::from_seed(42),
/// )
/// .unwrap();
///
/// let v = sampler.sample();
/// assert!(v == "rare" || v == "common");
/// ```
#[derive(Clone, Debug)]
pub struct AliasSampler<T, R = ThreadSource> {
    values: Vec<T>,
    table: AliasTable,
    source: R,
}

impl<T: Clone> AliasSampler<T> {
    /// Builds a sampler drawing from the calling thread's ambient source.
    ///
    /// # Errors
    ///
    /// See [`AliasSampler::with_config`].
    pub fn new<W: Weight>(values: &[T], weights: &[W]) -> Result<Self, SamplerError> {
        Self::with_source(values, weights, random_source(None))
    }
}

impl<T: Clone, R: RngCore> AliasSampler<T, R> {
    /// Builds a sampler drawing from `source` with the default tolerance.
    ///
    /// # Errors
    ///
    /// See [`AliasSampler::with_config`].
    pub fn with_source<W: Weight>(
        values: &[T],
        weights: &[W],
        source: R,
    ) -> Result<Self, SamplerError> {
        Self::with_config(values, weights, source, &SamplerConfig::default())
    }

    /// Builds a sampler drawing from `source` using `config`'s tolerance.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the sequences are empty or differ in length,
    ///   or a weight is negative or non-finite
    /// - `PreconditionViolation` if all weights are zero
    /// - `NumericConsistency` if normalisation fails its unit-sum check
    pub fn with_config<W: Weight>(
        values: &[T],
        weights: &[W],
        source: R,
        config: &SamplerConfig,
    ) -> Result<Self, SamplerError> {
        validate_lengths(values.len(), weights.len())?;
        let probabilities = normalise(weights, config.normalisation_tolerance())?;
        let table = AliasTable::from_probabilities(&probabilities);

        tracing::debug!(slots = table.len(), "built alias table");

        Ok(Self {
            values: values.to_vec(),
            table,
            source,
        })
    }

    /// Draws a value using an external generator instead of the owned source.
    #[inline]
    pub fn sample_with<G: Rng>(&self, rng: &mut G) -> T {
        self.values[self.table.draw(rng)].clone()
    }

    /// Returns the alias table.
    #[inline]
    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    /// Returns the input values in their original order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns a mutable reference to the owned source.
    #[inline]
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }
}

impl<T: Clone, R: RngCore> WeightedSampler<T> for AliasSampler<T, R> {
    #[inline]
    fn sample(&mut self) -> T {
        let idx = self.table.draw(&mut self.source);
        self.values[idx].clone()
    }

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }
}
