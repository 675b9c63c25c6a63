//! Frequency collection and goodness-of-fit helpers.
//!
//! Used by tests and the CLI to compare observed draw frequencies against
//! the weight distribution a sampler was built from.
//!
//! [`par_frequencies`] shows the intended concurrency pattern: every rayon
//! task builds its own [`RandomSource`] and its own sampler, so no generator
//! state is ever shared between threads.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::error::SamplerError;
use crate::rng::RandomSource;
use crate::sampler::WeightedSampler;

/// Counts how often each value occurs in `draws` samples.
///
/// # Example
///
/// ```
/// use sampler_core::stats::frequencies;
/// use sampler_core::{BinarySampler, RandomSource};
///
/// let mut sampler =
///     BinarySampler::with_source(&['a', 'b'], &[1_u32, 1], RandomSource::from_seed(0)).unwrap();
/// let counts = frequencies(&mut sampler, 100);
/// assert_eq!(counts.values().sum::<usize>(), 100);
/// ```
pub fn frequencies<T, S>(sampler: &mut S, draws: usize) -> BTreeMap<T, usize>
where
    T: Ord,
    S: WeightedSampler<T>,
{
    let mut counts = BTreeMap::new();
    for _ in 0..draws {
        *counts.entry(sampler.sample()).or_insert(0) += 1;
    }
    counts
}

/// Counts draws across `workers` rayon tasks, one sampler per task.
///
/// Worker `w` draws from `RandomSource::from_seed(seed + w)`, so the merged
/// result is reproducible for a fixed `seed` and `workers`. Draws are split
/// as evenly as possible; the first `draws % workers` workers take one extra.
///
/// # Errors
///
/// Returns the first construction error reported by `make_sampler`, or
/// `InvalidArgument` if `workers` is zero.
pub fn par_frequencies<T, S, F>(
    make_sampler: F,
    draws: usize,
    workers: usize,
    seed: u64,
) -> Result<BTreeMap<T, usize>, SamplerError>
where
    T: Ord + Send,
    S: WeightedSampler<T>,
    F: Fn(RandomSource) -> Result<S, SamplerError> + Sync,
{
    if workers == 0 {
        return Err(SamplerError::InvalidArgument(
            "worker count must be positive".to_string(),
        ));
    }

    let base = draws / workers;
    let extra = draws % workers;

    (0..workers)
        .into_par_iter()
        .map(|w| -> Result<BTreeMap<T, usize>, SamplerError> {
            let source = RandomSource::from_seed(seed.wrapping_add(w as u64));
            let mut sampler = make_sampler(source)?;
            let share = base + usize::from(w < extra);
            Ok(frequencies(&mut sampler, share))
        })
        .try_reduce(BTreeMap::new, |mut acc, part| {
            for (value, count) in part {
                *acc.entry(value).or_insert(0) += count;
            }
            Ok(acc)
        })
}

/// Pearson's chi-square statistic of observed counts against probabilities.
///
/// Categories with zero expected probability are skipped when unobserved;
/// any draw landing in one makes the statistic infinite.
///
/// # Example
///
/// ```
/// use sampler_core::stats::chi_square;
///
/// let stat = chi_square(&[50, 50], &[0.5, 0.5]);
/// assert_eq!(stat, 0.0);
/// ```
pub fn chi_square(observed: &[usize], probabilities: &[f64]) -> f64 {
    let total: usize = observed.iter().sum();
    let n = total as f64;

    observed
        .iter()
        .zip(probabilities.iter())
        .map(|(&o, &p)| {
            let expected = n * p;
            if expected > 0.0 {
                let diff = o as f64 - expected;
                diff * diff / expected
            } else if o > 0 {
                f64::INFINITY
            } else {
                0.0
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::BinarySampler;
    use approx::assert_relative_eq;

    #[test]
    fn test_chi_square_known_value() {
        // (60-50)^2/50 + (40-50)^2/50 = 4
        assert_relative_eq!(chi_square(&[60, 40], &[0.5, 0.5]), 4.0);
    }

    #[test]
    fn test_chi_square_zero_probability() {
        assert_eq!(chi_square(&[10, 0], &[1.0, 0.0]), 0.0);
        assert!(chi_square(&[9, 1], &[1.0, 0.0]).is_infinite());
    }

    #[test]
    fn test_frequencies_total() {
        let mut sampler =
            BinarySampler::with_source(&[1, 2, 3], &[1_u32, 1, 1], RandomSource::from_seed(3))
                .unwrap();
        let counts = frequencies(&mut sampler, 999);
        assert_eq!(counts.values().sum::<usize>(), 999);
        assert!(counts.keys().all(|k| (1..=3).contains(k)));
    }

    #[test]
    fn test_par_frequencies_total_and_reproducible() {
        let make = |source: RandomSource| {
            BinarySampler::with_source(&[1, 2, 3], &[1_u32, 2, 3], source)
        };

        let a = par_frequencies(make, 10_001, 4, 42).unwrap();
        let b = par_frequencies(make, 10_001, 4, 42).unwrap();

        assert_eq!(a.values().sum::<usize>(), 10_001);
        assert_eq!(a, b);
    }

    #[test]
    fn test_par_frequencies_propagates_errors() {
        let make =
            |source: RandomSource| BinarySampler::with_source(&[1, 2], &[0_u32, 0], source);
        assert!(matches!(
            par_frequencies(make, 100, 2, 0),
            Err(SamplerError::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_par_frequencies_rejects_zero_workers() {
        let make = |source: RandomSource| BinarySampler::with_source(&[1], &[1_u32], source);
        assert!(matches!(
            par_frequencies(make, 100, 0, 0),
            Err(SamplerError::InvalidArgument(_))
        ));
    }
}
