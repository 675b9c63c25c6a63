//! Integration tests for the statistical and structural properties shared by
//! all sampler kinds.
//!
//! Goodness-of-fit checks use fixed seeds and the 99.9% chi-square critical
//! value, so each check is deterministic and far from its threshold.

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_distr::{Distribution, Exp};
use sampler_core::stats::{chi_square, frequencies};
use sampler_core::{
    random_source, AliasSampler, BinarySampler, ExpansionSampler, RandomSource, SamplerConfig,
    SamplerEnum, SamplerError, SamplerKind, WeightedSampler,
};

/// Chi-square critical value for 8 degrees of freedom at 99.9% confidence.
const CHI2_CRITICAL_DF8: f64 = 26.124;

const VALUES: [i32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
const WEIGHTS: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

fn expected_probabilities() -> Vec<f64> {
    WEIGHTS.iter().map(|&w| w as f64 / 45.0).collect()
}

fn counts_of<S: WeightedSampler<i32>>(sampler: &mut S, draws: usize) -> Vec<usize> {
    let freq = frequencies(sampler, draws);
    VALUES
        .iter()
        .map(|v| freq.get(v).copied().unwrap_or(0))
        .collect()
}

fn build(kind: SamplerKind, seed: u64) -> SamplerEnum<i32, RandomSource> {
    SamplerEnum::build(
        kind,
        &VALUES,
        &WEIGHTS,
        RandomSource::from_seed(seed),
        &SamplerConfig::default(),
    )
    .unwrap()
}

// ============================================================================
// Construction failures
// ============================================================================

#[test]
fn test_every_kind_rejects_bad_lengths() {
    let empty_values: [i32; 0] = [];
    let empty_weights: [u32; 0] = [];
    let cases: [(&[i32], &[u32]); 3] = [
        (&empty_values, &empty_weights),
        (&[1, 2, 3], &[1, 2]),
        (&[1], &empty_weights),
    ];

    for kind in SamplerKind::ALL {
        for (values, weights) in cases {
            let result = SamplerEnum::build(
                kind,
                values,
                weights,
                RandomSource::from_seed(0),
                &SamplerConfig::default(),
            );
            assert!(
                matches!(result, Err(SamplerError::InvalidArgument(_))),
                "{} accepted {} values with {} weights",
                kind,
                values.len(),
                weights.len()
            );
        }
    }
}

// ============================================================================
// Distribution checks
// ============================================================================

#[test]
fn test_alias_goodness_of_fit() {
    let mut sampler =
        AliasSampler::with_source(&VALUES, &WEIGHTS, RandomSource::from_seed(400)).unwrap();
    let counts = counts_of(&mut sampler, 400_000);

    let stat = chi_square(&counts, &expected_probabilities());
    assert!(
        stat < CHI2_CRITICAL_DF8,
        "chi-square {} exceeds {}",
        stat,
        CHI2_CRITICAL_DF8
    );
}

#[test]
fn test_every_kind_goodness_of_fit() {
    for kind in SamplerKind::ALL {
        let mut sampler = build(kind, 7);
        let counts = counts_of(&mut sampler, 200_000);
        let stat = chi_square(&counts, &expected_probabilities());
        assert!(stat < CHI2_CRITICAL_DF8, "{}: chi-square {}", kind, stat);
    }
}

#[test]
fn test_cross_sampler_consistency() {
    let draws = 200_000;
    let counts: Vec<Vec<usize>> = SamplerKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &kind)| counts_of(&mut build(kind, 1_000 + i as u64), draws))
        .collect();

    // Two-sample chi-square test of homogeneity with equal sample sizes.
    for i in 0..counts.len() {
        for j in (i + 1)..counts.len() {
            let stat: f64 = counts[i]
                .iter()
                .zip(counts[j].iter())
                .map(|(&a, &b)| {
                    let diff = a as f64 - b as f64;
                    diff * diff / (a + b) as f64
                })
                .sum();
            assert!(
                stat < CHI2_CRITICAL_DF8,
                "{} vs {}: chi-square {}",
                SamplerKind::ALL[i],
                SamplerKind::ALL[j],
                stat
            );
        }
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_identically_seeded_alias_samplers_agree() {
    let mut a =
        AliasSampler::with_source(&VALUES, &WEIGHTS, RandomSource::from_seed(2025)).unwrap();
    let mut b =
        AliasSampler::with_source(&VALUES, &WEIGHTS, RandomSource::from_seed(2025)).unwrap();
    assert_eq!(a.sample_n(10_000), b.sample_n(10_000));
}

#[test]
fn test_ambient_reseed_replays_draws() {
    random_source(Some(31));
    let mut first = AliasSampler::new(&VALUES, &WEIGHTS).unwrap();
    let a = first.sample_n(1_000);

    random_source(Some(31));
    let mut second = AliasSampler::new(&VALUES, &WEIGHTS).unwrap();
    let b = second.sample_n(1_000);

    assert_eq!(a, b);
}

#[test]
fn test_borrowed_source_is_shared() {
    // Samplers can borrow one source; draws interleave on its sequence.
    let mut shared = RandomSource::from_seed(55);
    let first = {
        let mut s = BinarySampler::with_source(&VALUES, &WEIGHTS, &mut shared).unwrap();
        s.sample_n(10)
    };
    let mut continued = BinarySampler::with_source(&VALUES, &WEIGHTS, &mut shared).unwrap();
    let second = continued.sample_n(10);

    let mut reference =
        BinarySampler::with_source(&VALUES, &WEIGHTS, RandomSource::from_seed(55)).unwrap();
    let all = reference.sample_n(20);

    assert_eq!(&all[..10], first.as_slice());
    assert_eq!(&all[10..], second.as_slice());
}

// ============================================================================
// Structural invariants
// ============================================================================

#[test]
fn test_exponential_weights_reconstruct() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(17);
    let exp = Exp::new(1.0).unwrap();
    let weights: Vec<f64> = (0..1_000).map(|_| exp.sample(&mut rng)).collect();
    let values: Vec<usize> = (0..weights.len()).collect();
    let total: f64 = weights.iter().sum();

    let alias =
        AliasSampler::with_source(&values, &weights, RandomSource::from_seed(0)).unwrap();
    for (p, w) in alias.table().probabilities().iter().zip(weights.iter()) {
        assert_relative_eq!(*p, w / total, epsilon = 1e-9);
    }

    let binary =
        BinarySampler::with_source(&values, &weights, RandomSource::from_seed(0)).unwrap();
    assert_relative_eq!(binary.total_weight(), total, max_relative = 1e-12);
}

#[test]
fn test_alias_table_invariant() {
    let sampler = AliasSampler::new(&VALUES, &WEIGHTS).unwrap();
    let n = sampler.table().len();
    for (i, entry) in sampler.table().entries().iter().enumerate() {
        assert!((0.0..=1.0).contains(&entry.cutoff));
        assert!(entry.alias.map_or(true, |a| a < n && a != i));
    }
}

#[test]
fn test_binary_prefix_invariant() {
    let sampler = BinarySampler::new(&VALUES, &WEIGHTS).unwrap();
    let prefix = sampler.prefix_sums();
    assert!(prefix.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*prefix.last().unwrap(), WEIGHTS.iter().sum::<u32>());
}

#[test]
fn test_expansion_size_invariant() {
    let mut sampler = ExpansionSampler::new(&VALUES, &WEIGHTS).unwrap();
    assert_eq!(sampler.total_weight(), 45);

    for value in VALUES {
        let multiplicity = sampler.expanded().iter().filter(|&&v| v == value).count();
        assert_eq!(multiplicity, value as usize);
    }
    assert!(sampler.sample_n(1_000).iter().all(|v| VALUES.contains(v)));
}

#[test]
fn test_single_element_every_kind() {
    for kind in SamplerKind::ALL {
        let mut sampler = SamplerEnum::build(
            kind,
            &[42],
            &[1_u32],
            RandomSource::from_seed(kind as u64),
            &SamplerConfig::default(),
        )
        .unwrap();
        assert!(sampler.sample_n(10_000).iter().all(|&v| v == 42), "{}", kind);
    }

    assert_eq!(AliasSampler::new(&[42], &[1_u32]).unwrap().sample(), 42);
    assert_eq!(ExpansionSampler::new(&[42], &[1_u32]).unwrap().sample(), 42);
    assert_eq!(BinarySampler::new(&[42], &[1_u32]).unwrap().sample(), 42);
}
