//! Bench command implementation
//!
//! Times repeated draws from all three samplers over values `1..=size` with
//! weight equal to the value.

use std::hint::black_box;
use std::time::Instant;

use sampler_core::{
    AliasSampler, BinarySampler, ExpansionSampler, SamplerConfig, SamplerKind, WeightedSampler,
};
use tracing::info;

use crate::{CliError, Result};

/// Timing of one sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    /// Sampler that was timed
    pub kind: SamplerKind,
    /// Wall-clock time for all draws, in milliseconds
    pub millis: f64,
    /// Sum of drawn values, kept so the loop cannot be optimised away
    pub checksum: u64,
}

/// Run the bench command
pub fn run(size: u32, draws: usize, config: &SamplerConfig) -> Result<()> {
    let results = measure(size, draws, config)?;

    for result in &results {
        println!("{:<10} {:>10.3} ms", format!("{}:", result.kind), result.millis);
    }

    info!("Benchmark complete");
    Ok(())
}

/// Builds every sampler and times `draws` draws from each.
pub fn measure(size: u32, draws: usize, config: &SamplerConfig) -> Result<Vec<BenchResult>> {
    if size == 0 {
        return Err(CliError::InvalidArgument("size must be positive".to_string()));
    }

    let values: Vec<u32> = (1..=size).collect();
    let weights = values.clone();
    let source = config.make_source();

    info!("Starting benchmark...");
    info!("  Values: 1..={}", size);
    info!("  Draws: {}", draws);
    info!("  Seed: {}", source.seed());

    let alias = AliasSampler::with_config(&values, &weights, source.clone(), config)?;
    let expansion = ExpansionSampler::with_source(&values, &weights, source.clone())?;
    let binary = BinarySampler::with_source(&values, &weights, source)?;

    Ok(vec![
        time_draws(SamplerKind::Alias, alias, draws),
        time_draws(SamplerKind::Expansion, expansion, draws),
        time_draws(SamplerKind::Binary, binary, draws),
    ])
}

fn time_draws<S: WeightedSampler<u32>>(
    kind: SamplerKind,
    mut sampler: S,
    draws: usize,
) -> BenchResult {
    let start = Instant::now();
    let mut checksum = 0_u64;
    for _ in 0..draws {
        checksum = checksum.wrapping_add(u64::from(black_box(sampler.sample())));
    }
    let millis = start.elapsed().as_secs_f64() * 1_000.0;

    info!("  {} finished in {:.3} ms", kind, millis);
    BenchResult {
        kind,
        millis,
        checksum,
    }
}
