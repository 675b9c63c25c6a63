//! Histogram command implementation
//!
//! Draws from one sampler and compares observed frequencies against the
//! weight distribution.

use std::collections::{BTreeMap, BTreeSet};

use sampler_core::stats::{chi_square, frequencies, par_frequencies};
use sampler_core::{RandomSource, SamplerConfig, SamplerEnum, SamplerKind};
use serde::Serialize;
use tracing::info;

use crate::{CliError, Result};

/// Options for one histogram run.
#[derive(Debug, Clone)]
pub struct HistogramRequest {
    /// Sampler construction to use
    pub kind: SamplerKind,
    /// Value labels
    pub values: Vec<String>,
    /// Weights, one per value
    pub weights: Vec<f64>,
    /// Number of draws
    pub draws: usize,
    /// Parallel workers; 1 draws on the calling thread
    pub workers: usize,
}

/// One histogram row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramRow {
    /// Value label
    pub value: String,
    /// Input weight
    pub weight: f64,
    /// Expected share of draws
    pub expected: f64,
    /// Number of draws that returned the value
    pub observed: usize,
    /// Observed share of draws
    pub frequency: f64,
}

/// Full histogram report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramReport {
    /// Sampler construction used
    pub kind: SamplerKind,
    /// Seed of the source that produced the draws
    pub seed: u64,
    /// Number of draws
    pub draws: usize,
    /// Pearson chi-square statistic against the expected shares
    pub chi_square: f64,
    /// Degrees of freedom of the statistic
    pub degrees_of_freedom: usize,
    /// Per-value rows in input order
    pub rows: Vec<HistogramRow>,
}

/// Run the histogram command
pub fn run(request: &HistogramRequest, config: &SamplerConfig, format: &str) -> Result<()> {
    let report = build_report(request, config)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "table" => {
            print_table(&report);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Histogram complete");
    Ok(())
}

/// Draws from the requested sampler and tabulates the outcome.
pub fn build_report(request: &HistogramRequest, config: &SamplerConfig) -> Result<HistogramReport> {
    if request.workers == 0 {
        return Err(CliError::InvalidArgument(
            "worker count must be positive".to_string(),
        ));
    }
    // Counts are keyed by label, so each label must name one row.
    let mut seen = BTreeSet::new();
    if let Some(dup) = request.values.iter().find(|v| !seen.insert(v.as_str())) {
        return Err(CliError::InvalidArgument(format!(
            "duplicate value label '{}'",
            dup
        )));
    }

    let seed = config.make_source().seed();
    info!("Starting histogram...");
    info!("  Sampler: {}", request.kind);
    info!("  Draws: {}", request.draws);
    info!("  Workers: {}", request.workers);
    info!("  Seed: {}", seed);

    let make = |source: RandomSource| {
        SamplerEnum::build(
            request.kind,
            &request.values,
            &request.weights,
            source,
            config,
        )
    };

    let counts: BTreeMap<String, usize> = if request.workers == 1 {
        let mut sampler = make(RandomSource::from_seed(seed))?;
        frequencies(&mut sampler, request.draws)
    } else {
        par_frequencies(make, request.draws, request.workers, seed)?
    };

    let total: f64 = request.weights.iter().sum();
    let rows: Vec<HistogramRow> = request
        .values
        .iter()
        .zip(request.weights.iter())
        .map(|(value, &weight)| {
            let observed = counts.get(value).copied().unwrap_or(0);
            HistogramRow {
                value: value.clone(),
                weight,
                expected: weight / total,
                observed,
                frequency: observed as f64 / request.draws as f64,
            }
        })
        .collect();

    let observed: Vec<usize> = rows.iter().map(|r| r.observed).collect();
    let expected: Vec<f64> = rows.iter().map(|r| r.expected).collect();

    Ok(HistogramReport {
        kind: request.kind,
        seed,
        draws: request.draws,
        chi_square: chi_square(&observed, &expected),
        degrees_of_freedom: rows.len().saturating_sub(1),
        rows,
    })
}

fn print_table(report: &HistogramReport) {
    println!("\n┌────────────┬────────────┬────────────┬────────────┐");
    println!("│ Value      │ Expected   │ Observed   │ Count      │");
    println!("├────────────┼────────────┼────────────┼────────────┤");
    for row in &report.rows {
        println!(
            "│ {:<10} │ {:>10.5} │ {:>10.5} │ {:>10} │",
            row.value, row.expected, row.frequency, row.observed
        );
    }
    println!("└────────────┴────────────┴────────────┴────────────┘");
    println!(
        "chi-square = {:.4} (df = {}, seed = {})",
        report.chi_square, report.degrees_of_freedom, report.seed
    );
}

/// Parses a comma-separated list.
pub fn parse_list<T: std::str::FromStr>(text: &str, what: &str) -> Result<Vec<T>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<T>()
                .map_err(|_| CliError::InvalidArgument(format!("invalid {} '{}'", what, s)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn request(kind: SamplerKind, workers: usize) -> HistogramRequest {
        HistogramRequest {
            kind,
            values: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            weights: vec![1.0, 0.0, 3.0],
            draws: 20_000,
            workers,
        }
    }

    #[test]
    fn test_parse_list() {
        let values: Vec<f64> = parse_list("1, 2.5,3", "weight").unwrap();
        assert_eq!(values, vec![1.0, 2.5, 3.0]);

        let err = parse_list::<u32>("1,x", "weight").unwrap_err();
        assert!(err.to_string().contains("invalid weight 'x'"));
    }

    #[test]
    fn test_report_every_kind() {
        let config = SamplerConfig::builder().seed(3).build().unwrap();
        for kind in SamplerKind::ALL {
            let report = build_report(&request(kind, 1), &config).unwrap();

            assert_eq!(report.seed, 3);
            assert_eq!(report.degrees_of_freedom, 2);
            assert_eq!(report.rows.iter().map(|r| r.observed).sum::<usize>(), 20_000);
            assert_eq!(report.rows[1].observed, 0);
            assert_relative_eq!(report.rows[2].expected, 0.75);
            assert!((report.rows[2].frequency - 0.75).abs() < 0.02);
        }
    }

    #[test]
    fn test_parallel_report_is_reproducible() {
        let config = SamplerConfig::builder().seed(11).build().unwrap();
        let a = build_report(&request(SamplerKind::Alias, 4), &config).unwrap();
        let b = build_report(&request(SamplerKind::Alias, 4), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_propagates_sampler_errors() {
        let config = SamplerConfig::default();
        let mut bad = request(SamplerKind::Expansion, 1);
        bad.weights = vec![0.5, 1.0, 1.0];
        assert!(matches!(
            build_report(&bad, &config),
            Err(CliError::Sampler(_))
        ));
    }

    #[test]
    fn test_report_rejects_duplicate_labels() {
        let config = SamplerConfig::builder().seed(1).build().unwrap();
        let mut dup = request(SamplerKind::Binary, 1);
        dup.values = vec!["a".to_string(), "a".to_string()];
        dup.weights = vec![1.0, 1.0];

        let err = build_report(&dup, &config).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert!(err.to_string().contains("duplicate value label 'a'"));
    }

    #[test]
    fn test_unknown_format() {
        let config = SamplerConfig::builder().seed(1).build().unwrap();
        let result = run(&request(SamplerKind::Binary, 1), &config, "xml");
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }
}
