//! CLI configuration management
//!
//! Settings come from an optional TOML file and are overridden by command
//! line flags. Example `weighted.toml`:
//!
//! ```toml
//! [sampling]
//! seed = 42
//! draws = 400000
//! tolerance = 1e-9
//! workers = 4
//! ```

use std::path::Path;

use sampler_core::{SamplerConfig, DEFAULT_NORMALISATION_TOLERANCE};
use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "weighted.toml";

/// Default number of draws for `bench` and `histogram`.
pub const DEFAULT_DRAWS: usize = 1_000_000;

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Sampling settings
    pub sampling: SamplingSection,
}

/// `[sampling]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplingSection {
    /// Seed for reproducible runs; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Number of draws per sampler
    pub draws: usize,
    /// Alias sampler unit-sum tolerance
    pub tolerance: f64,
    /// Parallel workers for `histogram`
    pub workers: usize,
}

impl Default for SamplingSection {
    fn default() -> Self {
        Self {
            seed: None,
            draws: DEFAULT_DRAWS,
            tolerance: DEFAULT_NORMALISATION_TOLERANCE,
            workers: 1,
        }
    }
}

impl CliConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) if !Path::new(p).exists() => {
                return Err(CliError::FileNotFound(p.to_string()));
            }
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => DEFAULT_CONFIG_FILE,
            None => {
                debug!("No config file, using defaults");
                return Ok(Self::default());
            }
        };

        debug!("Loading config from {}", path);
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Builds the library configuration, letting `seed` override the file.
    pub fn sampler_config(&self, seed: Option<u64>) -> Result<SamplerConfig> {
        let config = SamplerConfig::builder()
            .normalisation_tolerance(self.sampling.tolerance)
            .maybe_seed(seed.or(self.sampling.seed))
            .build()?;
        Ok(config)
    }

    /// Resolves the draw count, letting `draws` override the file.
    pub fn draws(&self, draws: Option<usize>) -> Result<usize> {
        match draws.unwrap_or(self.sampling.draws) {
            0 => Err(CliError::InvalidArgument(
                "draw count must be positive".to_string(),
            )),
            n => Ok(n),
        }
    }
}
