//! Common sampler surface.
//!
//! This module provides:
//! - [`WeightedSampler`]: the draw interface shared by all samplers
//! - [`SamplerKind`]: names of the available sampler constructions
//! - [`SamplerEnum`]: static dispatch enum wrapping the concrete samplers

use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};

use crate::alias::AliasSampler;
use crate::binary::BinarySampler;
use crate::config::SamplerConfig;
use crate::error::SamplerError;
use crate::expansion::ExpansionSampler;
use crate::rng::ThreadSource;
use crate::weight::Weight;

/// Repeated independent draws from a fixed weighted distribution.
///
/// Drawing never fails once a sampler has been constructed.
pub trait WeightedSampler<T> {
    /// Draws one value.
    fn sample(&mut self) -> T;

    /// Returns the number of input values the sampler was built from.
    fn len(&self) -> usize;

    /// Returns true if the sampler holds no values.
    ///
    /// Constructors reject empty input, so this is false for every
    /// successfully built sampler.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draws `n` values.
    fn sample_n(&mut self, n: usize) -> Vec<T> {
        (0..n).map(|_| self.sample()).collect()
    }
}

/// Available sampler constructions.
///
/// # Example
///
/// ```
/// use sampler_core::SamplerKind;
///
/// let kind: SamplerKind = "binary".parse().unwrap();
/// assert_eq!(kind, SamplerKind::Binary);
/// assert_eq!(kind.to_string(), "binary");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SamplerKind {
    /// Walker/Vose alias table: O(1) draws, O(n) memory
    Alias,
    /// Flattened weight expansion: O(1) draws, O(ΣW) memory
    Expansion,
    /// Prefix sums with binary search: O(log n) draws, O(n) memory
    Binary,
}

impl SamplerKind {
    /// All sampler kinds, in declaration order.
    pub const ALL: [SamplerKind; 3] = [
        SamplerKind::Alias,
        SamplerKind::Expansion,
        SamplerKind::Binary,
    ];

    /// Returns the lowercase name of the kind.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplerKind::Alias => "alias",
            SamplerKind::Expansion => "expansion",
            SamplerKind::Binary => "binary",
        }
    }
}

impl fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SamplerKind {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alias" => Ok(SamplerKind::Alias),
            "expansion" => Ok(SamplerKind::Expansion),
            "binary" => Ok(SamplerKind::Binary),
            _ => Err(SamplerError::InvalidArgument(format!(
                "unknown sampler kind '{}': expected alias, expansion or binary",
                s
            ))),
        }
    }
}

/// Static dispatch enum wrapping the concrete samplers.
///
/// # Example
///
/// ```
/// use sampler_core::{RandomSource, SamplerConfig, SamplerEnum, SamplerKind, WeightedSampler};
///
/// for kind in SamplerKind::ALL {
///     let mut sampler = SamplerEnum::build(
///         kind,
///         &[42],
///         &[1_u32],
///         RandomSource::from_seed(1),
///         &SamplerConfig::default(),
///     )
///     .unwrap();
///     assert_eq!(sampler.kind(), kind);
///     assert_eq!(sampler.sample(), 42);
/// }
/// ```
#[derive(Clone, Debug)]
pub enum SamplerEnum<T, R = ThreadSource, W = u32> {
    /// Alias table sampler
    Alias(AliasSampler<T, R>),
    /// Weight expansion sampler
    Expansion(ExpansionSampler<T, R>),
    /// Prefix-sum sampler
    Binary(BinarySampler<T, R, W>),
}

impl<T: Clone, R: RngCore, W: Weight> SamplerEnum<T, R, W> {
    /// Builds the sampler of the requested kind.
    ///
    /// # Errors
    ///
    /// Propagates the chosen sampler's construction error.
    pub fn build(
        kind: SamplerKind,
        values: &[T],
        weights: &[W],
        source: R,
        config: &SamplerConfig,
    ) -> Result<Self, SamplerError> {
        Ok(match kind {
            SamplerKind::Alias => {
                SamplerEnum::Alias(AliasSampler::with_config(values, weights, source, config)?)
            }
            SamplerKind::Expansion => {
                SamplerEnum::Expansion(ExpansionSampler::with_source(values, weights, source)?)
            }
            SamplerKind::Binary => {
                SamplerEnum::Binary(BinarySampler::with_source(values, weights, source)?)
            }
        })
    }

    /// Returns the kind of the wrapped sampler.
    #[inline]
    pub fn kind(&self) -> SamplerKind {
        match self {
            SamplerEnum::Alias(_) => SamplerKind::Alias,
            SamplerEnum::Expansion(_) => SamplerKind::Expansion,
            SamplerEnum::Binary(_) => SamplerKind::Binary,
        }
    }

    /// Draws a value using an external generator.
    #[inline]
    pub fn sample_with<G: Rng>(&self, rng: &mut G) -> T {
        match self {
            SamplerEnum::Alias(s) => s.sample_with(rng),
            SamplerEnum::Expansion(s) => s.sample_with(rng),
            SamplerEnum::Binary(s) => s.sample_with(rng),
        }
    }
}

impl<T: Clone, R: RngCore, W: Weight> WeightedSampler<T> for SamplerEnum<T, R, W> {
    #[inline]
    fn sample(&mut self) -> T {
        match self {
            SamplerEnum::Alias(s) => s.sample(),
            SamplerEnum::Expansion(s) => s.sample(),
            SamplerEnum::Binary(s) => s.sample(),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        match self {
            SamplerEnum::Alias(s) => s.len(),
            SamplerEnum::Expansion(s) => s.len(),
            SamplerEnum::Binary(s) => s.len(),
        }
    }
}
