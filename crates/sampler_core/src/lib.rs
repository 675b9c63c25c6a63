//! # Sampler Core (Sampling Kernel)
//!
//! Discrete weighted random sampling: given a finite set of values and
//! non-negative weights, produce independent draws whose long-run
//! frequencies follow the weights.
//!
//! ## Sampler Constructions
//!
//! | Sampler              | Build    | Draw     | Memory | Weights              |
//! |----------------------|----------|----------|--------|----------------------|
//! | [`AliasSampler`]     | O(n)     | O(1)     | O(n)   | any non-negative     |
//! | [`ExpansionSampler`] | O(ΣW)    | O(1)     | O(ΣW)  | small integer counts |
//! | [`BinarySampler`]    | O(n)     | O(log n) | O(n)   | any non-negative     |
//!
//! All three validate their input once at construction and never fail
//! afterwards. Weight tables are immutable; there is no reweighting.
//!
//! ## Random Sources
//!
//! Every sampler owns a generator `R: RngCore`. The `new` constructors use
//! the calling thread's ambient source ([`rng::random_source`]); the
//! `with_source` constructors take an explicit one, which is the way to get
//! reproducible draws.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::{AliasSampler, RandomSource, WeightedSampler};
//!
//! let values = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let weights = [1_u32, 2, 3, 4, 5, 6, 7, 8, 9];
//!
//! let mut a = AliasSampler::with_source(&values, &weights, RandomSource::from_seed(1)).unwrap();
//! let mut b = AliasSampler::with_source(&values, &weights, RandomSource::from_seed(1)).unwrap();
//!
//! // Identically seeded sources replay identical draws.
//! assert_eq!(a.sample_n(100), b.sample_n(100));
//! ```
//!
//! ## Known Constraints
//!
//! - **Thread confinement**: a sampler and its source serve one thread of
//!   control at a time. The ambient [`rng::ThreadSource`] is `!Send`; sharing
//!   an owned source across threads requires a caller-side `Mutex`.
//! - **Expansion memory**: [`ExpansionSampler`] allocates one slot per unit
//!   of weight and does not cap the total.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod alias;
pub mod binary;
pub mod config;
pub mod error;
pub mod expansion;
pub mod rng;
pub mod sampler;
pub mod stats;
pub mod weight;

// Public re-exports
pub use alias::{AliasEntry, AliasSampler, AliasTable};
pub use binary::BinarySampler;
pub use config::{SamplerConfig, SamplerConfigBuilder, DEFAULT_NORMALISATION_TOLERANCE};
pub use error::SamplerError;
pub use expansion::ExpansionSampler;
pub use rng::{random_source, uniform_range, RandomSource, ThreadSource};
pub use sampler::{SamplerEnum, SamplerKind, WeightedSampler};
pub use weight::Weight;
