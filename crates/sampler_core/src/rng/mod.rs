//! # Uniform Random Number Substrate
//!
//! Every sampler in this crate draws its randomness from the types in this
//! module. Two ways of obtaining a generator are provided:
//!
//! - [`RandomSource`]: an owned, explicitly seeded (or entropy-seeded)
//!   generator. Pass it into a sampler constructor to get reproducible draws.
//! - [`ThreadSource`]: a handle to the calling thread's ambient source,
//!   created lazily on first use by [`random_source`]. This is the default
//!   used by the `new` constructors of every sampler.
//!
//! ## Execution Contexts
//!
//! A generator is mutated on every draw, so each one belongs to exactly one
//! thread of control. [`ThreadSource`] is deliberately `!Send`; an owned
//! [`RandomSource`] may be moved between threads but needs `&mut` access to
//! draw. Callers that want to share a source across threads must wrap it in
//! their own `Mutex`.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{random_source, uniform_range, RandomSource};
//!
//! // Owned, reproducible source
//! let mut rng = RandomSource::from_seed(12345);
//! let die: u32 = rng.uniform_int(1, 6);
//! assert!((1..=6).contains(&die));
//!
//! // Reversed bounds are swapped
//! let x: f64 = uniform_range(1.0, -1.0, &mut rng);
//! assert!((-1.0..=1.0).contains(&x));
//!
//! // Ambient per-thread source, reseeded for replay
//! let mut ambient = random_source(Some(7));
//! let first: u64 = uniform_range(0, 100, &mut ambient);
//! let mut replay = random_source(Some(7));
//! assert_eq!(first, uniform_range(0, 100, &mut replay));
//! ```

mod ambient;
mod range;
mod source;

// Public re-exports
pub use ambient::{random_source, thread_uniform_range, ThreadSource};
pub use range::uniform_range;
pub use source::RandomSource;
