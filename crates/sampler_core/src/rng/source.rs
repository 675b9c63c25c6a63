//! Seeded pseudo-random generator wrapper.
//!
//! This module provides [`RandomSource`], a seeded PRNG wrapper that keeps
//! track of its seed so a run can be replayed from logs.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

use num_traits::{Float, PrimInt};
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::range::uniform_range;

/// Seeded uniform random number generator.
///
/// Wraps `rand::rngs::StdRng` together with the seed used to initialise it.
/// Implements [`RngCore`], so any `rand` distribution can be sampled from it
/// directly.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::RandomSource;
///
/// let mut rng = RandomSource::from_seed(42);
///
/// let i: i64 = rng.uniform_int(-10, 10);
/// let x: f64 = rng.uniform_real(0.0, 2.5);
/// let u = rng.uniform_unit();
///
/// assert!((-10..=10).contains(&i));
/// assert!((0.0..=2.5).contains(&x));
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Clone, Debug)]
pub struct RandomSource {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl RandomSource {
    /// Creates a new source initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of draws.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_core::rng::RandomSource;
    ///
    /// let mut rng1 = RandomSource::from_seed(12345);
    /// let mut rng2 = RandomSource::from_seed(12345);
    /// assert_eq!(rng1.uniform_unit(), rng2.uniform_unit());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a source seeded from wall-clock time and the current thread.
    ///
    /// The derived seed is still recorded and can be read back with
    /// [`RandomSource::seed`] to replay the run.
    pub fn from_entropy() -> Self {
        Self::from_seed(entropy_seed())
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Replaces the generator state, restarting the sequence from `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_core::rng::RandomSource;
    ///
    /// let mut rng = RandomSource::from_seed(1);
    /// let first = rng.uniform_unit();
    /// rng.uniform_unit();
    /// rng.reseed(1);
    /// assert_eq!(rng.uniform_unit(), first);
    /// ```
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::from_seed(seed);
    }

    /// Draws an integer uniformly from the inclusive range `[min, max]`.
    ///
    /// Bounds given in reverse order are swapped.
    #[inline]
    pub fn uniform_int<T>(&mut self, min: T, max: T) -> T
    where
        T: PrimInt + SampleUniform,
    {
        uniform_range(min, max, self)
    }

    /// Draws a real number uniformly from the inclusive range `[min, max]`.
    ///
    /// Bounds given in reverse order are swapped.
    ///
    /// # Panics
    ///
    /// Panics if either bound is NaN or infinite, or if `max - min`
    /// overflows to infinity (e.g. `f64::MIN..=f64::MAX`).
    #[inline]
    pub fn uniform_real<T>(&mut self, min: T, max: T) -> T
    where
        T: Float + SampleUniform,
    {
        uniform_range(min, max, self)
    }

    /// Draws an `f64` uniformly from the half-open interval `[0, 1)`.
    #[inline]
    pub fn uniform_unit(&mut self) -> f64 {
        self.inner.gen()
    }
}

impl RngCore for RandomSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Derives a non-deterministic seed from the clock and the thread identity.
pub(crate) fn entropy_seed() -> u64 {
    // Truncation of the nanosecond count keeps the fast-moving low bits.
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut hasher = DefaultHasher::new();
    std::thread::current().id().hash(&mut hasher);

    nanos ^ hasher.finish()
}
