//! Stateless range mapping over any generator.

use rand::distributions::uniform::SampleUniform;
use rand::Rng;

/// Draws a single value uniformly from the inclusive range `[min, max]`.
///
/// Works for every integer and floating-point type supported by `rand`.
/// If `min > max` the bounds are swapped before drawing.
///
/// # Panics
///
/// Panics if a floating-point bound is NaN or infinite, or if the width of
/// the range is not representable (e.g. `f64::MIN..=f64::MAX`).
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{uniform_range, RandomSource};
///
/// let mut rng = RandomSource::from_seed(3);
/// let n: usize = uniform_range(10, 0, &mut rng);
/// assert!(n <= 10);
/// ```
#[inline]
pub fn uniform_range<T, R>(min: T, max: T, rng: &mut R) -> T
where
    T: SampleUniform + PartialOrd,
    R: Rng,
{
    let (low, high) = if min > max { (max, min) } else { (min, max) };
    rng.gen_range(low..=high)
}
