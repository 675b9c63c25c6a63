//! Numeric weight abstraction.
//!
//! All three samplers accept any primitive integer or float as a weight.
//! [`Weight`] collects the handful of operations they need: conversion to
//! probability mass, integer counts for expansion, checked accumulation for
//! prefix sums, and drawing a point on the accumulated mass line.

use std::fmt::Debug;

use num_traits::ToPrimitive;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

/// A non-negative sampling weight.
///
/// Implemented for all primitive integers and for `f32`/`f64`.
pub trait Weight: Copy + PartialOrd + Debug + SampleUniform + ToPrimitive {
    /// The additive identity.
    const ZERO: Self;

    /// Returns true if the weight is finite and not negative.
    fn is_valid(self) -> bool;

    /// Adds two weights, returning `None` on overflow or non-finite results.
    fn checked_accumulate(self, rhs: Self) -> Option<Self>;

    /// Interprets the weight as a repetition count.
    ///
    /// Returns `None` for negative, fractional or non-finite weights.
    fn to_count(self) -> Option<usize>;

    /// Draws a point on the mass line `(0, total]`.
    ///
    /// Integer weights draw uniformly from `[1, total]`; float weights from
    /// the half-open interval `(0, total]`. Zero is never returned, which is
    /// what keeps zero-weight entries out of a lower-bound search.
    fn draw_mass<R: Rng>(total: Self, rng: &mut R) -> Self;

    /// Converts the weight to probability mass.
    #[inline]
    fn to_mass(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

macro_rules! impl_integer_weight {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn is_valid(self) -> bool {
                    // Unsigned types trip `unused_comparisons` here.
                    #[allow(unused_comparisons)]
                    let non_negative = self >= 0;
                    non_negative
                }

                #[inline]
                fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                #[inline]
                fn to_count(self) -> Option<usize> {
                    self.to_usize()
                }

                #[inline]
                fn draw_mass<R: Rng>(total: Self, rng: &mut R) -> Self {
                    rng.gen_range(1..=total)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn is_valid(self) -> bool {
                    self.is_finite() && self >= 0.0
                }

                #[inline]
                fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    sum.is_finite().then_some(sum)
                }

                #[inline]
                fn to_count(self) -> Option<usize> {
                    if self.is_valid() && self.fract() == 0.0 {
                        self.to_usize()
                    } else {
                        None
                    }
                }

                #[inline]
                fn draw_mass<R: Rng>(total: Self, rng: &mut R) -> Self {
                    let u: $ty = rng.gen();
                    total * (1.0 - u)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_float_weight!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomSource;
    use approx::assert_relative_eq;

    #[test]
    fn test_integer_validity() {
        assert!(3_u32.is_valid());
        assert!(0_i64.is_valid());
        assert!(!(-1_i32).is_valid());
    }

    #[test]
    fn test_float_validity() {
        assert!(0.5_f64.is_valid());
        assert!(0.0_f32.is_valid());
        assert!(!(-0.1_f64).is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
    }

    #[test]
    fn test_checked_accumulate() {
        assert_eq!(200_u8.checked_accumulate(55), Some(255));
        assert_eq!(200_u8.checked_accumulate(56), None);
        assert_eq!(f64::MAX.checked_accumulate(f64::MAX), None);
        assert_eq!(1.5_f64.checked_accumulate(2.0), Some(3.5));
    }

    #[test]
    fn test_to_count() {
        assert_eq!(4_u32.to_count(), Some(4));
        assert_eq!((-4_i32).to_count(), None);
        assert_eq!(3.0_f64.to_count(), Some(3));
        assert_eq!(2.5_f64.to_count(), None);
        assert_eq!((-1.0_f32).to_count(), None);
    }

    #[test]
    fn test_to_mass() {
        assert_relative_eq!(7_u16.to_mass(), 7.0);
        assert_relative_eq!(0.25_f32.to_mass(), 0.25);
    }

    #[test]
    fn test_integer_draw_mass_excludes_zero() {
        let mut rng = RandomSource::from_seed(9);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let m = u32::draw_mass(3, &mut rng);
            assert!((1..=3).contains(&m));
            seen[m as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1] && seen[2] && seen[3]);
    }

    #[test]
    fn test_float_draw_mass_in_half_open_interval() {
        let mut rng = RandomSource::from_seed(9);
        for _ in 0..10_000 {
            let m = f64::draw_mass(2.0, &mut rng);
            assert!(m > 0.0 && m <= 2.0, "mass {} outside (0, 2]", m);
        }
    }
}
