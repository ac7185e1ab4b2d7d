//! Floating-point abstraction so the kernel runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

/// Scalar operations needed by the vector kernel, the chain and the boids.
///
/// Implemented for `f32` and `f64`. All transcendental functions go through
/// `libm` so the crate stays `no_std`. `SampleUniform` lets `rand` draw
/// values directly at the target precision.
pub trait Float:
    SampleUniform
    + Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Quiet NaN, used as the "no hit" sentinel.
    fn nan() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Round half away from zero.
    fn round(self) -> Self;
    /// Floating-point remainder; the sign follows the dividend.
    fn fmod(self, divisor: Self) -> Self;
    /// `true` if the value is NaN.
    fn is_nan(self) -> bool;
    /// `true` if the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert a count into the scalar type.
    fn from_usize(v: usize) -> Self;
    /// Truncate towards zero into a count; negative and NaN become 0.
    fn to_usize(self) -> usize;

    /// Clamp self to [min, max].
    fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }
}

/// Uniform sample in `[low, high)` for any [`Float`].
///
/// An empty, inverted or non-finite range yields `low`.
pub(crate) fn uniform<F: Float, R: Rng + ?Sized>(rng: &mut R, low: F, high: F) -> F {
    if low < high && (high - low).is_finite() {
        rng.gen_range(low..high)
    } else {
        low
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn nan() -> Self { f32::NAN }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn round(self) -> Self { libm::roundf(self) }
    fn fmod(self, divisor: Self) -> Self { libm::fmodf(self, divisor) }
    fn is_nan(self) -> bool { f32::is_nan(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f32 }
    fn to_usize(self) -> usize { self as usize }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn nan() -> Self { f64::NAN }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn round(self) -> Self { libm::round(self) }
    fn fmod(self, divisor: Self) -> Self { libm::fmod(self, divisor) }
    fn is_nan(self) -> bool { f64::is_nan(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_usize(v: usize) -> Self { v as f64 }
    fn to_usize(self) -> usize { self as usize }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, RngCore, SeedableRng};

    /// Every draw is all ones, the top of each integer range.
    struct SaturatedRng;

    impl RngCore for SaturatedRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }
        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0xff);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn uniform_excludes_upper_bound() {
        assert!(uniform(&mut SaturatedRng, 0.75f32, 1.0) < 1.0);
        assert!(uniform(&mut SaturatedRng, 0.75f64, 1.0) < 1.0);
        assert!(uniform(&mut SaturatedRng, -10.0f32, 10.0) < 10.0);
    }

    #[test]
    fn uniform_f64_uses_full_precision() {
        let mut rng = SmallRng::seed_from_u64(5);
        let off_grid = (0..1000)
            .map(|_| uniform(&mut rng, 0.0f64, 1.0) * 16_777_216.0)
            .filter(|scaled| libm::floor(*scaled) != *scaled)
            .count();
        assert!(off_grid > 900, "only {off_grid} of 1000 samples finer than 2^-24");
    }

    #[test]
    fn uniform_degenerate_range_returns_low() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(uniform(&mut rng, 5.0f64, 5.0), 5.0);
        assert_eq!(uniform(&mut rng, 3.0f32, 1.0), 3.0);
        assert_eq!(uniform(&mut rng, 0.0f64, f64::INFINITY), 0.0);
    }

    #[test]
    fn fmod_follows_dividend_sign() {
        assert!((Float::fmod(-7.0f64, 3.0) - -1.0).abs() < 1e-12);
        assert!((Float::fmod(7.5f32, 2.0) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(Float::round(2.5f64), 3.0);
        assert_eq!(Float::round(0.49f32), 0.0);
        assert_eq!(Float::to_usize(Float::round(0.5f32)), 1);
    }

    #[test]
    fn clamp_orders_bounds() {
        assert_eq!(Float::clamp(12.0f32, -10.0, 10.0), 10.0);
        assert_eq!(Float::clamp(-12.0f64, -10.0, 10.0), -10.0);
        assert_eq!(Float::clamp(3.0f64, -10.0, 10.0), 3.0);
    }

    #[test]
    fn negative_to_usize_saturates() {
        assert_eq!(Float::to_usize(-3.0f64), 0);
        assert_eq!(Float::to_usize(f32::NAN), 0);
    }
}
