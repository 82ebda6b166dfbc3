use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::fixed::Fixed;

/// Numeric representation a generator can run on.
///
/// Implemented for `f32`, `f64` and every [`Fixed`] width. Generators are
/// generic over this trait and get monomorphized per representation, so the
/// tick path never goes through dynamic dispatch.
pub trait Sample:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    const ZERO: Self;
    const ONE: Self;

    fn from_f32(value: f32) -> Self;
    fn from_i32(value: i32) -> Self;
    /// `numerator / denominator`, exact for fixed-point types.
    fn from_ratio(numerator: i32, denominator: i32) -> Self;

    fn to_f32(self) -> f32;
    /// Integer part, rounded toward -inf.
    fn to_i32(self) -> i32;

    /// `self / n` for a tick or cycle count, which may not fit in `Self`.
    fn div_count(self, n: u64) -> Self;
    /// `self * n` for a tick or cycle count. Saturates on fixed-point types.
    fn mul_count(self, n: u64) -> Self;

    fn floor(self) -> Self;
    /// Fractional part in `[0, 1)`.
    fn frac(self) -> Self;
    fn abs(self) -> Self;

    /// Quintic fade `6t^5 - 15t^4 + 10t^3`.
    ///
    /// The polynomial constants need integer headroom, so fixed-point types
    /// evaluate it at reduced precision.
    #[inline]
    fn quintic_fade(self) -> Self {
        let t = self;
        t * t * t * (t * (t * Self::from_i32(6) - Self::from_i32(15)) + Self::from_i32(10))
    }
}

impl Sample for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f32(value: f32) -> Self {
        value
    }

    #[inline]
    fn from_i32(value: i32) -> Self {
        value as f32
    }

    #[inline]
    fn from_ratio(numerator: i32, denominator: i32) -> Self {
        numerator as f32 / denominator as f32
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn to_i32(self) -> i32 {
        f32::floor(self) as i32
    }

    #[inline]
    fn div_count(self, n: u64) -> Self {
        self / n as f32
    }

    #[inline]
    fn mul_count(self, n: u64) -> Self {
        self * n as f32
    }

    #[inline]
    fn floor(self) -> Self {
        f32::floor(self)
    }

    #[inline]
    fn frac(self) -> Self {
        self - f32::floor(self)
    }

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }
}

impl Sample for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f32(value: f32) -> Self {
        value as f64
    }

    #[inline]
    fn from_i32(value: i32) -> Self {
        value as f64
    }

    #[inline]
    fn from_ratio(numerator: i32, denominator: i32) -> Self {
        numerator as f64 / denominator as f64
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }

    #[inline]
    fn to_i32(self) -> i32 {
        f64::floor(self) as i32
    }

    #[inline]
    fn div_count(self, n: u64) -> Self {
        self / n as f64
    }

    #[inline]
    fn mul_count(self, n: u64) -> Self {
        self * n as f64
    }

    #[inline]
    fn floor(self) -> Self {
        f64::floor(self)
    }

    #[inline]
    fn frac(self) -> Self {
        self - f64::floor(self)
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }
}

/// Intermediate width used by [`Sample::quintic_fade`] on fixed-point types.
type FadeFx = Fixed<15>;

impl<const F: u32> Sample for Fixed<F> {
    const ZERO: Self = Fixed::<F>::ZERO;
    const ONE: Self = Fixed::<F>::ONE;

    #[inline]
    fn from_f32(value: f32) -> Self {
        Fixed::from_f32(value)
    }

    #[inline]
    fn from_i32(value: i32) -> Self {
        Fixed::from_int(value)
    }

    #[inline]
    fn from_ratio(numerator: i32, denominator: i32) -> Self {
        Fixed::from_ratio(numerator, denominator)
    }

    #[inline]
    fn to_f32(self) -> f32 {
        Fixed::to_f32(self)
    }

    #[inline]
    fn to_i32(self) -> i32 {
        self.to_int()
    }

    #[inline]
    fn div_count(self, n: u64) -> Self {
        let n = n.min(i64::MAX as u64) as i64;
        Fixed::from_bits((self.to_bits() as i64 / n) as i32)
    }

    #[inline]
    fn mul_count(self, n: u64) -> Self {
        let n = n.min(i64::MAX as u64) as i64;
        let bits = (self.to_bits() as i64).saturating_mul(n);
        Fixed::from_bits(bits.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    #[inline]
    fn floor(self) -> Self {
        Fixed::floor(self)
    }

    #[inline]
    fn frac(self) -> Self {
        Fixed::frac(self)
    }

    #[inline]
    fn abs(self) -> Self {
        Fixed::abs(self)
    }

    #[inline]
    fn quintic_fade(self) -> Self {
        let f: FadeFx = self.rescale();
        let six = FadeFx::from_int(6);
        let fifteen = FadeFx::from_int(15);
        let ten = FadeFx::from_int(10);
        (f * f * f * (f * (f * six - fifteen) + ten)).rescale()
    }
}

/// Linear interpolation `a + (b - a) * mix`.
#[inline]
pub fn lerp<T: Sample>(a: T, b: T, mix: T) -> T {
    a + (b - a) * mix
}

#[inline]
pub fn min<T: Sample>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
pub fn max<T: Sample>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

#[inline]
pub fn clamp<T: Sample>(value: T, low: T, high: T) -> T {
    max(min(value, high), low)
}

/// Branch-shaped select, kept as a function so waveshapers read like their
/// math.
#[inline]
pub fn select<T: Sample>(condition: bool, a: T, b: T) -> T {
    if condition {
        a
    } else {
        b
    }
}

#[inline]
pub fn square<T: Sample>(x: T) -> T {
    x * x
}

#[inline]
pub fn cube<T: Sample>(x: T) -> T {
    x * x * x
}
