use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Fixed-Point Numbers
===================

A fixed-point number is an integer that we agree to read as a fraction. The
stored integer `bits` represents the real value `bits / 2^F`, where `F` is the
number of fractional bits chosen at compile time.

    Fixed<27> with bits = 0x0800_0000  ->  1.0
    Fixed<27> with bits = 0x0400_0000  ->  0.5
    Fixed<27> with bits = -0x0800_0000 -> -1.0

With an i32 container and F = 27 we get 4 integer bits plus sign, so the
representable range is [-16, 16) with a resolution of 2^-27 (~7.5e-9). That
is plenty for audio-rate phases and normalized signals, and much cheaper
than floats on a small MCU without an FPU.


Arithmetic
----------

  add / sub    Plain integer add on the raw bits. Equal widths never lose
               precision. Overflow WRAPS (two's complement).

  ads          Saturating add. Overflow in the direction of both operands
               clamps to MIN / MAX instead of wrapping.

  mul          (a * b) >> F, computed in i64 so the intermediate product
               cannot overflow. The shift truncates toward -inf.

  div          (a << F) / b, computed in i64. Integer division truncates
               toward zero.

Both wrapping and saturating addition are kept on purpose: phase
accumulators rely on the wrap, signal mixing relies on the clamp.


Masks
-----

    floor(x) = bits & !FRAC_MASK     (rounds toward -inf)
    frac(x)  = bits &  FRAC_MASK     (always in [0, 1))

so `floor(x) + frac(x) == x` holds bit-exactly for every value.
*/

/// Signed fixed-point number backed by an `i32` with `F` fractional bits.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed<const F: u32> {
    bits: i32,
}

/// The default audio-rate representation: 4 integer bits, 27 fractional bits.
pub type SampleFx = Fixed<27>;

impl<const F: u32> Fixed<F> {
    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = F;
    const FRAC_MASK: i32 = ((1i64 << F) - 1) as i32;
    const SCALE: f64 = (1u64 << F) as f64;

    pub const ZERO: Self = Self { bits: 0 };
    pub const ONE: Self = Self { bits: 1 << F };
    /// Largest representable value (`SMax`).
    pub const MAX: Self = Self { bits: i32::MAX };
    /// Smallest representable value (`SMin`).
    pub const MIN: Self = Self { bits: i32::MIN };

    /// Wrap raw storage bits without scaling.
    #[inline]
    pub const fn from_bits(bits: i32) -> Self {
        Self { bits }
    }

    #[inline]
    pub const fn to_bits(self) -> i32 {
        self.bits
    }

    /// Integer value scaled by `2^F`. Wraps if `value` does not fit.
    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self {
            bits: value.wrapping_shl(F),
        }
    }

    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self {
            bits: (value as f64 * Self::SCALE) as i32,
        }
    }

    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self {
            bits: (value * Self::SCALE) as i32,
        }
    }

    /// Exact `numerator / denominator` computed on the raw integers.
    ///
    /// Unlike `from_f32(n as f32 / d as f32)` this never goes through a
    /// float, so the result is the correctly truncated fixed-point ratio.
    ///
    /// # Panics
    /// Panics if `denominator` is zero.
    #[inline]
    pub fn from_ratio(numerator: i32, denominator: i32) -> Self {
        Self::from_bits(numerator) / Self::from_bits(denominator)
    }

    /// Integer part, rounded toward -inf.
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.bits >> F
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        (self.bits as f64 / Self::SCALE) as f32
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.bits as f64 / Self::SCALE
    }

    /// Change the number of fractional bits.
    ///
    /// Widening (`G > F`) shifts left and may overflow the integer part;
    /// narrowing shifts right and silently drops the low fractional bits.
    #[inline]
    pub const fn rescale<const G: u32>(self) -> Fixed<G> {
        let bits = if G >= F {
            self.bits.wrapping_shl(G - F)
        } else {
            self.bits >> (F - G)
        };
        Fixed::<G>::from_bits(bits)
    }

    /// Saturating add: clamps to [`Self::MIN`, `Self::MAX`] instead of wrapping.
    #[inline]
    pub const fn ads(self, rhs: Self) -> Self {
        Self {
            bits: self.bits.saturating_add(rhs.bits),
        }
    }

    #[inline]
    pub const fn floor(self) -> Self {
        Self {
            bits: self.bits & !Self::FRAC_MASK,
        }
    }

    #[inline]
    pub const fn frac(self) -> Self {
        Self {
            bits: self.bits & Self::FRAC_MASK,
        }
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            bits: self.bits.wrapping_abs(),
        }
    }
}

impl<const F: u32> Add for Fixed<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            bits: self.bits.wrapping_add(rhs.bits),
        }
    }
}

impl<const F: u32> Sub for Fixed<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            bits: self.bits.wrapping_sub(rhs.bits),
        }
    }
}

impl<const F: u32> Mul for Fixed<F> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let wide = (self.bits as i64 * rhs.bits as i64) >> F;
        Self { bits: wide as i32 }
    }
}

impl<const F: u32> Div for Fixed<F> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let wide = ((self.bits as i64) << F) / rhs.bits as i64;
        Self { bits: wide as i32 }
    }
}

impl<const F: u32> Neg for Fixed<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            bits: self.bits.wrapping_neg(),
        }
    }
}

impl<const F: u32> AddAssign for Fixed<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const F: u32> SubAssign for Fixed<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const F: u32> MulAssign for Fixed<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const F: u32> DivAssign for Fixed<F> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const F: u32> From<i32> for Fixed<F> {
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl<const F: u32> From<f32> for Fixed<F> {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl<const F: u32> From<f64> for Fixed<F> {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl<const F: u32> From<Fixed<F>> for f32 {
    fn from(value: Fixed<F>) -> Self {
        value.to_f32()
    }
}

impl<const F: u32> From<Fixed<F>> for f64 {
    fn from(value: Fixed<F>) -> Self {
        value.to_f64()
    }
}

impl<const F: u32> fmt::Debug for Fixed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fixed[{},{}]", self.bits, self.to_f64())
    }
}

impl<const F: u32> fmt::Display for Fixed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fixed[{},{}]", self.bits, self.to_f32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Fx = SampleFx;

    const LSB: f64 = 1.0 / (1u64 << 27) as f64;

    #[test]
    fn converts_integers_and_floats() {
        assert_eq!(Fx::from_int(1), Fx::ONE);
        assert_eq!(Fx::from_f32(0.5).to_bits(), 1 << 26);
        assert_eq!(Fx::from_f64(-1.0).to_bits(), -(1 << 27));
        assert_eq!(Fx::from_f32(3.75).to_int(), 3);
        assert_eq!(Fx::from_f32(-0.25).to_int(), -1, "to_int rounds toward -inf");
        assert!((Fx::from_f32(0.123).to_f32() - 0.123).abs() < 1e-6);
    }

    #[test]
    fn addition_matches_float_sum_within_one_lsb() {
        let values = [-7.5, -1.0, -0.333, 0.0, 0.001, 0.25, 1.5, 6.125];
        for &a in &values {
            for &b in &values {
                let fixed_sum = (Fx::from_f64(a) + Fx::from_f64(b)).to_f64();
                let direct = Fx::from_f64(a + b).to_f64();
                assert!(
                    (fixed_sum - direct).abs() <= LSB,
                    "{a} + {b}: {fixed_sum} vs {direct}"
                );
            }
        }
    }

    #[test]
    fn plain_add_wraps_but_ads_saturates() {
        let big = Fx::from_f32(15.0);

        let wrapped = big + big;
        assert!(wrapped < Fx::ZERO, "plain add should wrap around");

        assert_eq!(big.ads(big), Fx::MAX);
        assert_eq!((-big).ads(-big), Fx::MIN);
        assert_eq!(Fx::MAX.ads(Fx::ONE), Fx::MAX);
        assert_eq!(Fx::MIN.ads(-Fx::ONE), Fx::MIN);

        // Mixed signs can never overflow.
        assert_eq!(big.ads(-big), Fx::ZERO);
    }

    #[test]
    fn floor_plus_frac_is_identity() {
        for &v in &[-3.75f32, -1.0, -0.001, 0.0, 0.5, 0.999, 2.25, 15.5] {
            let x = Fx::from_f32(v);
            assert_eq!(x.floor() + x.frac(), x, "value {v}");
            assert_eq!(x.frac().frac(), x.frac());
            assert!(x.frac() >= Fx::ZERO && x.frac() < Fx::ONE);
        }
        assert_eq!(Fx::from_f32(-0.25).floor(), Fx::from_int(-1));
        assert_eq!(Fx::from_f32(-0.25).frac(), Fx::from_f32(0.75));
    }

    #[test]
    fn multiply_and_divide_truncate() {
        let a = Fx::from_f32(1.5);
        let b = Fx::from_f32(-2.25);
        assert_eq!(a * b, Fx::from_f32(-3.375));
        assert_eq!(b / a, Fx::from_f32(-1.5));

        // 1/3 truncates instead of rounding.
        let third = Fx::ONE / Fx::from_int(3);
        assert_eq!(third.to_bits(), (1 << 27) / 3);

        // Products larger than i32 in the intermediate still work.
        let c = Fx::from_f32(3.0);
        assert_eq!(c * c, Fx::from_int(9));
    }

    #[test]
    fn from_ratio_is_exact() {
        assert_eq!(Fx::from_ratio(1, 4), Fx::from_f32(0.25));
        assert_eq!(
            Fx::from_ratio(32767, 32768).to_bits(),
            ((32767i64 << 27) / 32768) as i32
        );
        assert_eq!(Fx::from_ratio(-3, 2), Fx::from_f32(-1.5));
    }

    #[test]
    fn abs_min_max_and_ordering() {
        let a = Fx::from_f32(-0.75);
        let b = Fx::from_f32(0.5);
        assert_eq!(a.abs(), Fx::from_f32(0.75));
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
        assert!(a < b);
        assert!(b >= Fx::from_f32(0.5));
    }

    #[test]
    fn rescale_between_widths() {
        let x = Fx::from_f32(1.2345);
        let narrow: Fixed<15> = x.rescale();
        assert!((narrow.to_f32() - 1.2345).abs() < 1.0 / 32768.0);

        let back: Fx = narrow.rescale();
        assert_eq!(back.frac().to_bits() & 0xFFF, 0, "narrowing dropped low bits");
        assert!(back <= x);
    }

    #[test]
    fn display_shows_bits_and_value() {
        assert_eq!(format!("{}", Fixed::<16>::from_f32(0.5)), "fixed[32768,0.5]");
    }
}
