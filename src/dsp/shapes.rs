//! Waveshapers: pure functions from phase (and phase increment) to a sample.

use crate::math::sample::{cube, select, square};
use crate::math::Sample;

/*
Waveshapers
===========

Every function here maps a phase in [0, 1) to a value in [-1, 1]. They hold
no state, so one phasor can drive several shapes at once.


Naive shapes and aliasing
-------------------------

The textbook saw and square have an instantaneous jump. A jump contains
energy at every frequency, and everything above Nyquist folds back down as
inharmonic aliasing. The triangle has no jump but a corner (a jump in the
slope), which aliases less but still audibly at high pitches.


PolyBLEP / PolyBLAMP
--------------------

Instead of building a band-limited waveform from scratch we take the naive
one and subtract a small correction around each discontinuity:

  BLEP  (band-limited step)     quadratic kernel, fixes jumps in value
  BLAMP (band-limited ramp)     cubic kernel, fixes jumps in slope

The kernel only lives within one phase increment on either side of the
discontinuity, so it costs a couple of comparisons on every other sample.

    naive saw      polyBLEP saw
       ╱│   ╱│        ╱╮   ╱╮
      ╱ │  ╱ │       ╱ │  ╱ │
     ╱  │ ╱  │      ╱  ╰╮╱  ╰╮
        │╱   │╱          ╰╯    ╰

The kernels are normalized for a unit step (BLEP) or unit slope change
(BLAMP); callers scale them by the size of the actual discontinuity.

Precondition: phase_increment must stay below the distance between two
discontinuities (the pulse width for rect). Beyond that the kernels overlap
and the correction is unbounded.
*/

/// Odd polynomial approximation of `sin(pi * x)` for `x` in `[-1, 1]`.
#[inline]
fn fast_sine<T: Sample>(x: T) -> T {
    let x_squared = x * x;

    let mut power = x_squared * x;
    let mut result = T::from_f32(3.138982) * x;
    result -= T::from_f32(5.133625) * power;
    power *= x_squared;
    result += T::from_f32(2.428288) * power;
    power *= x_squared;
    result -= T::from_f32(0.433645) * power;

    result
}

/// Polynomial sine of a phase.
///
/// The phase is folded to `[-1, 1)` around the half cycle, so the result
/// starts at 0 and goes negative first: `sine(p) ≈ -sin(2πp)`.
#[inline]
pub fn sine<T: Sample>(phase: T) -> T {
    fast_sine((phase.frac() - T::from_ratio(1, 2)) * T::from_i32(2))
}

/// [`sine`] a quarter cycle ahead.
#[inline]
pub fn cosine<T: Sample>(phase: T) -> T {
    sine(phase + T::from_ratio(1, 4))
}

/// Piecewise-quadratic sine, cheaper and rougher than [`sine`].
pub fn quadratic_sine<T: Sample>(phase: T) -> T {
    let arc = |a: T| -a * a + T::from_ratio(3, 4) + a;
    let four = T::from_i32(4);

    if phase < T::from_ratio(1, 2) {
        if phase < T::from_ratio(1, 4) {
            arc((phase - T::from_ratio(1, 8)) * four)
        } else {
            arc((phase - T::from_ratio(3, 8)) * -four)
        }
    } else if phase < T::from_ratio(3, 4) {
        -arc((phase - T::from_ratio(5, 8)) * four)
    } else {
        -arc((phase - T::from_ratio(7, 8)) * -four)
    }
}

#[inline]
pub fn quadratic_cosine<T: Sample>(phase: T) -> T {
    quadratic_sine((phase + T::from_ratio(1, 4)).frac())
}

/// Sine and cosine of the same phase from one piecewise-quadratic evaluation.
///
/// Each quarter cycle shares one parabola between both outputs, which is what
/// makes this cheap enough to sweep a circle per tick.
pub fn quadratic_sin_cos<T: Sample>(phase: T) -> (T, T) {
    // cos(pi/4) = sin(pi/4)
    let c = T::from_f32(std::f32::consts::FRAC_1_SQRT_2);
    let curve = |a: T| (T::from_i32(2) - T::from_i32(4) * c) * a * a + c;
    let four = T::from_i32(4);

    if phase < T::from_ratio(1, 2) {
        if phase < T::from_ratio(1, 4) {
            let a = (phase - T::from_ratio(1, 8)) * four;
            let t = curve(a);
            (t + a, t - a)
        } else {
            let a = (phase - T::from_ratio(3, 8)) * -four;
            let t = curve(a);
            (t + a, a - t)
        }
    } else if phase < T::from_ratio(3, 4) {
        let a = (phase - T::from_ratio(5, 8)) * four;
        let t = curve(a);
        (-t - a, a - t)
    } else {
        let a = (phase - T::from_ratio(7, 8)) * -four;
        let t = curve(a);
        (-t - a, t - a)
    }
}

/// Rising saw centered on the half cycle: 0 at phase 0, jump at 0.5.
#[inline]
pub fn saw<T: Sample>(phase: T) -> T {
    T::from_i32(2) * select(phase < T::from_ratio(1, 2), phase, phase - T::ONE)
}

#[inline]
pub fn reverse_saw<T: Sample>(phase: T) -> T {
    -saw(phase)
}

/// +1 before `mid_point`, -1 after.
#[inline]
pub fn rect<T: Sample>(phase: T, mid_point: T) -> T {
    select(phase < mid_point, T::ONE, -T::ONE)
}

/// Triangle with corners at 0.25 (+1) and 0.75 (-1).
#[inline]
pub fn triangle<T: Sample>(phase: T) -> T {
    T::ONE - (T::from_i32(2) - (T::from_i32(4) * phase - T::from_i32(3)).abs()).abs()
}

/// BLEP residual for a unit step at `discontinuity`.
///
/// Zero outside one increment on either side, so a zero increment never
/// reaches the division.
#[inline]
pub fn poly_blep<T: Sample>(phase: T, phase_increment: T, discontinuity: T) -> T {
    let two = T::from_i32(2);

    if phase >= discontinuity && phase < discontinuity + phase_increment {
        -square((phase - (discontinuity + phase_increment)) / phase_increment) / two
    } else if phase >= discontinuity - phase_increment && phase < discontinuity {
        square((phase - (discontinuity - phase_increment)) / phase_increment) / two
    } else {
        T::ZERO
    }
}

/// [`poly_blep`] with the discontinuity at the wrap point (0 == 1).
#[inline]
pub fn poly_blep_fixed<T: Sample>(phase: T, phase_increment: T) -> T {
    let two = T::from_i32(2);

    if phase < phase_increment {
        -square(phase / phase_increment - T::ONE) / two
    } else if phase > T::ONE - phase_increment {
        square((phase - (T::ONE - phase_increment)) / phase_increment) / two
    } else {
        T::ZERO
    }
}

/// BLAMP residual for a unit slope change at `discontinuity`.
#[inline]
pub fn poly_blamp<T: Sample>(phase: T, phase_increment: T, discontinuity: T) -> T {
    let six = T::from_i32(6);

    if phase >= discontinuity && phase < discontinuity + phase_increment {
        -cube((phase - discontinuity) / phase_increment - T::ONE) / six
    } else if phase >= discontinuity - phase_increment && phase < discontinuity {
        cube((phase - discontinuity) / phase_increment + T::ONE) / six
    } else {
        T::ZERO
    }
}

/// [`poly_blamp`] with the discontinuity at the wrap point.
#[inline]
pub fn poly_blamp_fixed<T: Sample>(phase: T, phase_increment: T) -> T {
    let six = T::from_i32(6);

    if phase < phase_increment {
        -cube(phase / phase_increment - T::ONE) / six
    } else if phase > T::ONE - phase_increment {
        cube((phase - T::ONE) / phase_increment + T::ONE) / six
    } else {
        T::ZERO
    }
}

/// Band-limited pulse. Jumps up at 0 and down at `mid_point`.
#[inline]
pub fn rect_poly_blep<T: Sample>(phase: T, phase_increment: T, mid_point: T) -> T {
    // The residual is scaled by the height of the step.
    let step = T::from_i32(2);
    rect(phase, mid_point) + step * poly_blep_fixed(phase, phase_increment)
        - step * poly_blep(phase, phase_increment, mid_point)
}

#[inline]
pub fn saw_poly_blep<T: Sample>(phase: T, phase_increment: T) -> T {
    let step = T::from_i32(2);
    saw(phase) - step * poly_blep(phase, phase_increment, T::from_ratio(1, 2))
}

#[inline]
pub fn triangle_poly_blamp<T: Sample>(phase: T, phase_increment: T) -> T {
    // Slope goes from +4 to -4 per cycle: a change of 8 per unit phase.
    let slope = phase_increment * T::from_i32(8);
    triangle(phase) - slope * poly_blamp(phase, phase_increment, T::from_ratio(1, 4))
        + slope * poly_blamp(phase, phase_increment, T::from_ratio(3, 4))
}

/// Wrap any phase into `[0, 1)`.
#[inline]
pub fn wrap_phase<T: Sample>(phase: T) -> T {
    phase - phase.floor()
}

/// Moog-style shark tooth: a triangle with a slice of falling saw inserted
/// around its bottom corner.
///
/// `shape = 0` is a pure triangle, `shape = 1` a pure saw.
pub fn shark_tooth<T: Sample>(phase: T, shape: T) -> T {
    let half = T::from_ratio(1, 2);

    // Saw ramping down from +1 at saw_phase 0 to -1 at saw_phase 1, offset so
    // its window lines up with the triangle's bottom.
    let saw_phase = wrap_phase(phase + T::from_ratio(1, 4) - half * shape);
    let saw_down = (saw_phase - half) * T::from_i32(-2);

    if T::ONE - saw_phase < shape {
        saw_down
    } else {
        triangle(phase)
    }
}
