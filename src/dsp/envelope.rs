use crate::math::Sample;

/*
Envelope Generators
===================

Four small generators that turn a gate (or a start call) into a contour.
None of them know about time in seconds; durations are in ticks, and the
host converts with its own sample rate.

Vocabulary
----------

  gate         Boolean sampled once per tick. High starts (or restarts) the
               attack.

  noise floor  1e-4. "Close enough" for the exponential shapes, which would
               otherwise approach their target forever.

  coefficient  For the exponential shapes, the fraction of the remaining
               distance that is KEPT each tick. 0 jumps, values near 1 crawl.


Exponential slew
----------------

    value = target + (value - target) * coeff

Each tick shrinks the distance to the target by a constant factor. To reach
the noise floor in N ticks:

    coeff^N = noise_floor   =>   coeff = exp(ln(noise_floor) / N)

That is `calc_slew_coeff`. Rising and falling use separate coefficients, so
one slew gives independent attack and decay times.


AD envelope
-----------

  Level
    1.0 ┐   ╭──╮
        │  ╱    ╲
        │ │      ╲_
    0.0 └─┴────────‾‾──→ ticks
         gate

The AD envelope drives a slew toward 1 while the gate is high. Once the slew
is within the noise floor of 1 the target drops back to 0, and decay starts
on its own. There is no gate-low edge involved. The check runs BEFORE the
gate is applied, so a held gate re-raises the target on the same tick and
the value parks just under 1.


Linear AD
---------

Same contract with straight lines. Attack adds `1 / attack_ticks` until the
value reaches 1. If the gate is still high the value holds at 1; otherwise
the part of the last step that went past 1 is spent on release instead:

    overshoot = value - 1                      (fraction of an attack step)
    value     = 1 - overshoot * release / attack

so the peak is not flattened by a partial tick.


Exponential segment
-------------------

A one-shot geometric ramp between two values:

    fraction starts at 1, fraction *= noise_floor^(1 / duration)
    value = to + (from - to) * fraction

After `duration` ticks the fraction reaches the noise floor, the segment
snaps to `to` and reports `eos()`.
*/

/// Distance to the target at which the exponential shapes count as done.
pub const NOISE_FLOOR: f32 = 1e-4;

/// Keep-coefficient that decays to `noise_floor` in `sample_count` ticks.
pub fn calc_slew_coeff(sample_count: u32, noise_floor: f32) -> f32 {
    (noise_floor.ln() / sample_count.max(1) as f32).exp()
}

/// Classic one-pole smoothing factor for a time constant in seconds.
///
/// Note the opposite convention to [`calc_slew_coeff`]: this is the amount
/// MOVED per tick, `y += coeff * (x - y)`. Zero time constants return 1.
pub fn one_pole_coeff(sample_rate: f32, time_constant: f32) -> f32 {
    let samples = time_constant * sample_rate;
    if samples > 0.0 {
        1.0 - (-1.0 / samples).exp()
    } else {
        1.0
    }
}

/// Exponential slew limiter with separate rise and fall coefficients.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slew<T: Sample> {
    value: T,
    up: T,   // keep-coefficient while rising
    down: T, // keep-coefficient while falling
}

impl<T: Sample> Slew<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            up: T::ZERO,
            down: T::ZERO,
        }
    }

    /// Jump to `value` without slewing.
    pub fn init(&mut self, value: T) {
        self.value = value;
    }

    pub fn set_coefficients(&mut self, up: T, down: T) {
        self.up = up;
        self.down = down;
    }

    #[inline]
    pub fn tick(&mut self, target: T) -> T {
        let coeff = if target > self.value { self.up } else { self.down };
        self.value = target + (self.value - target) * coeff;
        self.value
    }

    pub fn value(&self) -> T {
        self.value
    }
}

/// Gate-triggered attack/decay built on [`Slew`].
#[derive(Debug, Clone, Copy)]
pub struct AdEnvelope<T: Sample> {
    slew: Slew<T>,
    target: T,
}

impl<T: Sample> AdEnvelope<T> {
    pub fn new() -> Self {
        Self {
            slew: Slew::new(T::ZERO),
            target: T::ZERO,
        }
    }

    pub fn reset(&mut self) {
        self.slew.init(T::ZERO);
        self.target = T::ZERO;
    }

    /// Attack and decay lengths in ticks (time to reach the noise floor).
    pub fn set_slopes(&mut self, attack: u32, decay: u32) {
        self.set_coefficients(
            T::from_f32(calc_slew_coeff(attack, NOISE_FLOOR)),
            T::from_f32(calc_slew_coeff(decay, NOISE_FLOOR)),
        );
    }

    pub fn set_coefficients(&mut self, attack: T, decay: T) {
        self.slew.set_coefficients(attack, decay);
    }

    #[inline]
    pub fn tick(&mut self, gate: bool) -> T {
        // Attack counts as complete near the top; this starts the decay.
        if self.target == T::ONE && self.target - self.slew.value() < T::from_f32(NOISE_FLOOR) {
            self.target = T::ZERO;
        }

        if gate {
            self.target = T::ONE;
        }

        self.slew.tick(self.target)
    }

    pub fn value(&self) -> T {
        self.slew.value()
    }
}

impl<T: Sample> Default for AdEnvelope<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Gate-triggered attack/decay with straight segments.
#[derive(Debug, Clone, Copy)]
pub struct LinearAdEnvelope<T: Sample> {
    value: T,
    attacking: bool,
    attack: T,  // increment per tick
    release: T, // decrement per tick
}

impl<T: Sample> LinearAdEnvelope<T> {
    pub fn new() -> Self {
        Self {
            value: T::ZERO,
            attacking: false,
            attack: T::from_ratio(1, 10),
            release: T::from_ratio(1, 10),
        }
    }

    pub fn reset(&mut self) {
        self.value = T::ZERO;
        self.attacking = false;
    }

    /// Attack and release lengths in ticks. Zero is treated as one tick.
    pub fn set_slopes(&mut self, attack: u32, release: u32) {
        self.attack = T::from_ratio(1, attack.clamp(1, i32::MAX as u32) as i32);
        self.release = T::from_ratio(1, release.clamp(1, i32::MAX as u32) as i32);
    }

    #[inline]
    pub fn tick(&mut self, gate: bool) -> T {
        let noise_floor = T::from_f32(NOISE_FLOOR);

        if self.attacking {
            self.value += self.attack;

            if self.value >= T::ONE {
                if gate {
                    self.value = T::ONE;
                } else {
                    // A positive overshoot implies a positive attack step.
                    let overshoot = self.value - T::ONE;
                    if overshoot > T::ZERO {
                        self.value = T::ONE - overshoot * self.release / self.attack;
                    } else {
                        self.value = T::ONE;
                    }
                    self.attacking = false;
                }
            }
        } else {
            if self.value > noise_floor {
                self.value -= self.release;
            }
            if self.value < noise_floor {
                self.value = T::ZERO;
            }
        }

        // Retrigger continues from the current level.
        if gate {
            self.attacking = true;
        }

        self.value
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking
    }
}

impl<T: Sample> Default for LinearAdEnvelope<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot exponential ramp from one value to another.
#[derive(Debug, Clone, Copy)]
pub struct ExpSegment<T: Sample> {
    from: T,
    to: T,
    value: T,
    fraction: T,   // remaining share of (from - to), 1 down to the noise floor
    multiplier: T, // applied to `fraction` each tick
    eos: bool,
}

impl<T: Sample> ExpSegment<T> {
    /// An idle segment resting at zero.
    pub fn new() -> Self {
        Self {
            from: T::ZERO,
            to: T::ZERO,
            value: T::ZERO,
            fraction: T::ZERO,
            multiplier: T::ZERO,
            eos: true,
        }
    }

    /// Begin a ramp of `duration` ticks. Zero completes immediately.
    pub fn start(&mut self, from: T, to: T, duration: u32) {
        self.from = from;
        self.to = to;

        if duration == 0 {
            self.value = to;
            self.fraction = T::ZERO;
            self.eos = true;
            return;
        }

        self.value = from;
        self.fraction = T::ONE;
        self.multiplier = T::from_f32(NOISE_FLOOR.powf(1.0 / duration as f32));
        self.eos = false;
    }

    #[inline]
    pub fn tick(&mut self) -> T {
        if self.eos {
            return self.value;
        }

        self.fraction *= self.multiplier;

        if self.fraction < T::from_f32(NOISE_FLOOR) {
            self.fraction = T::ZERO;
            self.value = self.to;
            self.eos = true;
        } else {
            self.value = self.to + (self.from - self.to) * self.fraction;
        }

        self.value
    }

    /// End of segment.
    pub fn eos(&self) -> bool {
        self.eos
    }

    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: Sample> Default for ExpSegment<T> {
    fn default() -> Self {
        Self::new()
    }
}
