use crate::math::Sample;

/// A value that moves linearly to a new target over a fixed number of ticks.
///
/// `tick()` returns the value *before* advancing, so a ramp of `n` ticks
/// yields `current, ..., target` over `n` calls and lands exactly on the
/// target (the last step is computed from the target, not accumulated).
#[derive(Debug, Clone, Copy)]
pub struct RampedValue<T: Sample> {
    current: T,
    target: T,
    increment: T,
    ticks_to_completion: u64,
    duration_in_ticks: u64,
}

impl<T: Sample> RampedValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            target: value,
            increment: T::ZERO,
            ticks_to_completion: 0,
            duration_in_ticks: 0,
        }
    }

    /// Jump to `value`, cancelling any ramp.
    pub fn set_value(&mut self, value: T) {
        self.current = value;
        self.target = value;
        self.ticks_to_completion = 0;
        self.duration_in_ticks = 0;
    }

    /// Start a ramp. `ticks <= 1` or an unchanged target snap immediately.
    pub fn ramp_to(&mut self, target: T, ticks: u64) {
        self.target = target;
        self.duration_in_ticks = ticks;

        if ticks <= 1 || self.target == self.current {
            self.current = target;
            self.ticks_to_completion = 0;
        } else {
            self.ticks_to_completion = ticks - 1;
            self.increment = (self.target - self.current).div_count(self.ticks_to_completion);
        }
    }

    pub fn is_ramping(&self) -> bool {
        self.ticks_to_completion > 0
    }

    pub fn value(&self) -> T {
        self.current
    }

    pub fn target_value(&self) -> T {
        self.target
    }

    /// Return the current value, then advance one step.
    #[inline]
    pub fn tick(&mut self) -> T {
        let result = self.current;

        if self.ticks_to_completion > 0 {
            self.ticks_to_completion -= 1;
            self.current = self.target - self.increment.mul_count(self.ticks_to_completion);
        } else {
            self.current = self.target;
        }

        result
    }

    pub fn duration_in_ticks(&self) -> u64 {
        self.duration_in_ticks
    }

    pub fn ticks_to_completion(&self) -> u64 {
        self.ticks_to_completion
    }
}

impl<T: Sample> Default for RampedValue<T> {
    fn default() -> Self {
        Self::new(T::ZERO)
    }
}
