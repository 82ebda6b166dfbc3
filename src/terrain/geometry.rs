#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::noise::NoiseField;
use crate::math::Sample;

/// Circle through the noise field plus the scaling that maps the noise
/// sampled along it onto `[-1, 1]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry<T: Sample> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub radius: T,
    pub scaling_offset: T,
    pub scaling_ratio: T,
}

impl<T: Sample> Geometry<T> {
    /// An unevaluated circle: identity scaling.
    pub fn new(x: T, y: T, z: T, radius: T) -> Self {
        Self {
            x,
            y,
            z,
            radius,
            scaling_offset: T::ZERO,
            scaling_ratio: T::ONE,
        }
    }

    /// Raw field value at the point `(sin, cos)` of the circle.
    #[inline]
    pub fn sample(&self, noise: &NoiseField, sin: T, cos: T) -> T {
        let x = self.x + self.radius * sin;
        let y = self.y + self.radius * cos;
        noise.calc(x, y, self.z)
    }

    /// [`sample`](Self::sample) rescaled by the evaluated offset and ratio.
    #[inline]
    pub fn sample_scaled(&self, noise: &NoiseField, sin: T, cos: T) -> T {
        (self.sample(noise, sin, cos) - self.scaling_offset) / self.scaling_ratio
    }
}

impl<T: Sample> Default for Geometry<T> {
    fn default() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::from_ratio(1, 5))
    }
}
