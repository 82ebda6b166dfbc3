//! Three-dimensional gradient noise over the reference permutation.

use crate::math::sample::lerp;
use crate::math::Sample;

/*
Noise Field
===========

Improved Perlin noise. Space is cut into unit cubes; every lattice corner
gets a pseudo-random gradient picked by hashing its integer coordinates
through a fixed permutation of 0..=255. A point's value is the trilinear
blend of the eight corner gradients dotted with the offset to that corner.

The permutation is the published reference table, doubled to 512 entries so
`p[p[x] + y]` never needs a modulo. Keeping the canonical table means a given
coordinate produces the same value here as in any other reference
implementation.

The blend weights go through a fade curve so the field has a continuous
derivative at cube faces:

  Hermite   3t^2 - 2t^3            cheap, C1
  Quintic   6t^5 - 15t^4 + 10t^3   C2, needs more integer headroom

Fixed-point quintic evaluation drops to 15 fractional bits internally (see
`Sample::quintic_fade`).
*/

const REFERENCE_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, //
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, //
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32, //
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175, //
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, //
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, //
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169, //
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64, //
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, //
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, //
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, //
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104, //
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241, //
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, //
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, //
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

const fn doubled(table: &[u8; 256]) -> [u8; 512] {
    let mut out = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        out[i] = table[i & 255];
        i += 1;
    }
    out
}

static PERMUTATION: [u8; 512] = doubled(&REFERENCE_PERMUTATION);

/// Interpolation curve applied to the in-cube coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FadeCurve {
    #[default]
    Hermite,
    Quintic,
}

impl FadeCurve {
    #[inline]
    fn apply<T: Sample>(self, t: T) -> T {
        match self {
            FadeCurve::Hermite => t * t * (T::from_i32(3) - T::from_i32(2) * t),
            FadeCurve::Quintic => t.quintic_fade(),
        }
    }
}

/// Dot product of the offset with one of 12 gradient directions.
#[inline]
fn grad<T: Sample>(hash: u8, x: T, y: T, z: T) -> T {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };

    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

/// Stateless, deterministic 3-D noise source.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoiseField {
    fade: FadeCurve,
}

impl NoiseField {
    pub fn new(fade: FadeCurve) -> Self {
        Self { fade }
    }

    pub fn fade(&self) -> FadeCurve {
        self.fade
    }

    /// Noise at `(x, y, z)`, nominally in `[-1, 1]`.
    pub fn calc<T: Sample>(&self, x: T, y: T, z: T) -> T {
        let p = &PERMUTATION;

        // Unit cube containing the point.
        let cx = (x.to_i32() & 255) as usize;
        let cy = (y.to_i32() & 255) as usize;
        let cz = (z.to_i32() & 255) as usize;

        // Position inside the cube.
        let x = x.frac();
        let y = y.frac();
        let z = z.frac();

        let u = self.fade.apply(x);
        let v = self.fade.apply(y);
        let w = self.fade.apply(z);

        // Corner hashes.
        let a = p[cx] as usize + cy;
        let aa = p[a] as usize + cz;
        let ab = p[a + 1] as usize + cz;
        let b = p[cx + 1] as usize + cy;
        let ba = p[b] as usize + cz;
        let bb = p[b + 1] as usize + cz;

        let one = T::ONE;

        let near = lerp(
            lerp(grad(p[aa], x, y, z), grad(p[ba], x - one, y, z), u),
            lerp(grad(p[ab], x, y - one, z), grad(p[bb], x - one, y - one, z), u),
            v,
        );
        let far = lerp(
            lerp(
                grad(p[aa + 1], x, y, z - one),
                grad(p[ba + 1], x - one, y, z - one),
                u,
            ),
            lerp(
                grad(p[ab + 1], x, y - one, z - one),
                grad(p[bb + 1], x - one, y - one, z - one),
                u,
            ),
            v,
        );

        lerp(near, far, w)
    }

    /// [`calc`](Self::calc) mapped to `[0, 1]`.
    pub fn calc_unipolar<T: Sample>(&self, x: T, y: T, z: T) -> T {
        (self.calc(x, y, z) + T::ONE) / T::from_i32(2)
    }
}
