//! Perlin gradient noise.
//!
//! Lattice gradients are picked by hashing the lattice corner, so the noise
//! needs no permutation table and is defined over the whole `i64` lattice.

use std::f64::consts::FRAC_1_SQRT_2;

use super::{lerp, quintic, Noise2D, Seeded};
use crate::hash::hash;

/// 2D Perlin noise generator (a single band).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerlinNoise {
    seed: u64,
}

impl PerlinNoise {
    /// Unit gradient vectors at multiples of 45 degrees.
    const GRAD2: [[f64; 2]; 8] = [
        [1.0, 0.0],
        [-1.0, 0.0],
        [0.0, 1.0],
        [0.0, -1.0],
        [FRAC_1_SQRT_2, FRAC_1_SQRT_2],
        [-FRAC_1_SQRT_2, FRAC_1_SQRT_2],
        [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
        [-FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
    ];

    /// Create a new Perlin noise generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Compute gradient dot product.
    #[inline]
    fn grad(h: u64, x: f64, y: f64) -> f64 {
        let g = &Self::GRAD2[(h & 7) as usize];
        g[0] * x + g[1] * y
    }
}

impl Seeded for PerlinNoise {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reseeded(&self, seed: u64) -> Self {
        Self { seed }
    }
}

impl Noise2D for PerlinNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let xf = x.floor();
        let yf = y.floor();
        let x0 = xf as i64;
        let y0 = yf as i64;
        let (x1, y1) = (x0.wrapping_add(1), y0.wrapping_add(1));

        // Fractional parts
        let fx = x - xf;
        let fy = y - yf;

        let u = quintic(fx);
        let v = quintic(fy);

        let n00 = Self::grad(hash(x0, y0, self.seed), fx, fy);
        let n10 = Self::grad(hash(x1, y0, self.seed), fx - 1.0, fy);
        let n01 = Self::grad(hash(x0, y1, self.seed), fx, fy - 1.0);
        let n11 = Self::grad(hash(x1, y1, self.seed), fx - 1.0, fy - 1.0);

        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);
        lerp(nx0, nx1, v)
    }

    fn peak(&self) -> f64 {
        FRAC_1_SQRT_2
    }
}
