//! 2D simplex noise on a skewed triangular lattice.
//!
//! Corner gradients come from the coordinate hash rather than a permutation
//! table, so there is no per-seed setup. This is the "OpenSimplex" flavour of
//! the noise strategy.

use super::{Noise2D, Seeded};
use crate::hash::hash;

/// `(sqrt(3) - 1) / 2`
const SKEW: f64 = 0.366_025_403_784_438_6;
/// `(3 - sqrt(3)) / 6`
const UNSKEW: f64 = 0.211_324_865_405_187_13;
/// Brings the summed corner kernels to roughly [-1, 1].
const OUTPUT_SCALE: f64 = 70.0;

/// The twelve edge gradients of a cube, projected onto the plane.
const GRADIENTS: [(f64, f64); 12] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimplexNoise {
    seed: u64,
}

impl SimplexNoise {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Radial kernel of the lattice point `(i, j)` at offset `(dx, dy)`.
    #[inline]
    fn kernel(&self, i: i64, j: i64, dx: f64, dy: f64) -> f64 {
        let falloff = 0.5 - dx * dx - dy * dy;
        if falloff <= 0.0 {
            return 0.0;
        }
        let (gx, gy) = GRADIENTS[(hash(i, j, self.seed) % 12) as usize];
        falloff.powi(4) * (gx * dx + gy * dy)
    }
}

impl Seeded for SimplexNoise {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reseeded(&self, seed: u64) -> Self {
        Self { seed }
    }
}

impl Noise2D for SimplexNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let skew = (x + y) * SKEW;
        let (i, j) = ((x + skew).floor() as i64, (y + skew).floor() as i64);

        let unskew = (i as f64 + j as f64) * UNSKEW;
        let (dx, dy) = (x - i as f64 + unskew, y - j as f64 + unskew);

        // Middle corner: step along x in the lower triangle, y in the upper.
        let (si, sj) = if dx > dy { (1, 0) } else { (0, 1) };

        let corners = [
            (0, 0, dx, dy),
            (si, sj, dx - si as f64 + UNSKEW, dy - sj as f64 + UNSKEW),
            (1, 1, dx - 1.0 + 2.0 * UNSKEW, dy - 1.0 + 2.0 * UNSKEW),
        ];
        let sum: f64 = corners
            .iter()
            .map(|&(oi, oj, cx, cy)| {
                self.kernel(i.wrapping_add(oi), j.wrapping_add(oj), cx, cy)
            })
            .sum();
        OUTPUT_SCALE * sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_at_lattice_origin() {
        // Every kernel vanishes or is orthogonal at a skewed lattice point.
        let n = SimplexNoise::new(9);
        assert!(n.sample(0.0, 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounded_and_varied() {
        let n = SimplexNoise::new(42);
        let values: Vec<f64> = (0..160_000)
            .map(|k| n.sample((k % 400) as f64 * 0.03, (k / 400) as f64 * 0.03))
            .collect();
        let lo = values.iter().copied().fold(f64::MAX, f64::min);
        let hi = values.iter().copied().fold(f64::MIN, f64::max);
        assert!(lo >= -1.05 && hi <= 1.05, "{lo} {hi}");
        assert!(hi - lo > 0.5);
    }

    #[test]
    fn test_reseeded_changes_field() {
        let a = SimplexNoise::new(42);
        let b = a.reseeded(43);
        assert_eq!(b.seed(), 43);
        let differs = (0..10).any(|k| {
            let (x, y) = (k as f64 * 0.1 + 0.05, k as f64 * 0.13 + 0.05);
            a.sample(x, y) != b.sample(x, y)
        });
        assert!(differs);
    }
}
