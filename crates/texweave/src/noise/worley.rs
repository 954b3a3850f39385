//! Worley (Voronoi/Cellular) noise implementation.
//!
//! Every lattice cell holds one feature point at a hashed, jittered offset
//! from the cell origin. A sample looks at the 3x3 neighbourhood and tracks
//! the two smallest distances.

use super::{Noise2D, Seeded};
use crate::hash::hash;

/// Distance function for Worley noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceMetric {
    /// Euclidean distance (sqrt(dx^2 + dy^2)).
    #[default]
    Euclidean,
    /// Manhattan distance (|dx| + |dy|).
    Manhattan,
    /// Chebyshev distance (max(|dx|, |dy|)).
    Chebyshev,
}

impl DistanceMetric {
    #[inline]
    pub fn distance(&self, dx: f64, dy: f64) -> f64 {
        match self {
            DistanceMetric::Euclidean => (dx * dx + dy * dy).sqrt(),
            DistanceMetric::Manhattan => dx.abs() + dy.abs(),
            DistanceMetric::Chebyshev => dx.abs().max(dy.abs()),
        }
    }
}

/// What a Worley sample presents as its scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorleyOutput {
    /// Distance to the nearest feature point.
    #[default]
    F1,
    /// Distance to the second nearest feature point.
    F2,
    /// F2 - F1; near zero on cell boundaries.
    F2MinusF1,
    /// Gray level derived from the nearest cell's hash.
    CellId,
}

/// Full result of one Worley evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorleySample {
    pub f1: f64,
    pub f2: f64,
    /// Hash of the cell owning the nearest feature point.
    pub cell: u64,
}

impl WorleySample {
    /// 8-bit cell identifier.
    pub fn cell_id(&self) -> u8 {
        (self.cell & 0xFF) as u8
    }
}

/// 2D Worley (cellular) noise generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorleyNoise {
    seed: u64,
    /// Jitter amount (0.0 = points on lattice corners, 1.0 = anywhere in the cell).
    jitter: f64,
    metric: DistanceMetric,
    output: WorleyOutput,
}

impl Default for WorleyNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl WorleyNoise {
    /// Create a new Worley noise generator with default settings.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            jitter: 1.0,
            metric: DistanceMetric::Euclidean,
            output: WorleyOutput::F1,
        }
    }

    /// Set the jitter amount (0.0 to 1.0).
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.set_jitter(jitter);
        self
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_output(mut self, output: WorleyOutput) -> Self {
        self.output = output;
        self
    }

    pub fn set_jitter(&mut self, jitter: f64) {
        self.jitter = if jitter.is_finite() {
            jitter.clamp(0.0, 1.0)
        } else {
            1.0
        };
    }

    pub fn set_metric(&mut self, metric: DistanceMetric) {
        self.metric = metric;
    }

    pub fn set_output(&mut self, output: WorleyOutput) {
        self.output = output;
    }

    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn output(&self) -> WorleyOutput {
        self.output
    }

    /// Evaluate F1, F2 and the nearest cell at a point in noise space.
    pub fn evaluate(&self, x: f64, y: f64) -> WorleySample {
        let xf = x.floor();
        let yf = y.floor();
        let ix = xf as i64;
        let iy = yf as i64;
        let fx = x - xf;
        let fy = y - yf;

        let mut f1 = f64::MAX;
        let mut f2 = f64::MAX;
        let mut cell = 0u64;

        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let h = hash(ix.wrapping_add(dx), iy.wrapping_add(dy), self.seed);
                let px = dx as f64 + (h & 0xFFFF) as f64 / 65535.0 * self.jitter;
                let py = dy as f64 + ((h >> 16) & 0xFFFF) as f64 / 65535.0 * self.jitter;
                let dist = self.metric.distance(px - fx, py - fy);

                if dist < f1 {
                    f2 = f1;
                    f1 = dist;
                    cell = h;
                } else if dist < f2 {
                    f2 = dist;
                }
            }
        }

        WorleySample { f1, f2, cell }
    }
}

impl Seeded for WorleyNoise {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reseeded(&self, seed: u64) -> Self {
        Self { seed, ..*self }
    }
}

impl Noise2D for WorleyNoise {
    /// Native value: a non-negative distance, or the cell id scaled to [0, 1].
    fn sample(&self, x: f64, y: f64) -> f64 {
        let s = self.evaluate(x, y);
        match self.output {
            WorleyOutput::F1 => s.f1,
            WorleyOutput::F2 => s.f2,
            WorleyOutput::F2MinusF1 => s.f2 - s.f1,
            WorleyOutput::CellId => s.cell_id() as f64 / 255.0,
        }
    }

    fn sample_01(&self, x: f64, y: f64) -> f64 {
        self.sample(x, y).clamp(0.0, 1.0)
    }
}
