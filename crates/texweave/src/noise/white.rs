//! White noise: one independent value per lattice cell.

use super::{Noise2D, Seeded};
use crate::hash::{hash, unit16};

/// White noise from the coordinate hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HashNoise {
    seed: u64,
}

impl HashNoise {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Value in [0, 1] for the lattice cell containing `(x, y)`.
    #[inline]
    pub fn value(&self, x: f64, y: f64) -> f64 {
        unit16(hash(x.floor() as i64, y.floor() as i64, self.seed))
    }
}

impl Seeded for HashNoise {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reseeded(&self, seed: u64) -> Self {
        Self { seed }
    }
}

impl Noise2D for HashNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.value(x, y) * 2.0 - 1.0
    }

    fn sample_01(&self, x: f64, y: f64) -> f64 {
        self.value(x, y)
    }
}

/// White noise from BLAKE3 over `seed ‖ x ‖ y`.
///
/// Much slower than [`HashNoise`], with cryptographic-quality decorrelation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CryptoNoise {
    seed: u64,
}

impl CryptoNoise {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Value in [0, 1] for the lattice cell containing `(x, y)`.
    pub fn value(&self, x: f64, y: f64) -> f64 {
        let mut input = [0u8; 24];
        input[0..8].copy_from_slice(&self.seed.to_le_bytes());
        input[8..16].copy_from_slice(&(x.floor() as i64).to_le_bytes());
        input[16..24].copy_from_slice(&(y.floor() as i64).to_le_bytes());
        let digest = blake3::hash(&input);
        let bytes = digest.as_bytes();
        u16::from_le_bytes([bytes[0], bytes[1]]) as f64 / 65535.0
    }
}

impl Seeded for CryptoNoise {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reseeded(&self, seed: u64) -> Self {
        Self { seed }
    }
}

impl Noise2D for CryptoNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.value(x, y) * 2.0 - 1.0
    }

    fn sample_01(&self, x: f64, y: f64) -> f64 {
        self.value(x, y)
    }
}
