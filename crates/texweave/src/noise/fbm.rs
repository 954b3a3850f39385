//! Fractal Brownian Motion (FBM) noise.
//!
//! FBM layers multiple octaves of noise to create natural-looking patterns.
//! Each octave draws from its own seed so the bands are uncorrelated.

use super::{Noise2D, Seeded};
use crate::hash::SALT_SECONDARY;

/// Fractal Brownian Motion generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Fbm<N> {
    /// The base noise function; its seed is the seed of octave 0.
    noise: N,
    /// Number of octaves to combine.
    octaves: u32,
    /// Amplitude ratio between successive octaves.
    persistence: f64,
    /// Frequency ratio between successive octaves.
    lacunarity: f64,
}

impl<N: Noise2D + Seeded> Fbm<N> {
    /// Create a new FBM generator with default settings.
    ///
    /// Default: 3 octaves, 0.5 persistence, 2.0 lacunarity.
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            octaves: 3,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }

    /// Set the number of octaves (at least one).
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.set_octaves(octaves);
        self
    }

    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.set_persistence(persistence);
        self
    }

    pub fn with_lacunarity(mut self, lacunarity: f64) -> Self {
        self.set_lacunarity(lacunarity);
        self
    }

    pub fn set_octaves(&mut self, octaves: u32) {
        self.octaves = octaves.max(1);
    }

    pub fn set_persistence(&mut self, persistence: f64) {
        if persistence.is_finite() && persistence > 0.0 {
            self.persistence = persistence;
        }
    }

    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        if lacunarity.is_finite() && lacunarity > 0.0 {
            self.lacunarity = lacunarity;
        }
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    /// Seed of octave `i`.
    #[inline]
    fn octave_seed(&self, i: u32) -> u64 {
        self.noise.seed() ^ (i as u64).wrapping_mul(SALT_SECONDARY)
    }
}

impl<N: Noise2D + Seeded> Seeded for Fbm<N> {
    fn seed(&self) -> u64 {
        self.noise.seed()
    }

    fn reseeded(&self, seed: u64) -> Self {
        Self {
            noise: self.noise.reseeded(seed),
            octaves: self.octaves,
            persistence: self.persistence,
            lacunarity: self.lacunarity,
        }
    }
}

impl<N: Noise2D + Seeded> Noise2D for Fbm<N> {
    /// Sum of the octaves, normalized to [-1, 1].
    fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for i in 0..self.octaves {
            let band = self.noise.reseeded(self.octave_seed(i));
            total += band.sample(x * frequency, y * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        total / (max_value * self.noise.peak())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{PerlinNoise, SimplexNoise};

    #[test]
    fn test_fbm_deterministic() {
        let noise1 = Fbm::new(SimplexNoise::new(42));
        let noise2 = Fbm::new(SimplexNoise::new(42));

        for i in 0..100 {
            let x = i as f64 * 0.1;
            let y = i as f64 * 0.13;
            assert_eq!(noise1.sample(x, y), noise2.sample(x, y));
        }
    }

    #[test]
    fn test_single_octave_matches_base() {
        let base = PerlinNoise::new(7);
        let fbm = Fbm::new(base).with_octaves(1);
        let (x, y) = (3.3, -1.7);
        let expected = base.sample(x, y) / base.peak();
        assert_eq!(fbm.sample(x, y), expected);
    }

    #[test]
    fn test_fbm_normalized_range() {
        let fbm = Fbm::new(PerlinNoise::new(42)).with_octaves(6).with_persistence(0.7);
        for i in 0..200 {
            for j in 0..50 {
                let v = fbm.sample(i as f64 * 0.11, j as f64 * 0.23);
                assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&v));
                let u = fbm.sample_01(i as f64 * 0.11, j as f64 * 0.23);
                assert!((0.0..=1.0).contains(&u));
            }
        }
    }

    #[test]
    fn test_octaves_at_least_one() {
        let fbm = Fbm::new(PerlinNoise::new(1)).with_octaves(0);
        assert_eq!(fbm.octaves(), 1);
    }
}
