//! The noise strategy held by a [`super::Noise`] texture.

use super::{CryptoNoise, Fbm, HashNoise, Noise2D, PerlinNoise, Seeded, SimplexNoise, WorleyNoise};
use crate::opts::{Configurable, Opt};

/// One of the supported scalar noise fields.
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseAlgorithm {
    Perlin(Fbm<PerlinNoise>),
    Simplex(Fbm<SimplexNoise>),
    Worley(WorleyNoise),
    Hash(HashNoise),
    Crypto(CryptoNoise),
}

impl Default for NoiseAlgorithm {
    fn default() -> Self {
        Self::perlin(0)
    }
}

impl NoiseAlgorithm {
    pub fn perlin(seed: u64) -> Self {
        Self::Perlin(Fbm::new(PerlinNoise::new(seed)))
    }

    pub fn simplex(seed: u64) -> Self {
        Self::Simplex(Fbm::new(SimplexNoise::new(seed)))
    }

    pub fn worley(seed: u64) -> Self {
        Self::Worley(WorleyNoise::new(seed))
    }

    pub fn hash(seed: u64) -> Self {
        Self::Hash(HashNoise::new(seed))
    }

    pub fn crypto(seed: u64) -> Self {
        Self::Crypto(CryptoNoise::new(seed))
    }

    /// Normalized scalar in [0, 1] at a point in noise space.
    pub fn at(&self, x: f64, y: f64) -> f64 {
        match self {
            Self::Perlin(n) => n.sample_01(x, y),
            Self::Simplex(n) => n.sample_01(x, y),
            Self::Worley(n) => n.sample_01(x, y),
            Self::Hash(n) => n.sample_01(x, y),
            Self::Crypto(n) => n.sample_01(x, y),
        }
    }

    pub fn seed(&self) -> u64 {
        match self {
            Self::Perlin(n) => n.seed(),
            Self::Simplex(n) => n.seed(),
            Self::Worley(n) => n.seed(),
            Self::Hash(n) => n.seed(),
            Self::Crypto(n) => n.seed(),
        }
    }

    pub fn set_seed(&mut self, seed: u64) {
        *self = match self {
            Self::Perlin(n) => Self::Perlin(n.reseeded(seed)),
            Self::Simplex(n) => Self::Simplex(n.reseeded(seed)),
            Self::Worley(n) => Self::Worley(n.reseeded(seed)),
            Self::Hash(n) => Self::Hash(n.reseeded(seed)),
            Self::Crypto(n) => Self::Crypto(n.reseeded(seed)),
        };
    }

    /// Frequency a texture uses when none is given.
    ///
    /// White noise defaults to one value per pixel; smooth fields to a
    /// feature size of twenty pixels.
    pub fn default_frequency(&self) -> f64 {
        match self {
            Self::Hash(_) | Self::Crypto(_) => 1.0,
            _ => crate::opts::DEFAULT_FREQUENCY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Perlin(_) => "perlin",
            Self::Simplex(_) => "simplex",
            Self::Worley(_) => "worley",
            Self::Hash(_) => "hash",
            Self::Crypto(_) => "crypto",
        }
    }
}

impl Configurable for NoiseAlgorithm {
    fn configure(&mut self, opt: &Opt) -> bool {
        match (self, opt) {
            (this, Opt::Seed(seed)) => {
                this.set_seed(*seed);
                true
            }
            (Self::Perlin(f), Opt::Octaves(n)) => {
                f.set_octaves(*n);
                true
            }
            (Self::Simplex(f), Opt::Octaves(n)) => {
                f.set_octaves(*n);
                true
            }
            (Self::Perlin(f), Opt::Persistence(p)) => {
                f.set_persistence(*p);
                true
            }
            (Self::Simplex(f), Opt::Persistence(p)) => {
                f.set_persistence(*p);
                true
            }
            (Self::Perlin(f), Opt::Lacunarity(l)) => {
                f.set_lacunarity(*l);
                true
            }
            (Self::Simplex(f), Opt::Lacunarity(l)) => {
                f.set_lacunarity(*l);
                true
            }
            (Self::Worley(w), Opt::WorleyJitter(j)) => {
                w.set_jitter(*j);
                true
            }
            (Self::Worley(w), Opt::WorleyMetric(m)) => {
                w.set_metric(*m);
                true
            }
            (Self::Worley(w), Opt::WorleyOutput(o)) => {
                w.set_output(*o);
                true
            }
            _ => false,
        }
    }
}
