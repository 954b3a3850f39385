//! Noise generation primitives.
//!
//! All generators are pure Rust, derive their randomness from
//! [`crate::hash::hash`] and produce identical output for identical seeds on
//! every platform.

mod algorithm;
mod fbm;
mod perlin;
mod simplex;
mod texture;
mod white;
mod worley;

pub use algorithm::NoiseAlgorithm;
pub use fbm::Fbm;
pub use perlin::PerlinNoise;
pub use simplex::SimplexNoise;
pub use texture::Noise;
pub use white::{CryptoNoise, HashNoise};
pub use worley::{DistanceMetric, WorleyNoise, WorleyOutput, WorleySample};

pub(crate) use texture::worley_opts;

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate, in its native range.
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Largest magnitude [`Noise2D::sample`] can reach for a signed noise.
    fn peak(&self) -> f64 {
        1.0
    }

    /// Sample the noise and normalize to [0, 1], clamping stragglers.
    fn sample_01(&self, x: f64, y: f64) -> f64 {
        ((self.sample(x, y) / self.peak() + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

/// Noise generators whose randomness is keyed by a seed.
pub trait Seeded {
    fn seed(&self) -> u64;

    /// The same generator with a different seed.
    fn reseeded(&self, seed: u64) -> Self;
}

/// Quintic interpolation `6t^5 - 15t^4 + 10t^3`.
#[inline]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Make coordinates tileable by wrapping.
#[inline]
pub fn tile_coord(coord: f64, period: f64) -> f64 {
    coord - (coord / period).floor() * period
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quintic_endpoints() {
        assert_eq!(quintic(0.0), 0.0);
        assert_eq!(quintic(1.0), 1.0);
        assert!((quintic(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_tile_coord_wraps_negative() {
        assert!((tile_coord(-1.0, 4.0) - 3.0).abs() < 1e-12);
        assert!((tile_coord(9.5, 4.0) - 1.5).abs() < 1e-12);
    }
}
