//! Texture presenting a noise field as gray.

use super::{DistanceMetric, NoiseAlgorithm, WorleyOutput};
use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{Null, Texture};
use crate::opts::{apply_opts, frequency_or_default, Configurable, Opt};

/// A scalar noise field sampled at `(x, y) * frequency`, presented as gray.
#[derive(Debug, Clone)]
pub struct Noise {
    base: Null,
    algorithm: NoiseAlgorithm,
    frequency: f64,
}

impl Noise {
    /// Wrap an explicit algorithm. Its default frequency applies unless an
    /// option overrides it.
    pub fn new(algorithm: NoiseAlgorithm, opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut noise = Self {
            base: Null::default(),
            frequency: algorithm.default_frequency(),
            algorithm,
        };
        apply_opts(&mut noise, opts);
        noise
    }

    /// Perlin fBm.
    pub fn perlin(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::new(NoiseAlgorithm::perlin(0), opts)
    }

    /// Simplex fBm.
    pub fn simplex(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::new(NoiseAlgorithm::simplex(0), opts)
    }

    /// Worley cellular noise.
    pub fn worley(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::new(NoiseAlgorithm::worley(0), opts)
    }

    /// White noise from the coordinate hash.
    pub fn hash(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::new(NoiseAlgorithm::hash(0), opts)
    }

    /// White noise from BLAKE3.
    pub fn crypto(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::new(NoiseAlgorithm::crypto(0), opts)
    }

    pub fn algorithm(&self) -> &NoiseAlgorithm {
        &self.algorithm
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Normalized scalar in [0, 1] at a pixel.
    #[inline]
    pub fn value_at(&self, x: i32, y: i32) -> f64 {
        self.algorithm
            .at(x as f64 * self.frequency, y as f64 * self.frequency)
    }
}

impl Configurable for Noise {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Frequency(f) => {
                self.frequency = frequency_or_default(*f);
                true
            }
            Opt::NoiseAlgorithm(alg) => {
                self.algorithm = alg.clone();
                true
            }
            Opt::Seed(_)
            | Opt::Octaves(_)
            | Opt::Persistence(_)
            | Opt::Lacunarity(_)
            | Opt::WorleyJitter(_)
            | Opt::WorleyMetric(_)
            | Opt::WorleyOutput(_) => self.algorithm.configure(opt),
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for Noise {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        Color::gray(self.value_at(x, y))
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::Gray
    }
}

/// Convenience for the common Worley configuration.
pub(crate) fn worley_opts(
    seed: u64,
    frequency: f64,
    metric: DistanceMetric,
    output: WorleyOutput,
) -> [Opt; 4] {
    [
        Opt::Seed(seed),
        Opt::Frequency(frequency),
        Opt::WorleyMetric(metric),
        Opt::WorleyOutput(output),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_is_gray_and_normalized() {
        let n = Noise::perlin([Opt::Seed(5), Opt::Frequency(0.07)]);
        assert_eq!(n.color_model(), ColorModel::Gray);
        for y in -20..20 {
            for x in -20..20 {
                let c = n.sample(x, y);
                assert_eq!(c.r, c.g);
                assert_eq!(c.g, c.b);
                assert!((0.0..=1.0).contains(&c.r));
            }
        }
    }

    #[test]
    fn test_zero_frequency_falls_back() {
        let n = Noise::simplex([Opt::Frequency(0.0)]);
        assert_eq!(n.frequency(), crate::opts::DEFAULT_FREQUENCY);
    }

    #[test]
    fn test_hash_noise_defaults_to_pixel_frequency() {
        let n = Noise::hash([Opt::Seed(1)]);
        assert_eq!(n.frequency(), 1.0);
    }

    #[test]
    fn test_algorithm_option_replaces_generator() {
        let n = Noise::perlin([
            Opt::Frequency(0.2),
            Opt::NoiseAlgorithm(NoiseAlgorithm::worley(4)),
        ]);
        assert_eq!(n.algorithm().name(), "worley");
        assert_eq!(n.frequency(), 0.2);
    }

    #[test]
    fn test_worley_opts_helper() {
        let n = Noise::worley(worley_opts(
            3,
            0.1,
            DistanceMetric::Manhattan,
            WorleyOutput::F2MinusF1,
        ));
        match n.algorithm() {
            NoiseAlgorithm::Worley(w) => {
                assert_eq!(w.metric(), DistanceMetric::Manhattan);
                assert_eq!(w.output(), WorleyOutput::F2MinusF1);
            }
            other => panic!("unexpected {}", other.name()),
        }
    }
}
