//! Wood grain: noise-distorted growth rings.

use std::f64::consts::TAU;

use super::Paint;
use crate::color::Color;
use crate::geom::{Point, Rect};
use crate::node::{Null, Texture};
use crate::noise::{Fbm, Noise2D, PerlinNoise};
use crate::opts::{apply_opts, frequency_or_default, Configurable, Opt};

/// Growth rings around a centre (the middle of the bounds by default),
/// pushed around by Perlin fBm.
///
/// `ring_count` rings span the smaller side of the bounds. The space color
/// is the light earlywood, the fill color the dark latewood.
#[derive(Debug, Clone, PartialEq)]
pub struct WoodGrain {
    base: Null,
    paint: Paint,
    noise: Fbm<PerlinNoise>,
    center: Option<Point>,
    rings: u32,
    distortion: f64,
    /// Scale from pixels to noise space.
    frequency: f64,
}

impl WoodGrain {
    const TURBULENCE: f64 = 0.1;
    const FINE_GRAIN: f64 = 0.05;

    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut wood = Self {
            base: Null::default(),
            paint: Paint::new(Color::rgb(0.45, 0.3, 0.18), Color::rgb(0.76, 0.6, 0.42)),
            noise: Self::grain_noise(0),
            center: None,
            rings: 8,
            distortion: 0.3,
            frequency: 0.02,
        };
        apply_opts(&mut wood, opts);
        wood
    }

    fn grain_noise(seed: u64) -> Fbm<PerlinNoise> {
        Fbm::new(PerlinNoise::new(seed))
            .with_octaves(4)
            .with_persistence(0.5)
            .with_lacunarity(2.0)
    }

    /// Latewood density in [0, 1] at a pixel.
    pub fn grain_at(&self, x: i32, y: i32) -> f64 {
        let b = self.base.bounds();
        let (cx, cy) = match self.center {
            Some(p) => (p.x as f64, p.y as f64),
            None => (
                (b.min.x as f64 + b.max.x as f64) / 2.0,
                (b.min.y as f64 + b.max.y as f64) / 2.0,
            ),
        };
        let span = b.width().min(b.height()).max(1) as f64;
        let dist = (x as f64 - cx).hypot(y as f64 - cy) / span;

        let nx = x as f64 * self.frequency;
        let ny = y as f64 * self.frequency;
        let distort = self.noise.sample(nx, ny) * self.distortion;
        let turb = self.noise.sample(nx * 4.0, ny * 4.0) * Self::TURBULENCE;

        let ring = (dist * self.rings as f64 + distort * 10.0 + turb).rem_euclid(1.0);
        let grain = (ring * TAU).sin() * 0.5 + 0.5;
        let fine = self.noise.sample(nx * 8.0, ny * 0.5) * Self::FINE_GRAIN;
        (grain + fine).clamp(0.0, 1.0)
    }
}

impl Configurable for WoodGrain {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Seed(s) => {
                self.noise = Self::grain_noise(*s);
                true
            }
            Opt::RingCount(n) => {
                self.rings = (*n).max(1);
                true
            }
            Opt::Distortion(d) if d.is_finite() => {
                self.distortion = (*d).max(0.0);
                true
            }
            Opt::Frequency(f) => {
                self.frequency = frequency_or_default(*f);
                true
            }
            Opt::Center(p) => {
                self.center = Some(*p);
                true
            }
            _ => self.paint.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for WoodGrain {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        self.paint
            .space
            .lerp(&self.paint.fill, self.grain_at(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grain_in_unit_range() {
        let wood = WoodGrain::new([Opt::Seed(5), Opt::Distortion(1.0)]);
        for y in (0..255).step_by(17) {
            for x in (0..255).step_by(13) {
                let g = wood.grain_at(x, y);
                assert!((0.0..=1.0).contains(&g), "grain {g} at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_distortion_moves_rings() {
        let calm = WoodGrain::new([Opt::Seed(3), Opt::Distortion(0.0)]);
        let wild = WoodGrain::new([Opt::Seed(3), Opt::Distortion(1.0)]);
        let moved = (0..64).any(|i| calm.grain_at(i * 3, i * 2) != wild.grain_at(i * 3, i * 2));
        assert!(moved);
    }

    #[test]
    fn test_seed_is_deterministic() {
        let a = WoodGrain::new([Opt::Seed(11)]);
        let b = WoodGrain::new([Opt::Seed(11)]);
        assert_eq!(a.sample(37, 91), b.sample(37, 91));
    }
}
