//! Construction-time options.
//!
//! Every texture constructor accepts a sequence of [`Opt`] values. Each one is
//! offered to the target through [`Configurable::configure`]; a target that
//! lacks the matching capability declines it and the option has no effect.
//! Options apply in order, so the last of several conflicting options wins.

use tracing::trace;

use crate::color::Color;
use crate::geom::{Point, Rect};
use crate::noise::{DistanceMetric, NoiseAlgorithm, WorleyOutput};

/// Frequency substituted when a zero or negative one is requested.
pub const DEFAULT_FREQUENCY: f64 = 0.05;

/// An empty option list, for constructors called with no overrides.
pub const NO_OPTS: [Opt; 0] = [];

/// A typed "set property P to V" request.
#[derive(Debug, Clone)]
pub enum Opt {
    /// Replace the domain rectangle.
    Bounds(Rect),
    /// Replace the seed of a hash-backed texture.
    Seed(u64),
    /// Replace the base spatial frequency.
    Frequency(f64),
    /// Replace the noise generator of a noise-backed texture.
    NoiseAlgorithm(NoiseAlgorithm),
    Octaves(u32),
    Persistence(f64),
    Lacunarity(f64),
    LineSize(i32),
    SpaceSize(i32),
    FillColor(Color),
    SpaceColor(Color),
    Radius(i32),
    ScaleX(f64),
    ScaleY(f64),
    WorleyMetric(DistanceMetric),
    WorleyOutput(WorleyOutput),
    WorleyJitter(f64),
    Roughness(f64),
    Density(f64),
    /// Angle in degrees.
    Angle(f64),
    Center(Point),
    /// Palette or gradient colors.
    Colors(Vec<Color>),
    BrickSize(i32, i32),
    MortarSize(i32),
    MortarDepth(f64),
    ChipIntensity(f64),
    RowOffset(f64),
    RingCount(u32),
    Distortion(f64),
    Text(String),
    Strength(f64),
}

impl Opt {
    /// Stable name of the option key, for diagnostics.
    pub fn key(&self) -> &'static str {
        match self {
            Opt::Bounds(_) => "bounds",
            Opt::Seed(_) => "seed",
            Opt::Frequency(_) => "frequency",
            Opt::NoiseAlgorithm(_) => "noise_algorithm",
            Opt::Octaves(_) => "octaves",
            Opt::Persistence(_) => "persistence",
            Opt::Lacunarity(_) => "lacunarity",
            Opt::LineSize(_) => "line_size",
            Opt::SpaceSize(_) => "space_size",
            Opt::FillColor(_) => "fill_color",
            Opt::SpaceColor(_) => "space_color",
            Opt::Radius(_) => "radius",
            Opt::ScaleX(_) => "scale_x",
            Opt::ScaleY(_) => "scale_y",
            Opt::WorleyMetric(_) => "worley_metric",
            Opt::WorleyOutput(_) => "worley_output",
            Opt::WorleyJitter(_) => "worley_jitter",
            Opt::Roughness(_) => "roughness",
            Opt::Density(_) => "density",
            Opt::Angle(_) => "angle",
            Opt::Center(_) => "center",
            Opt::Colors(_) => "colors",
            Opt::BrickSize(_, _) => "brick_size",
            Opt::MortarSize(_) => "mortar_size",
            Opt::MortarDepth(_) => "mortar_depth",
            Opt::ChipIntensity(_) => "chip_intensity",
            Opt::RowOffset(_) => "row_offset",
            Opt::RingCount(_) => "ring_count",
            Opt::Distortion(_) => "distortion",
            Opt::Text(_) => "text",
            Opt::Strength(_) => "strength",
        }
    }
}

/// Capability probe used by option application.
pub trait Configurable {
    /// Apply the option if the target understands it.
    ///
    /// Returns `false` when the option does not apply to this target.
    fn configure(&mut self, opt: &Opt) -> bool;

    /// Builder form of [`apply_opts`].
    fn with(mut self, opts: impl IntoIterator<Item = Opt>) -> Self
    where
        Self: Sized,
    {
        apply_opts(&mut self, opts);
        self
    }
}

/// Apply options in order, ignoring those the target declines.
pub fn apply_opts<T: Configurable + ?Sized>(target: &mut T, opts: impl IntoIterator<Item = Opt>) {
    for opt in opts {
        if !target.configure(&opt) {
            trace!(
                option = opt.key(),
                target = std::any::type_name::<T>(),
                "option ignored"
            );
        }
    }
}

/// Sanitize a requested frequency.
#[inline]
pub fn frequency_or_default(f: f64) -> f64 {
    if f.is_finite() && f > 0.0 {
        f
    } else {
        DEFAULT_FREQUENCY
    }
}

/// Sanitize a requested size in pixels.
#[inline]
pub fn size_or_one(n: i32) -> i32 {
    n.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Null, Texture};

    #[derive(Default)]
    struct Probe {
        base: Null,
        seed: u64,
        hits: usize,
    }

    impl Configurable for Probe {
        fn configure(&mut self, opt: &Opt) -> bool {
            match opt {
                Opt::Seed(s) => {
                    self.seed = *s;
                    self.hits += 1;
                    true
                }
                _ => self.base.configure(opt),
            }
        }
    }

    #[test]
    fn test_last_option_wins() {
        let mut p = Probe::default();
        apply_opts(&mut p, [Opt::Seed(1), Opt::Seed(2), Opt::Seed(3)]);
        assert_eq!(p.seed, 3);
        assert_eq!(p.hits, 3);
    }

    #[test]
    fn test_unknown_option_is_ignored() {
        let p = Probe::default().with([Opt::MortarDepth(0.5), Opt::Radius(3)]);
        assert_eq!(p.seed, 0);
        assert_eq!(p.hits, 0);
    }

    #[test]
    fn test_bounds_reaches_embedded_base() {
        let p = Probe::default().with([Opt::Bounds(Rect::sized(10, 20))]);
        assert_eq!(p.base.bounds(), Rect::sized(10, 20));
    }

    #[test]
    fn test_frequency_fallback() {
        assert_eq!(frequency_or_default(0.0), DEFAULT_FREQUENCY);
        assert_eq!(frequency_or_default(-1.0), DEFAULT_FREQUENCY);
        assert_eq!(frequency_or_default(f64::NAN), DEFAULT_FREQUENCY);
        assert_eq!(frequency_or_default(0.25), 0.25);
    }
}
