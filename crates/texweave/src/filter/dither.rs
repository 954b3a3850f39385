//! Two-tone dithering.

use crate::color::Color;
use crate::geom::Rect;
use crate::hash::hash_unit;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

use super::threshold;

/// 4x4 Bayer index matrix, indexed `[y][x]`.
pub const BAYER4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

/// Dark and light output colors. `Opt::Colors` supplies both (first two
/// entries, dark first); `SpaceColor` sets dark and `FillColor` light.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tones {
    dark: Color,
    light: Color,
}

impl Default for Tones {
    fn default() -> Self {
        Self {
            dark: Color::black(),
            light: Color::white(),
        }
    }
}

impl Tones {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Colors(colors) if colors.len() >= 2 => {
                self.dark = colors[0];
                self.light = colors[1];
                true
            }
            Opt::SpaceColor(c) => {
                self.dark = *c;
                true
            }
            Opt::FillColor(c) => {
                self.light = *c;
                true
            }
            _ => false,
        }
    }
}

/// Ordered (Bayer) dither of the child's gray level.
#[derive(Clone)]
pub struct DitherOrdered {
    base: Null,
    child: Node,
    tones: Tones,
}

impl DitherOrdered {
    pub fn new(child: impl IntoNode, opts: impl IntoIterator<Item = Opt>) -> Self {
        let child = child.into_node();
        let mut dither = Self {
            base: Null::with_bounds(child.bounds()),
            child,
            tones: Tones::default(),
        };
        apply_opts(&mut dither, opts);
        dither
    }

    /// Threshold in (0, 1) for a pixel.
    pub fn threshold_at(x: i32, y: i32) -> f64 {
        let b = BAYER4[y.rem_euclid(4) as usize][x.rem_euclid(4) as usize];
        (b as f64 + 0.5) / 16.0
    }
}

impl std::fmt::Debug for DitherOrdered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DitherOrdered")
            .field("tones", &self.tones)
            .finish_non_exhaustive()
    }
}

impl Configurable for DitherOrdered {
    fn configure(&mut self, opt: &Opt) -> bool {
        self.tones.configure(opt) || self.base.configure(opt)
    }
}

impl Texture for DitherOrdered {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let level = self.child.sample(x, y).gray_level();
        threshold(level, Self::threshold_at(x, y), self.tones.dark, self.tones.light)
    }
}

/// Dither against per-pixel white-noise thresholds.
#[derive(Clone)]
pub struct DitherRandom {
    base: Null,
    child: Node,
    tones: Tones,
    seed: u64,
}

impl DitherRandom {
    pub fn new(child: impl IntoNode, opts: impl IntoIterator<Item = Opt>) -> Self {
        let child = child.into_node();
        let mut dither = Self {
            base: Null::with_bounds(child.bounds()),
            child,
            tones: Tones::default(),
            seed: 0,
        };
        apply_opts(&mut dither, opts);
        dither
    }
}

impl std::fmt::Debug for DitherRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DitherRandom")
            .field("tones", &self.tones)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl Configurable for DitherRandom {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Seed(s) => {
                self.seed = *s;
                true
            }
            _ => self.tones.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for DitherRandom {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let level = self.child.sample(x, y).gray_level();
        let t = hash_unit(x as i64, y as i64, self.seed);
        threshold(level, t, self.tones.dark, self.tones.light)
    }
}
