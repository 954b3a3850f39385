//! Running-bond brick wall.

use super::Paint;
use crate::color::Color;
use crate::geom::Rect;
use crate::hash::{hash, hash_unit, unit16, SALT_TERTIARY};
use crate::node::{Null, Texture};
use crate::opts::{apply_opts, size_or_one, Configurable, Opt};

/// Position of a pixel relative to the brick lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickCell {
    Mortar,
    /// Brick `(col, row)`, with the pixel's offset inside it.
    Brick { col: i32, row: i32, lx: i32, ly: i32 },
}

/// Bricks of `brick_size` separated by `mortar_size` joints. Odd rows shift
/// by `row_offset` of a brick period.
///
/// The fill color paints bricks (each tinted by up to ±`VARIATION` from its
/// hash, and darkened towards the edges by the bevel), the space color
/// paints mortar, darkened by `mortar_depth`. `chip_intensity` knocks
/// random pixels off brick edges into the mortar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    base: Null,
    paint: Paint,
    seed: u64,
    brick_w: i32,
    brick_h: i32,
    mortar: i32,
    mortar_depth: f64,
    row_offset: f64,
    chip: f64,
}

impl Brick {
    pub const VARIATION: f64 = 0.1;
    /// Width of the chippable rim, in pixels.
    const CHIP_RIM: i32 = 2;
    /// Bevel band as a fraction of half the brick's smaller side.
    const BEVEL: f64 = 0.2;

    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut brick = Self {
            base: Null::default(),
            paint: Paint::new(Color::rgb(0.62, 0.27, 0.2), Color::gray(0.78)),
            seed: 0,
            brick_w: 64,
            brick_h: 32,
            mortar: 4,
            mortar_depth: 0.3,
            row_offset: 0.5,
            chip: 0.0,
        };
        apply_opts(&mut brick, opts);
        brick
    }

    pub fn brick_size(&self) -> (i32, i32) {
        (self.brick_w, self.brick_h)
    }

    /// Classify a pixel, ignoring chipping.
    pub fn cell_at(&self, x: i32, y: i32) -> BrickCell {
        let row_h = self.brick_h + self.mortar;
        let col_w = self.brick_w + self.mortar;
        let row = y.div_euclid(row_h);
        let shift = if row.rem_euclid(2) == 1 {
            (self.row_offset * col_w as f64).round() as i32
        } else {
            0
        };
        let ax = x.saturating_sub(shift);
        let (lx, ly) = (ax.rem_euclid(col_w), y.rem_euclid(row_h));
        if lx >= self.brick_w || ly >= self.brick_h {
            BrickCell::Mortar
        } else {
            BrickCell::Brick {
                col: ax.div_euclid(col_w),
                row,
                lx,
                ly,
            }
        }
    }

    fn chipped(&self, x: i32, y: i32, lx: i32, ly: i32) -> bool {
        if self.chip <= 0.0 {
            return false;
        }
        let edge = lx.min(ly).min(self.brick_w - 1 - lx).min(self.brick_h - 1 - ly);
        edge < Self::CHIP_RIM && hash_unit(x as i64, y as i64, self.seed ^ SALT_TERTIARY) <= self.chip
    }

    fn bevel(&self, lx: i32, ly: i32) -> f64 {
        let edge = lx.min(ly).min(self.brick_w - 1 - lx).min(self.brick_h - 1 - ly);
        let half = (self.brick_w.min(self.brick_h) / 2).max(1) as f64;
        let d = (edge as f64 / half).clamp(0.0, 1.0);
        if d < Self::BEVEL {
            1.0 - (Self::BEVEL - d) * 0.5 * self.mortar_depth / Self::BEVEL
        } else {
            1.0
        }
    }
}

impl Configurable for Brick {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Seed(s) => {
                self.seed = *s;
                true
            }
            Opt::BrickSize(w, h) => {
                self.brick_w = size_or_one(*w);
                self.brick_h = size_or_one(*h);
                true
            }
            Opt::MortarSize(n) => {
                self.mortar = (*n).max(0);
                true
            }
            Opt::MortarDepth(d) if d.is_finite() => {
                self.mortar_depth = (*d).clamp(0.0, 1.0);
                true
            }
            Opt::RowOffset(o) if o.is_finite() => {
                self.row_offset = (*o).rem_euclid(1.0);
                true
            }
            Opt::ChipIntensity(c) if c.is_finite() => {
                self.chip = (*c).clamp(0.0, 1.0);
                true
            }
            _ => self.paint.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for Brick {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let mortar = self.paint.space.scale(1.0 - 0.5 * self.mortar_depth);
        match self.cell_at(x, y) {
            BrickCell::Mortar => mortar,
            BrickCell::Brick { lx, ly, .. } if self.chipped(x, y, lx, ly) => mortar,
            BrickCell::Brick { col, row, lx, ly } => {
                let h = hash(col as i64, row as i64, self.seed);
                let tint = 1.0 + (unit16(h) * 2.0 - 1.0) * Self::VARIATION;
                self.paint.fill.scale(tint * self.bevel(lx, ly)).clamp()
            }
        }
    }
}
