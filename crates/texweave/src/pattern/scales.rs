//! Overlapping fish scales.

use super::Paint;
use crate::color::Color;
use crate::geom::Rect;
use crate::node::{Null, Texture};
use crate::opts::{apply_opts, size_or_one, Configurable, Opt};

/// Rows of discs of `radius`, spaced one radius apart vertically and two
/// radii horizontally, odd rows shifted by one radius. Lower rows overlap
/// the rows above them.
///
/// Each scale is painted with the fill color, darkening towards its rim; a
/// one-pixel outline takes the space color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    base: Null,
    paint: Paint,
    radius: i32,
}

impl Scales {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut scales = Self {
            base: Null::default(),
            paint: Paint::new(Color::rgb(0.2, 0.55, 0.5), Color::black()),
            radius: 12,
        };
        apply_opts(&mut scales, opts);
        scales
    }

    /// Distance from the pixel to the centre of the visible scale, relative
    /// to the radius.
    fn depth_at(&self, x: i32, y: i32) -> f64 {
        let r = self.radius;
        let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
        let top = y.div_euclid(r) + 1;
        // Scale centres sit on row lines; the lowest row whose disc reaches
        // the pixel is drawn last.
        for row in (top - 2..=top).rev() {
            let shift = if row.rem_euclid(2) == 1 { r } else { 0 };
            let col = (x - shift).div_euclid(2 * r);
            for c in col..=col + 1 {
                let cx = (c * 2 * r + shift) as f64;
                let cy = (row * r) as f64;
                let d = (px - cx).hypot(py - cy);
                if d <= r as f64 {
                    return d / r as f64;
                }
            }
        }
        1.0
    }
}

impl Configurable for Scales {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Radius(r) => {
                self.radius = size_or_one(*r);
                true
            }
            _ => self.paint.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for Scales {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let t = self.depth_at(x, y);
        let rim = 1.0 - 1.0 / self.radius as f64;
        if t >= rim {
            self.paint.space
        } else {
            self.paint.fill.scale(1.0 - 0.5 * t * t)
        }
    }
}
