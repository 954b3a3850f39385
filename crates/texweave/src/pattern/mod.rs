//! Primitive patterns.
//!
//! Geometric patterns paint a foreground (`Opt::FillColor`) over a background
//! (`Opt::SpaceColor`); line and cell geometry comes from `Opt::LineSize`,
//! `Opt::SpaceSize` and `Opt::Radius`. Every pattern is defined on the whole
//! plane; its bounds only describe the default domain.

mod brick;
mod checker;
mod dots;
mod gradient;
mod grid;
mod scales;
mod solid;
mod stripes;
mod text;
mod voronoi;
mod wood;

pub use brick::{Brick, BrickCell};
pub use checker::Checker;
pub use dots::{Circle, Polka, Scatter, Screentone};
pub use gradient::{ConcentricRings, Gradient, LinearGradient, RadialGradient};
pub use grid::{Crosshatch, Grid};
pub use scales::Scales;
pub use solid::{Fill, Uniform};
pub use stripes::{HorizontalLine, VerticalLine};
pub use text::Text;
pub use voronoi::Voronoi;
pub use wood::WoodGrain;

use crate::color::Color;
use crate::opts::Opt;

/// Foreground and background colors of a two-tone pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Paint {
    pub fill: Color,
    pub space: Color,
}

impl Paint {
    pub const fn new(fill: Color, space: Color) -> Self {
        Self { fill, space }
    }

    #[inline]
    pub fn pick(&self, on: bool) -> Color {
        if on {
            self.fill
        } else {
            self.space
        }
    }

    /// Accepts `FillColor` and `SpaceColor`.
    pub fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::FillColor(c) => {
                self.fill = *c;
                true
            }
            Opt::SpaceColor(c) => {
                self.space = *c;
                true
            }
            _ => false,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::new(Color::white(), Color::black())
    }
}

/// True when `c` falls on the first `line` pixels of a `line + space` period.
#[inline]
pub(crate) fn on_line(c: i32, line: i32, space: i32) -> bool {
    (c as i64).rem_euclid((line + space) as i64) < line as i64
}
