//! Grid and crosshatch patterns.

use super::{on_line, Paint};
use crate::color::Color;
use crate::geom::Rect;
use crate::node::{Null, Texture};
use crate::opts::{apply_opts, size_or_one, Configurable, Opt};

/// Orthogonal grid lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    base: Null,
    paint: Paint,
    line: i32,
    space: i32,
}

impl Grid {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut grid = Self {
            base: Null::default(),
            paint: Paint::default(),
            line: 1,
            space: 15,
        };
        apply_opts(&mut grid, opts);
        grid
    }
}

impl Configurable for Grid {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::LineSize(n) => {
                self.line = size_or_one(*n);
                true
            }
            Opt::SpaceSize(n) => {
                self.space = size_or_one(*n);
                true
            }
            _ => self.paint.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for Grid {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let on = on_line(x, self.line, self.space) || on_line(y, self.line, self.space);
        self.paint.pick(on)
    }
}

/// Two families of diagonal lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crosshatch {
    base: Null,
    paint: Paint,
    line: i32,
    space: i32,
}

impl Crosshatch {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut hatch = Self {
            base: Null::default(),
            paint: Paint::default(),
            line: 1,
            space: 7,
        };
        apply_opts(&mut hatch, opts);
        hatch
    }
}

impl Configurable for Crosshatch {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::LineSize(n) => {
                self.line = size_or_one(*n);
                true
            }
            Opt::SpaceSize(n) => {
                self.space = size_or_one(*n);
                true
            }
            _ => self.paint.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for Crosshatch {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let (x, y) = (x as i64, y as i64);
        let period = (self.line + self.space) as i64;
        let line = self.line as i64;
        let on = (x + y).rem_euclid(period) < line || (x - y).rem_euclid(period) < line;
        self.paint.pick(on)
    }
}
