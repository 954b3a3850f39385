//! Horizontal and vertical line patterns.

use super::{on_line, Paint};
use crate::color::Color;
use crate::geom::Rect;
use crate::node::{Null, Texture};
use crate::opts::{apply_opts, size_or_one, Configurable, Opt};

pub const DEFAULT_LINE_SIZE: i32 = 4;
pub const DEFAULT_SPACE_SIZE: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
struct LineSpec {
    base: Null,
    paint: Paint,
    line: i32,
    space: i32,
}

impl LineSpec {
    fn new() -> Self {
        Self {
            base: Null::default(),
            paint: Paint::default(),
            line: DEFAULT_LINE_SIZE,
            space: DEFAULT_SPACE_SIZE,
        }
    }

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

    fn at(&self, c: i32) -> Color {
        self.paint.pick(on_line(c, self.line, self.space))
    }
}

/// Horizontal lines `line_size` thick, `space_size` apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalLine {
    spec: LineSpec,
}

impl HorizontalLine {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut lines = Self {
            spec: LineSpec::new(),
        };
        apply_opts(&mut lines, opts);
        lines
    }
}

impl Configurable for HorizontalLine {
    fn configure(&mut self, opt: &Opt) -> bool {
        self.spec.configure(opt)
    }
}

impl Texture for HorizontalLine {
    fn bounds(&self) -> Rect {
        self.spec.base.bounds()
    }

    fn sample(&self, _x: i32, y: i32) -> Color {
        self.spec.at(y)
    }
}

/// Vertical lines `line_size` thick, `space_size` apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalLine {
    spec: LineSpec,
}

impl VerticalLine {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut lines = Self {
            spec: LineSpec::new(),
        };
        apply_opts(&mut lines, opts);
        lines
    }
}

impl Configurable for VerticalLine {
    fn configure(&mut self, opt: &Opt) -> bool {
        self.spec.configure(opt)
    }
}

impl Texture for VerticalLine {
    fn bounds(&self) -> Rect {
        self.spec.base.bounds()
    }

    fn sample(&self, x: i32, _y: i32) -> Color {
        self.spec.at(x)
    }
}
