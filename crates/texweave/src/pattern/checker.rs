//! Checkerboard pattern.

use super::Paint;
use crate::color::Color;
use crate::geom::Rect;
use crate::node::{Null, Texture};
use crate::opts::{apply_opts, size_or_one, Configurable, Opt};

pub const DEFAULT_SQUARE_SIZE: i32 = 8;

/// Alternating squares of `line_size` pixels; the square containing the
/// origin gets the fill color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checker {
    base: Null,
    paint: Paint,
    size: i32,
}

impl Checker {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut checker = Self {
            base: Null::default(),
            paint: Paint::default(),
            size: DEFAULT_SQUARE_SIZE,
        };
        apply_opts(&mut checker, opts);
        checker
    }

    pub fn square_size(&self) -> i32 {
        self.size
    }
}

impl Configurable for Checker {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::LineSize(n) => {
                self.size = size_or_one(*n);
                true
            }
            _ => self.paint.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for Checker {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let tx = x.div_euclid(self.size);
        let ty = y.div_euclid(self.size);
        self.paint.pick((tx + ty).rem_euclid(2) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_alternates() {
        let pattern = Checker::new([Opt::LineSize(32)]);

        assert_eq!(pattern.sample(0, 0), Color::white());
        assert_eq!(pattern.sample(32, 0), Color::black());
        assert_eq!(pattern.sample(0, 32), Color::black());
        assert_eq!(pattern.sample(32, 32), Color::white());
    }

    #[test]
    fn test_negative_quadrant() {
        let pattern = Checker::new([Opt::LineSize(4)]);
        assert_eq!(pattern.sample(-1, 0), Color::black());
        assert_eq!(pattern.sample(-1, -1), Color::white());
        assert_eq!(pattern.sample(-4, -5), Color::black());
    }
}
