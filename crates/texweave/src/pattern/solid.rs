use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{Null, Texture};
use crate::opts::{Configurable, Opt};

/// The same color everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    base: Null,
    color: Color,
}

impl Uniform {
    pub fn new(color: Color) -> Self {
        Self {
            base: Null::default(),
            color,
        }
    }

    pub fn gray(level: f64) -> Self {
        Self::new(Color::gray(level))
    }
}

impl Configurable for Uniform {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::FillColor(c) => {
                self.color = *c;
                true
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for Uniform {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, _x: i32, _y: i32) -> Color {
        self.color
    }

    fn color_model(&self) -> ColorModel {
        let c = self.color;
        if c.a >= 1.0 && c.r == c.g && c.g == c.b {
            ColorModel::Gray
        } else {
            ColorModel::Rgba
        }
    }
}

/// A filled rectangle: the fill color inside `rect`, the space color
/// (transparent by default) outside. The bounds default to the rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    base: Null,
    rect: Rect,
    fill: Color,
    space: Color,
}

impl Fill {
    pub fn new(rect: Rect, opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut fill = Self {
            base: Null::with_bounds(if rect.is_empty() { Rect::default() } else { rect }),
            rect,
            fill: Color::white(),
            space: Color::TRANSPARENT,
        };
        crate::opts::apply_opts(&mut fill, opts);
        fill
    }
}

impl Configurable for Fill {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::FillColor(c) => {
                self.fill = *c;
                true
            }
            Opt::SpaceColor(c) => {
                self.space = *c;
                true
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for Fill {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        if self.rect.contains(x, y) {
            self.fill
        } else {
            self.space
        }
    }
}
