use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

/// Restricts the child to a rectangle; transparent outside it.
#[derive(Clone)]
pub struct Crop {
    base: Null,
    child: Node,
}

impl Crop {
    /// Crop to `rect`. An empty rectangle falls back to the child's bounds.
    pub fn new(child: impl IntoNode, rect: Rect, opts: impl IntoIterator<Item = Opt>) -> Self {
        let child = child.into_node();
        let area = if rect.is_empty() { child.bounds() } else { rect };
        let mut crop = Self {
            base: Null::with_bounds(area),
            child,
        };
        apply_opts(&mut crop, opts);
        crop
    }
}

impl std::fmt::Debug for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Crop")
            .field("bounds", &self.base.bounds())
            .finish_non_exhaustive()
    }
}

impl Configurable for Crop {
    fn configure(&mut self, opt: &Opt) -> bool {
        self.base.configure(opt)
    }
}

impl Texture for Crop {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        if self.base.bounds().contains(x, y) {
            self.child.sample(x, y)
        } else {
            Color::TRANSPARENT
        }
    }

    fn color_model(&self) -> ColorModel {
        self.child.color_model()
    }
}

/// Grows the child's domain by `padding` on every side, showing a filler
/// outside the child's bounds.
#[derive(Clone)]
pub struct Pad {
    base: Null,
    child: Node,
    filler: Node,
}

impl Pad {
    /// Transparent padding.
    pub fn new(child: impl IntoNode, padding: i32, opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::with_filler(child, padding, Null::default(), opts)
    }

    pub fn with_filler(
        child: impl IntoNode,
        padding: i32,
        filler: impl IntoNode,
        opts: impl IntoIterator<Item = Opt>,
    ) -> Self {
        let child = child.into_node();
        let padded = child.bounds().inset(-padding.max(0));
        let mut pad = Self {
            base: Null::with_bounds(padded),
            child,
            filler: filler.into_node(),
        };
        apply_opts(&mut pad, opts);
        pad
    }
}

impl std::fmt::Debug for Pad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pad")
            .field("bounds", &self.base.bounds())
            .finish_non_exhaustive()
    }
}

impl Configurable for Pad {
    fn configure(&mut self, opt: &Opt) -> bool {
        self.base.configure(opt)
    }
}

impl Texture for Pad {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        if self.child.bounds().contains(x, y) {
            self.child.sample(x, y)
        } else {
            self.filler.sample(x, y)
        }
    }

    fn color_model(&self) -> ColorModel {
        self.child.color_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opts::NO_OPTS;
    use crate::pattern::Uniform;

    #[test]
    fn test_crop_is_transparent_outside() {
        let c = Crop::new(Uniform::new(Color::red()), Rect::new(2, 2, 4, 4), NO_OPTS);
        assert_eq!(c.sample(2, 3), Color::red());
        assert_eq!(c.sample(4, 3), Color::TRANSPARENT);
        assert_eq!(c.bounds(), Rect::new(2, 2, 4, 4));
    }

    #[test]
    fn test_pad_grows_bounds_and_fills() {
        let child = Uniform::new(Color::red()).with([Opt::Bounds(Rect::sized(10, 10))]);
        let p = Pad::with_filler(child, 3, Uniform::new(Color::white()), NO_OPTS);
        assert_eq!(p.bounds(), Rect::new(-3, -3, 13, 13));
        assert_eq!(p.sample(0, 0), Color::red());
        assert_eq!(p.sample(-1, 5), Color::white());
        assert_eq!(p.sample(10, 5), Color::white());
    }

    #[test]
    fn test_default_pad_is_transparent() {
        let child = Uniform::new(Color::red()).with([Opt::Bounds(Rect::sized(4, 4))]);
        let p = Pad::new(child, 1, NO_OPTS);
        assert_eq!(p.sample(-1, -1), Color::TRANSPARENT);
    }
}
