use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

/// Edge extension: outside `rect`, the nearest sample inside it is returned.
#[derive(Clone)]
pub struct Clamp {
    base: Null,
    child: Node,
    rect: Rect,
}

impl Clamp {
    /// Clamp to `rect`; an empty rectangle falls back to the child's bounds.
    pub fn new(child: impl IntoNode, rect: Rect, opts: impl IntoIterator<Item = Opt>) -> Self {
        let child = child.into_node();
        let rect = if rect.is_empty() { child.bounds() } else { rect };
        let mut clamp = Self {
            base: Null::with_bounds(rect),
            child,
            rect,
        };
        apply_opts(&mut clamp, opts);
        clamp
    }

    /// Clamp to the child's own bounds.
    pub fn edges(child: impl IntoNode) -> Self {
        let child = child.into_node();
        let rect = child.bounds();
        Self::new(child, rect, crate::opts::NO_OPTS)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl std::fmt::Debug for Clamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clamp")
            .field("rect", &self.rect)
            .finish_non_exhaustive()
    }
}

impl Configurable for Clamp {
    fn configure(&mut self, opt: &Opt) -> bool {
        self.base.configure(opt)
    }
}

impl Texture for Clamp {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        if self.rect.is_empty() {
            return Color::TRANSPARENT;
        }
        let (x, y) = self.rect.clamp_point(x, y);
        self.child.sample(x, y)
    }

    fn color_model(&self) -> ColorModel {
        self.child.color_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opts::NO_OPTS;
    use crate::pattern::LinearGradient;

    #[test]
    fn test_outside_uses_nearest_edge() {
        let src = LinearGradient::new([Opt::Bounds(Rect::sized(8, 8))]).into_node();
        let c = Clamp::new(src.clone(), Rect::sized(8, 8), NO_OPTS);
        assert_eq!(c.sample(-5, 3), src.sample(0, 3));
        assert_eq!(c.sample(50, 50), src.sample(7, 7));
        assert_eq!(c.sample(4, 4), src.sample(4, 4));
    }

    #[test]
    fn test_empty_rect_falls_back_to_child_bounds() {
        let src = LinearGradient::new([Opt::Bounds(Rect::sized(4, 4))]);
        let c = Clamp::new(src, Rect::new(3, 3, 3, 3), NO_OPTS);
        assert_eq!(c.rect(), Rect::sized(4, 4));
    }

    #[test]
    fn test_edges_keeps_child_bounds() {
        let src = LinearGradient::new([Opt::Bounds(Rect::new(2, 2, 6, 6))]);
        let c = Clamp::edges(src);
        assert_eq!(c.bounds(), Rect::new(2, 2, 6, 6));
    }
}
