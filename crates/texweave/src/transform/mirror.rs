use super::inherit_bounds;
use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

/// Horizontal and/or vertical flip about the centre of the node's bounds.
#[derive(Clone)]
pub struct Mirror {
    base: Null,
    child: Node,
    horizontal: bool,
    vertical: bool,
}

impl Mirror {
    pub fn new(
        child: impl IntoNode,
        horizontal: bool,
        vertical: bool,
        opts: impl IntoIterator<Item = Opt>,
    ) -> Self {
        let child = child.into_node();
        let mut mirror = Self {
            base: inherit_bounds(&child),
            child,
            horizontal,
            vertical,
        };
        apply_opts(&mut mirror, opts);
        mirror
    }

    pub fn horizontal(child: impl IntoNode) -> Self {
        Self::new(child, true, false, crate::opts::NO_OPTS)
    }

    pub fn vertical(child: impl IntoNode) -> Self {
        Self::new(child, false, true, crate::opts::NO_OPTS)
    }
}

impl std::fmt::Debug for Mirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mirror")
            .field("horizontal", &self.horizontal)
            .field("vertical", &self.vertical)
            .finish_non_exhaustive()
    }
}

impl Configurable for Mirror {
    fn configure(&mut self, opt: &Opt) -> bool {
        self.base.configure(opt)
    }
}

impl Texture for Mirror {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let b = self.base.bounds();
        let flip = |c: i32, lo: i32, hi: i32| (lo as i64 + hi as i64 - 1 - c as i64) as i32;
        let x = if self.horizontal { flip(x, b.min.x, b.max.x) } else { x };
        let y = if self.vertical { flip(y, b.min.y, b.max.y) } else { y };
        self.child.sample(x, y)
    }

    fn color_model(&self) -> ColorModel {
        self.child.color_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::LinearGradient;

    #[test]
    fn test_horizontal_flip_edges() {
        let src = LinearGradient::new([Opt::Bounds(Rect::sized(10, 10))]).into_node();
        let m = Mirror::horizontal(src.clone());
        assert_eq!(m.sample(0, 3), src.sample(9, 3));
        assert_eq!(m.sample(9, 3), src.sample(0, 3));
    }

    #[test]
    fn test_vertical_leaves_x() {
        let src = LinearGradient::new([Opt::Bounds(Rect::sized(10, 10))]).into_node();
        let m = Mirror::vertical(src.clone());
        assert_eq!(m.sample(2, 0), src.sample(2, 9));
    }
}
