use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

/// Swaps the axes: the child is sampled at `(y * sy, x * sx)`.
#[derive(Clone)]
pub struct Transpose {
    base: Null,
    child: Node,
    sx: i32,
    sy: i32,
}

fn ceil_div(a: i32, b: i32) -> i32 {
    -((-(a as i64)).div_euclid(b as i64)) as i32
}

impl Transpose {
    pub fn new(child: impl IntoNode, opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::with_strides(child, 1, 1, opts)
    }

    /// Transpose with per-axis strides; strides below 1 become 1.
    pub fn with_strides(
        child: impl IntoNode,
        sx: i32,
        sy: i32,
        opts: impl IntoIterator<Item = Opt>,
    ) -> Self {
        let mut t = Self {
            base: Null::default(),
            child: child.into_node(),
            sx: sx.max(1),
            sy: sy.max(1),
        };
        t.base.set_bounds(t.transposed_bounds());
        apply_opts(&mut t, opts);
        t
    }

    pub fn strides(&self) -> (i32, i32) {
        (self.sx, self.sy)
    }

    fn transposed_bounds(&self) -> Rect {
        let cb = self.child.bounds();
        Rect::new(
            ceil_div(cb.min.y, self.sx),
            ceil_div(cb.min.x, self.sy),
            ceil_div(cb.max.y, self.sx),
            ceil_div(cb.max.x, self.sy),
        )
    }
}

impl std::fmt::Debug for Transpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transpose")
            .field("sx", &self.sx)
            .field("sy", &self.sy)
            .finish_non_exhaustive()
    }
}

impl Configurable for Transpose {
    fn configure(&mut self, opt: &Opt) -> bool {
        self.base.configure(opt)
    }
}

impl Texture for Transpose {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        self.child
            .sample(y.saturating_mul(self.sy), x.saturating_mul(self.sx))
    }

    fn color_model(&self) -> ColorModel {
        self.child.color_model()
    }
}

/// Shifts the child by `(dx, dy)`.
#[derive(Clone)]
pub struct Translate {
    base: Null,
    child: Node,
    dx: i32,
    dy: i32,
}

impl Translate {
    pub fn new(child: impl IntoNode, dx: i32, dy: i32, opts: impl IntoIterator<Item = Opt>) -> Self {
        let child = child.into_node();
        let mut t = Self {
            base: Null::with_bounds(child.bounds().translate(dx, dy)),
            child,
            dx,
            dy,
        };
        apply_opts(&mut t, opts);
        t
    }
}

impl std::fmt::Debug for Translate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translate")
            .field("dx", &self.dx)
            .field("dy", &self.dy)
            .finish_non_exhaustive()
    }
}

impl Configurable for Translate {
    fn configure(&mut self, opt: &Opt) -> bool {
        self.base.configure(opt)
    }
}

impl Texture for Translate {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        self.child
            .sample(x.wrapping_sub(self.dx), y.wrapping_sub(self.dy))
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
    fn test_transpose_swaps_axes() {
        let src = LinearGradient::new([Opt::Bounds(Rect::sized(10, 4))]).into_node();
        let t = Transpose::new(src.clone(), NO_OPTS);
        assert_eq!(t.bounds(), Rect::sized(4, 10));
        assert_eq!(t.sample(3, 7), src.sample(7, 3));
    }

    #[test]
    fn test_transpose_twice_is_identity() {
        let src = LinearGradient::new([Opt::Bounds(Rect::sized(9, 5))]).into_node();
        let tt = Transpose::new(Transpose::new(src.clone(), NO_OPTS), NO_OPTS);
        assert_eq!(tt.bounds(), src.bounds());
        for (x, y) in [(0, 0), (8, 4), (3, 2)] {
            assert_eq!(tt.sample(x, y), src.sample(x, y));
        }
    }

    #[test]
    fn test_strides() {
        let src = LinearGradient::new([Opt::Bounds(Rect::sized(10, 10))]).into_node();
        let t = Transpose::with_strides(src.clone(), 2, 3, NO_OPTS);
        assert_eq!(t.strides(), (2, 3));
        assert_eq!(t.sample(2, 1), src.sample(3, 4));
        assert_eq!(t.bounds(), Rect::new(0, 0, 5, 4));
    }

    #[test]
    fn test_translate() {
        let src = LinearGradient::new([Opt::Bounds(Rect::sized(10, 10))]).into_node();
        let t = Translate::new(src.clone(), 5, -2, NO_OPTS);
        assert_eq!(t.bounds(), Rect::new(5, -2, 15, 8));
        assert_eq!(t.sample(5, -2), src.sample(0, 0));
    }
}
