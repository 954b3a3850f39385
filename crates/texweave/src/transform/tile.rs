use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

/// Periodic repetition of a window of the child.
///
/// Sampled at `(x, y)`, the child is read at
/// `((x - p.min.x) mod W + p.min.x, (y - p.min.y) mod H + p.min.y)` where `p`
/// is the period rectangle of size `W x H`.
#[derive(Clone)]
pub struct Tile {
    base: Null,
    child: Node,
    period: Rect,
}

impl Tile {
    /// Repeat the `rect` window of the child; the bounds default to `rect`.
    pub fn new(child: impl IntoNode, rect: Rect, opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut tile = Self {
            base: Null::with_bounds(rect),
            child: child.into_node(),
            period: rect,
        };
        if rect.is_empty() {
            tile.period = tile.child.bounds();
            tile.base.set_bounds(tile.period);
        }
        apply_opts(&mut tile, opts);
        tile
    }

    /// Repeat the child's own bounds across `target`.
    pub fn across(child: impl IntoNode, target: Rect) -> Self {
        let child = child.into_node();
        let period = child.bounds();
        let mut tile = Self::new(child, period, crate::opts::NO_OPTS);
        if !target.is_empty() {
            tile.base.set_bounds(target);
        }
        tile
    }

    pub fn period(&self) -> Rect {
        self.period
    }
}

impl std::fmt::Debug for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tile")
            .field("period", &self.period)
            .field("bounds", &self.base.bounds())
            .finish_non_exhaustive()
    }
}

impl Configurable for Tile {
    fn configure(&mut self, opt: &Opt) -> bool {
        self.base.configure(opt)
    }
}

impl Texture for Tile {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let p = self.period;
        if p.is_empty() {
            return self.child.sample(x, y);
        }
        let wrap = |c: i32, lo: i32, n: i32| {
            ((c as i64 - lo as i64).rem_euclid(n as i64) + lo as i64) as i32
        };
        self.child
            .sample(wrap(x, p.min.x, p.width()), wrap(y, p.min.y, p.height()))
    }

    fn color_model(&self) -> ColorModel {
        self.child.color_model()
    }
}
