//! The sampling capability shared by every texture, and the `Null` base.

use std::sync::Arc;

use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::opts::{apply_opts, Configurable, Opt};

/// A lazily evaluated image: a pure function from pixel coordinates to color.
///
/// Implementations are immutable after construction and may be sampled
/// concurrently from many threads.
pub trait Texture: Send + Sync {
    /// The default domain of the texture. Sampling outside it is allowed.
    fn bounds(&self) -> Rect;

    /// Color at the given pixel coordinate.
    fn sample(&self, x: i32, y: i32) -> Color;

    /// The color model the texture natively produces.
    fn color_model(&self) -> ColorModel {
        ColorModel::Rgba
    }
}

/// Shared handle to a texture; sub-graphs may be shared freely.
pub type Node = Arc<dyn Texture>;

/// Conversion into a shared [`Node`] handle.
pub trait IntoNode {
    fn into_node(self) -> Node;
}

impl<T: Texture + 'static> IntoNode for T {
    fn into_node(self) -> Node {
        Arc::new(self)
    }
}

impl IntoNode for Node {
    fn into_node(self) -> Node {
        self
    }
}

/// Transparent everywhere; owns the default bounds.
///
/// Other textures embed a `Null` to get the bounds option for free.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Null {
    bounds: Rect,
}

impl Null {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut null = Self::default();
        apply_opts(&mut null, opts);
        null
    }

    /// A base with explicit bounds.
    pub fn with_bounds(bounds: Rect) -> Self {
        Self { bounds }
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

impl Configurable for Null {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Bounds(r) if !r.is_empty() => {
                self.bounds = *r;
                true
            }
            _ => false,
        }
    }
}

impl Texture for Null {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn sample(&self, _x: i32, _y: i32) -> Color {
        Color::TRANSPARENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_transparent_everywhere() {
        let null = Null::default();
        for (x, y) in [(0, 0), (-100, 5), (1000, 1000)] {
            assert_eq!(null.sample(x, y), Color::TRANSPARENT);
        }
    }

    #[test]
    fn test_null_bounds_option() {
        let null = Null::new([Opt::Bounds(Rect::new(1, 2, 3, 4))]);
        assert_eq!(null.bounds(), Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn test_empty_bounds_rejected() {
        let null = Null::new([Opt::Bounds(Rect::new(5, 5, 5, 9))]);
        assert_eq!(null.bounds(), Rect::default());
    }

    #[test]
    fn test_into_node_keeps_shared_handle() {
        let node: Node = Null::default().into_node();
        let again = node.clone().into_node();
        assert!(Arc::ptr_eq(&node, &again));
    }
}
