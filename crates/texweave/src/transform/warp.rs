use super::inherit_bounds;
use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

/// Domain warp driven by the gray level of one or two distortion fields.
///
/// The child is sampled at
/// `(x + (Dx.gray(x, y) - 0.5) * 2 * scale, y + (Dy.gray(x, y) - 0.5) * 2 * scale)`
/// with the offsets rounded half away from zero.
#[derive(Clone)]
pub struct Warp {
    base: Null,
    child: Node,
    dx: Node,
    dy: Node,
    scale: f64,
}

impl Warp {
    /// Warp both axes by the same field.
    pub fn new(
        child: impl IntoNode,
        distortion: impl IntoNode,
        scale: f64,
        opts: impl IntoIterator<Item = Opt>,
    ) -> Self {
        let d = distortion.into_node();
        Self::xy(child, d.clone(), d, scale, opts)
    }

    /// Warp each axis by its own field.
    pub fn xy(
        child: impl IntoNode,
        dx: impl IntoNode,
        dy: impl IntoNode,
        scale: f64,
        opts: impl IntoIterator<Item = Opt>,
    ) -> Self {
        let child = child.into_node();
        let mut warp = Self {
            base: inherit_bounds(&child),
            child,
            dx: dx.into_node(),
            dy: dy.into_node(),
            scale: if scale.is_finite() { scale } else { 0.0 },
        };
        apply_opts(&mut warp, opts);
        warp
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Integer displacement applied at a pixel.
    pub fn offset_at(&self, x: i32, y: i32) -> (i32, i32) {
        let ox = (self.dx.sample(x, y).gray_level() - 0.5) * 2.0 * self.scale;
        let oy = (self.dy.sample(x, y).gray_level() - 0.5) * 2.0 * self.scale;
        (ox.round() as i32, oy.round() as i32)
    }
}

impl std::fmt::Debug for Warp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Warp")
            .field("bounds", &self.base.bounds())
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl Configurable for Warp {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Distortion(s) if s.is_finite() => {
                self.scale = *s;
                true
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for Warp {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let (ox, oy) = self.offset_at(x, y);
        self.child
            .sample(x.saturating_add(ox), y.saturating_add(oy))
    }

    fn color_model(&self) -> ColorModel {
        self.child.color_model()
    }
}
