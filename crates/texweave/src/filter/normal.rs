//! Height field to tangent-space normal map.

use crate::color::Color;
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

use super::sobel;

/// Normals of the child read as a height field (white is high).
///
/// Uses the OpenGL convention: red grows to the right, green grows upward
/// (against image y) and a flat surface encodes as `(0.5, 0.5, 1.0)`.
#[derive(Clone)]
pub struct NormalMap {
    base: Null,
    height: Node,
    strength: f64,
}

impl NormalMap {
    pub fn new(height: impl IntoNode, opts: impl IntoIterator<Item = Opt>) -> Self {
        let height = height.into_node();
        let mut map = Self {
            base: Null::with_bounds(height.bounds()),
            height,
            strength: 1.0,
        };
        apply_opts(&mut map, opts);
        map
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Unit normal at a pixel.
    pub fn normal_at(&self, x: i32, y: i32) -> [f64; 3] {
        let (gx, gy) = sobel(&self.height, x, y);
        let nx = -gx * self.strength;
        let ny = gy * self.strength;
        let len = (nx * nx + ny * ny + 1.0).sqrt();
        [nx / len, ny / len, 1.0 / len]
    }
}

impl std::fmt::Debug for NormalMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalMap")
            .field("strength", &self.strength)
            .finish_non_exhaustive()
    }
}

impl Configurable for NormalMap {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Strength(s) if s.is_finite() => {
                self.strength = *s;
                true
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for NormalMap {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let [nx, ny, nz] = self.normal_at(x, y);
        Color::rgb((nx + 1.0) * 0.5, (ny + 1.0) * 0.5, (nz + 1.0) * 0.5)
    }
}
