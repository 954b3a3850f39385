//! Sobel edge magnitude.

use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

use super::sobel;

/// Gray edge strength of the child: the Sobel gradient magnitude of its gray
/// level times `strength`, clamped to [0, 1].
#[derive(Clone)]
pub struct EdgeDetect {
    base: Null,
    child: Node,
    strength: f64,
}

impl EdgeDetect {
    pub fn new(child: impl IntoNode, opts: impl IntoIterator<Item = Opt>) -> Self {
        let child = child.into_node();
        let mut edges = Self {
            base: Null::with_bounds(child.bounds()),
            child,
            strength: 1.0,
        };
        apply_opts(&mut edges, opts);
        edges
    }
}

impl std::fmt::Debug for EdgeDetect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeDetect")
            .field("strength", &self.strength)
            .finish_non_exhaustive()
    }
}

impl Configurable for EdgeDetect {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Strength(s) if s.is_finite() => {
                self.strength = (*s).max(0.0);
                true
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for EdgeDetect {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let (gx, gy) = sobel(&self.child, x, y);
        Color::gray((gx.hypot(gy) * self.strength).clamp(0.0, 1.0))
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::Gray
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opts::NO_OPTS;
    use crate::pattern::{Checker, Uniform};

    #[test]
    fn test_flat_has_no_edges() {
        let edges = EdgeDetect::new(Uniform::new(Color::red()), NO_OPTS);
        assert_eq!(edges.sample(3, 3), Color::black());
    }

    #[test]
    fn test_checker_edges() {
        let edges = EdgeDetect::new(Checker::new([Opt::LineSize(8)]), NO_OPTS);
        // Inside a square, away from its sides.
        assert_eq!(edges.sample(4, 4), Color::black());
        // On the boundary between squares the gradient saturates.
        assert_eq!(edges.sample(8, 4), Color::white());
    }
}
