use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

/// A right-angle rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Nearest right angle to `degrees`.
    pub fn from_degrees(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Rotation::R0;
        }
        match ((degrees / 90.0).round() as i64).rem_euclid(4) {
            1 => Rotation::R90,
            2 => Rotation::R180,
            3 => Rotation::R270,
            _ => Rotation::R0,
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    fn swaps_axes(self) -> bool {
        matches!(self, Rotation::R90 | Rotation::R270)
    }
}

/// Rotation of the child by a multiple of 90 degrees.
///
/// The rotated image is anchored at the child's bounds origin, so the
/// reported bounds keep the child's `min` and swap width and height for
/// quarter turns.
#[derive(Clone)]
pub struct Rotate {
    base: Null,
    child: Node,
    rotation: Rotation,
}

impl Rotate {
    /// Rotate by `degrees`, rounded to the nearest right angle.
    pub fn new(child: impl IntoNode, degrees: f64, opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut rotate = Self {
            base: Null::default(),
            child: child.into_node(),
            rotation: Rotation::from_degrees(degrees),
        };
        rotate.base.set_bounds(rotate.rotated_bounds());
        apply_opts(&mut rotate, opts);
        rotate
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    fn rotated_bounds(&self) -> Rect {
        let cb = self.child.bounds();
        if self.rotation.swaps_axes() {
            Rect::new(
                cb.min.x,
                cb.min.y,
                cb.min.x.saturating_add(cb.height()),
                cb.min.y.saturating_add(cb.width()),
            )
        } else {
            cb
        }
    }
}

impl std::fmt::Debug for Rotate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rotate")
            .field("rotation", &self.rotation)
            .finish_non_exhaustive()
    }
}

impl Configurable for Rotate {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Angle(deg) => {
                self.rotation = Rotation::from_degrees(*deg);
                self.base.set_bounds(self.rotated_bounds());
                true
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for Rotate {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let cb = self.child.bounds();
        let (w, h) = (cb.width() as i64, cb.height() as i64);
        let u = x as i64 - cb.min.x as i64;
        let v = y as i64 - cb.min.y as i64;
        let (cu, cv) = match self.rotation {
            Rotation::R0 => (u, v),
            Rotation::R90 => (v, h - 1 - u),
            Rotation::R180 => (w - 1 - u, h - 1 - v),
            Rotation::R270 => (w - 1 - v, u),
        };
        self.child.sample(
            (cb.min.x as i64 + cu) as i32,
            (cb.min.y as i64 + cv) as i32,
        )
    }

    fn color_model(&self) -> ColorModel {
        self.child.color_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opts::NO_OPTS;
    use crate::pattern::Text;

    #[test]
    fn test_from_degrees_rounds() {
        assert_eq!(Rotation::from_degrees(0.0), Rotation::R0);
        assert_eq!(Rotation::from_degrees(80.0), Rotation::R90);
        assert_eq!(Rotation::from_degrees(-90.0), Rotation::R270);
        assert_eq!(Rotation::from_degrees(540.0), Rotation::R180);
        assert_eq!(Rotation::from_degrees(f64::NAN), Rotation::R0);
    }

    #[test]
    fn test_quarter_turn_swaps_bounds() {
        let src = Null::new([Opt::Bounds(Rect::new(5, 5, 15, 35))]);
        let r = Rotate::new(src, 90.0, NO_OPTS);
        assert_eq!(r.bounds(), Rect::new(5, 5, 35, 15));
    }

    #[test]
    fn test_corners_move() {
        let src = Text::new([Opt::Text("F".into())]).into_node();
        let cb = src.bounds();
        let (w, h) = (cb.width(), cb.height());
        let r180 = Rotate::new(src.clone(), 180.0, NO_OPTS);
        assert_eq!(r180.sample(0, 0), src.sample(w - 1, h - 1));
        let r90 = Rotate::new(src.clone(), 90.0, NO_OPTS);
        assert_eq!(r90.sample(0, 0), src.sample(0, h - 1));
        let r270 = Rotate::new(src.clone(), 270.0, NO_OPTS);
        assert_eq!(r270.sample(0, 0), src.sample(w - 1, 0));
    }

    #[test]
    fn test_angle_option() {
        let r = Rotate::new(Null::default(), 0.0, [Opt::Angle(270.0)]);
        assert_eq!(r.rotation(), Rotation::R270);
    }
}
