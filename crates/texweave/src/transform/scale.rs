use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt, NO_OPTS};

/// Anisotropic nearest-neighbour scale about the child's bounds origin.
#[derive(Clone)]
pub struct Scale {
    base: Null,
    child: Node,
    sx: f64,
    sy: f64,
    /// Whether the bounds were set explicitly rather than derived.
    fixed_bounds: bool,
}

fn factor_or_one(f: f64) -> f64 {
    if f.is_finite() && f > 0.0 {
        f
    } else {
        1.0
    }
}

impl Scale {
    /// Scale by `(sx, sy)`; factors that are not positive fall back to 1.
    pub fn new(child: impl IntoNode, sx: f64, sy: f64, opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut scale = Self {
            base: Null::default(),
            child: child.into_node(),
            sx: factor_or_one(sx),
            sy: factor_or_one(sy),
            fixed_bounds: false,
        };
        apply_opts(&mut scale, opts);
        if !scale.fixed_bounds {
            scale.base.set_bounds(scale.scaled_bounds());
        }
        scale
    }

    /// Uniform scale.
    pub fn uniform(child: impl IntoNode, factor: f64) -> Self {
        Self::new(child, factor, factor, NO_OPTS)
    }

    pub fn factors(&self) -> (f64, f64) {
        (self.sx, self.sy)
    }

    fn scaled_bounds(&self) -> Rect {
        let cb = self.child.bounds();
        let w = (cb.width() as f64 * self.sx).round().max(1.0) as i32;
        let h = (cb.height() as f64 * self.sy).round().max(1.0) as i32;
        Rect::new(
            cb.min.x,
            cb.min.y,
            cb.min.x.saturating_add(w),
            cb.min.y.saturating_add(h),
        )
    }
}

impl std::fmt::Debug for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scale")
            .field("sx", &self.sx)
            .field("sy", &self.sy)
            .finish_non_exhaustive()
    }
}

impl Configurable for Scale {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::ScaleX(s) => {
                self.sx = factor_or_one(*s);
                true
            }
            Opt::ScaleY(s) => {
                self.sy = factor_or_one(*s);
                true
            }
            Opt::Bounds(_) => {
                let accepted = self.base.configure(opt);
                self.fixed_bounds |= accepted;
                accepted
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for Scale {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let origin = self.child.bounds().min;
        let u = ((x as f64 - origin.x as f64) / self.sx).floor() as i32;
        let v = ((y as f64 - origin.y as f64) / self.sy).floor() as i32;
        self.child
            .sample(origin.x.saturating_add(u), origin.y.saturating_add(v))
    }

    fn color_model(&self) -> ColorModel {
        self.child.color_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Checker;

    #[test]
    fn test_doubling_repeats_pixels() {
        let src = Checker::new([Opt::LineSize(1)]).into_node();
        let s = Scale::new(src.clone(), 2.0, 2.0, NO_OPTS);
        assert_eq!(s.sample(0, 0), src.sample(0, 0));
        assert_eq!(s.sample(1, 1), src.sample(0, 0));
        assert_eq!(s.sample(2, 0), src.sample(1, 0));
        assert_eq!(s.sample(-1, 0), src.sample(-1, 0));
    }

    #[test]
    fn test_bounds_follow_factors() {
        let src = Null::new([Opt::Bounds(Rect::new(10, 10, 20, 30))]);
        let s = Scale::new(src, 3.0, 0.5, NO_OPTS);
        assert_eq!(s.bounds(), Rect::new(10, 10, 40, 20));
    }

    #[test]
    fn test_invalid_factor_is_identity() {
        let s = Scale::new(Null::default(), 0.0, -2.0, [Opt::ScaleY(f64::NAN)]);
        assert_eq!(s.factors(), (1.0, 1.0));
    }

    #[test]
    fn test_explicit_bounds_kept() {
        let s = Scale::uniform(Null::default(), 4.0).with([Opt::Bounds(Rect::sized(8, 8))]);
        assert_eq!(s.bounds(), Rect::sized(8, 8));
    }
}
