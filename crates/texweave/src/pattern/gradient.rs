//! Linear, radial and conic gradients, and concentric rings.
//!
//! Gradients ramp through `Opt::Colors` (black to white by default) at even
//! spacing. Positions are measured against the node's own bounds.

use std::f64::consts::TAU;

use crate::color::Color;
use crate::color_map::{even_stops, sample_stops, ColorStop};
use crate::geom::{Point, Rect};
use crate::node::{Null, Texture};
use crate::opts::{apply_opts, size_or_one, Configurable, Opt};

#[derive(Debug, Clone, PartialEq)]
struct Ramp {
    stops: Vec<ColorStop>,
}

impl Default for Ramp {
    fn default() -> Self {
        Self {
            stops: even_stops(&[Color::black(), Color::white()]),
        }
    }
}

impl Ramp {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Colors(colors) if !colors.is_empty() => {
                self.stops = even_stops(colors);
                true
            }
            _ => false,
        }
    }

    fn at(&self, t: f64) -> Color {
        sample_stops(&self.stops, t.clamp(0.0, 1.0)).unwrap_or(Color::TRANSPARENT)
    }
}

fn center_of(b: &Rect, center: Option<Point>) -> (f64, f64) {
    match center {
        Some(p) => (p.x as f64, p.y as f64),
        None => (
            (b.min.x as f64 + b.max.x as f64) / 2.0,
            (b.min.y as f64 + b.max.y as f64) / 2.0,
        ),
    }
}

/// Ramp along a direction; at the default angle of 0 it runs left to right
/// across the bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    base: Null,
    ramp: Ramp,
    angle: f64,
}

impl LinearGradient {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut g = Self {
            base: Null::default(),
            ramp: Ramp::default(),
            angle: 0.0,
        };
        apply_opts(&mut g, opts);
        g
    }

    /// Position along the ramp for a pixel.
    pub fn t_at(&self, x: i32, y: i32) -> f64 {
        let b = self.base.bounds();
        let (dx, dy) = {
            let (s, c) = self.angle.to_radians().sin_cos();
            // Snap the axis-aligned cases so they are exact.
            (
                if c.abs() < 1e-12 { 0.0 } else { c },
                if s.abs() < 1e-12 { 0.0 } else { s },
            )
        };
        let (w, h) = (
            b.width().saturating_sub(1).max(0) as f64,
            b.height().saturating_sub(1).max(0) as f64,
        );
        let lo = dx.min(0.0) * w + dy.min(0.0) * h;
        let extent = dx.abs() * w + dy.abs() * h;
        if extent <= 0.0 {
            return 0.0;
        }
        let u = (x - b.min.x) as f64;
        let v = (y - b.min.y) as f64;
        (u * dx + v * dy - lo) / extent
    }
}

impl Configurable for LinearGradient {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Angle(deg) if deg.is_finite() => {
                self.angle = *deg;
                true
            }
            _ => self.ramp.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for LinearGradient {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        self.ramp.at(self.t_at(x, y))
    }
}

/// Ramp outward from a centre; the last color lies at `radius` and beyond.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    base: Null,
    ramp: Ramp,
    center: Option<Point>,
    radius: Option<i32>,
}

impl RadialGradient {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut g = Self {
            base: Null::default(),
            ramp: Ramp::default(),
            center: None,
            radius: None,
        };
        apply_opts(&mut g, opts);
        g
    }
}

impl Configurable for RadialGradient {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Center(p) => {
                self.center = Some(*p);
                true
            }
            Opt::Radius(r) => {
                self.radius = Some(size_or_one(*r));
                true
            }
            _ => self.ramp.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for RadialGradient {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let b = self.base.bounds();
        let (cx, cy) = center_of(&b, self.center);
        let r = self
            .radius
            .map(f64::from)
            .unwrap_or_else(|| b.width().min(b.height()) as f64 / 2.0)
            .max(1.0);
        let d = (x as f64 - cx).hypot(y as f64 - cy);
        self.ramp.at(d / r)
    }
}

/// Conic sweep: the ramp runs once around the centre, starting at `angle`
/// degrees and turning towards +y.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    base: Null,
    ramp: Ramp,
    center: Option<Point>,
    angle: f64,
}

impl Gradient {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut g = Self {
            base: Null::default(),
            ramp: Ramp::default(),
            center: None,
            angle: 0.0,
        };
        apply_opts(&mut g, opts);
        g
    }
}

impl Configurable for Gradient {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Center(p) => {
                self.center = Some(*p);
                true
            }
            Opt::Angle(deg) if deg.is_finite() => {
                self.angle = *deg;
                true
            }
            _ => self.ramp.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for Gradient {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let (cx, cy) = center_of(&self.base.bounds(), self.center);
        let theta = (y as f64 - cy).atan2(x as f64 - cx) - self.angle.to_radians();
        self.ramp.at((theta / TAU).rem_euclid(1.0))
    }
}

/// Rings of `line_size` pixels around a centre, cycling through
/// `Opt::Colors` (white and black by default).
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentricRings {
    base: Null,
    center: Option<Point>,
    width: i32,
    colors: Vec<Color>,
}

impl ConcentricRings {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut rings = Self {
            base: Null::default(),
            center: None,
            width: 8,
            colors: vec![Color::white(), Color::black()],
        };
        apply_opts(&mut rings, opts);
        rings
    }
}

impl Configurable for ConcentricRings {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Center(p) => {
                self.center = Some(*p);
                true
            }
            Opt::LineSize(n) => {
                self.width = size_or_one(*n);
                true
            }
            Opt::Colors(colors) if !colors.is_empty() => {
                self.colors = colors.clone();
                true
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for ConcentricRings {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let (cx, cy) = center_of(&self.base.bounds(), self.center);
        let d = (x as f64 + 0.5 - cx).hypot(y as f64 + 0.5 - cy);
        let ring = (d / self.width as f64).floor() as usize;
        self.colors[ring % self.colors.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_horizontal() {
        let g = LinearGradient::new([Opt::Bounds(Rect::sized(100, 100))]);
        assert_eq!(g.sample(0, 0), Color::black());
        assert_eq!(g.sample(99, 50), Color::white());
        assert!((g.sample(50, 0).r - 50.0 / 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_vertical_and_reversed() {
        let down = LinearGradient::new([Opt::Bounds(Rect::sized(10, 10)), Opt::Angle(90.0)]);
        assert_eq!(down.sample(5, 0), Color::black());
        assert_eq!(down.sample(5, 9), Color::white());
        let back = LinearGradient::new([Opt::Bounds(Rect::sized(10, 10)), Opt::Angle(180.0)]);
        assert_eq!(back.sample(0, 3), Color::white());
        assert_eq!(back.sample(9, 3), Color::black());
    }

    #[test]
    fn test_radial() {
        let g = RadialGradient::new([
            Opt::Center(Point::new(50, 50)),
            Opt::Radius(10),
            Opt::Colors(vec![Color::white(), Color::black()]),
        ]);
        assert_eq!(g.sample(50, 50), Color::white());
        assert_eq!(g.sample(90, 50), Color::black());
        assert!((g.sample(55, 50).r - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_conic_sweeps_once() {
        let g = Gradient::new([Opt::Center(Point::new(0, 0))]);
        assert_eq!(g.sample(10, 0), Color::black());
        assert!((g.sample(0, 10).r - 0.25).abs() < 1e-9);
        assert!((g.sample(-10, 0).r - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_rings_alternate() {
        let r = ConcentricRings::new([Opt::Center(Point::new(0, 0)), Opt::LineSize(4)]);
        assert_eq!(r.sample(0, 0), Color::white());
        assert_eq!(r.sample(5, 0), Color::black());
        assert_eq!(r.sample(9, 0), Color::white());
    }
}
