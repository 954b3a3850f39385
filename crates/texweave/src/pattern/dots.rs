//! Dot patterns: polka dots, halftone screen, random scatter and a single
//! circle.

use std::f64::consts::FRAC_1_SQRT_2;

use super::Paint;
use crate::color::Color;
use crate::geom::{Point, Rect};
use crate::hash::{hash, unit16};
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, size_or_one, Configurable, Opt};

/// Squared distance from the centre of pixel `(x, y)` to `(cx, cy)`.
#[inline]
fn dist2(x: i32, y: i32, cx: f64, cy: f64) -> f64 {
    let dx = x as f64 + 0.5 - cx;
    let dy = y as f64 + 0.5 - cy;
    dx * dx + dy * dy
}

/// Dots of `radius` on a staggered grid of `space_size` cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polka {
    base: Null,
    paint: Paint,
    spacing: i32,
    radius: i32,
}

impl Polka {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut polka = Self {
            base: Null::default(),
            paint: Paint::default(),
            spacing: 16,
            radius: 4,
        };
        apply_opts(&mut polka, opts);
        polka
    }

    fn inside(&self, x: i32, y: i32) -> bool {
        let s = self.spacing;
        let half = s as f64 / 2.0;
        let r2 = (self.radius as f64).powi(2);
        let row = y.div_euclid(s);
        (row - 1..=row + 1).any(|r| {
            let offset = if r.rem_euclid(2) == 1 { s / 2 } else { 0 };
            let col = (x - offset).div_euclid(s);
            let cy = (r * s) as f64 + half;
            (col - 1..=col + 1).any(|c| {
                let cx = (c * s + offset) as f64 + half;
                dist2(x, y, cx, cy) <= r2
            })
        })
    }
}

impl Configurable for Polka {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::SpaceSize(n) => {
                self.spacing = size_or_one(*n);
                true
            }
            Opt::Radius(r) => {
                self.radius = (*r).max(0);
                true
            }
            _ => self.paint.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for Polka {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        self.paint.pick(self.inside(x, y))
    }
}

/// Halftone screen of a source node: each cell of a rotated grid holds a dot
/// whose area follows the darkness of the source at the cell centre.
#[derive(Clone)]
pub struct Screentone {
    base: Null,
    source: Node,
    paint: Paint,
    cell: i32,
    /// Screen angle in radians.
    angle: f64,
}

impl Screentone {
    pub fn new(source: impl IntoNode, opts: impl IntoIterator<Item = Opt>) -> Self {
        let source = source.into_node();
        let mut tone = Self {
            base: Null::with_bounds(source.bounds()),
            source,
            paint: Paint::new(Color::black(), Color::white()),
            cell: 8,
            angle: 45f64.to_radians(),
        };
        apply_opts(&mut tone, opts);
        tone
    }
}

impl std::fmt::Debug for Screentone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screentone")
            .field("cell", &self.cell)
            .field("angle", &self.angle.to_degrees())
            .finish_non_exhaustive()
    }
}

impl Configurable for Screentone {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::SpaceSize(n) => {
                self.cell = size_or_one(*n);
                true
            }
            Opt::Angle(deg) if deg.is_finite() => {
                self.angle = deg.to_radians();
                true
            }
            _ => self.paint.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for Screentone {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let (sin, cos) = self.angle.sin_cos();
        let s = self.cell as f64;
        let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
        // Into screen space.
        let u = px * cos + py * sin;
        let v = -px * sin + py * cos;
        let cu = ((u / s).floor() + 0.5) * s;
        let cv = ((v / s).floor() + 0.5) * s;
        // Cell centre back in image space.
        let cx = cu * cos - cv * sin;
        let cy = cu * sin + cv * cos;

        let darkness = 1.0 - self.source.sample(cx.floor() as i32, cy.floor() as i32).gray_level();
        let radius = darkness.max(0.0).sqrt() * s * FRAC_1_SQRT_2;
        let (du, dv) = (u - cu, v - cv);
        self.paint.pick(darkness > 0.0 && du * du + dv * dv <= radius * radius)
    }
}

/// Randomly placed dots: each `space_size` cell holds a dot with
/// probability `density`, jittered inside the cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    base: Null,
    paint: Paint,
    seed: u64,
    cell: i32,
    radius: i32,
    density: f64,
    /// Optional per-dot palette; the fill color is used when empty.
    palette: Vec<Color>,
}

impl Scatter {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut scatter = Self {
            base: Null::default(),
            paint: Paint::default(),
            seed: 0,
            cell: 16,
            radius: 3,
            density: 0.5,
            palette: Vec::new(),
        };
        apply_opts(&mut scatter, opts);
        scatter
    }

    /// Hash of the dot covering `(x, y)`, if any.
    fn dot_at(&self, x: i32, y: i32) -> Option<u64> {
        let s = self.cell;
        let (cx, cy) = (x.div_euclid(s), y.div_euclid(s));
        let r2 = (self.radius as f64).powi(2);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let (gx, gy) = ((cx + dx) as i64, (cy + dy) as i64);
                let h = hash(gx, gy, self.seed);
                if self.density < 1.0 && unit16(h) >= self.density {
                    continue;
                }
                let px = (gx as f64 + unit16(h >> 16)) * s as f64;
                let py = (gy as f64 + unit16(h >> 32)) * s as f64;
                if dist2(x, y, px, py) <= r2 {
                    return Some(h);
                }
            }
        }
        None
    }
}

impl Configurable for Scatter {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Seed(s) => {
                self.seed = *s;
                true
            }
            Opt::SpaceSize(n) => {
                self.cell = size_or_one(*n);
                true
            }
            Opt::Radius(r) => {
                self.radius = (*r).max(0);
                true
            }
            Opt::Density(d) if d.is_finite() => {
                self.density = (*d).clamp(0.0, 1.0);
                true
            }
            Opt::Colors(colors) => {
                self.palette = colors.clone();
                true
            }
            _ => self.paint.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for Scatter {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        match self.dot_at(x, y) {
            Some(h) if !self.palette.is_empty() => {
                self.palette[((h >> 48) as usize) % self.palette.len()]
            }
            Some(_) => self.paint.fill,
            None => self.paint.space,
        }
    }
}

/// A single antialiased disc.
///
/// Centre and radius default to the centre of the bounds and half their
/// smaller side. Outside the disc the space color (transparent by default)
/// shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    base: Null,
    paint: Paint,
    center: Option<Point>,
    radius: Option<i32>,
}

impl Circle {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut circle = Self {
            base: Null::default(),
            paint: Paint::new(Color::white(), Color::TRANSPARENT),
            center: None,
            radius: None,
        };
        apply_opts(&mut circle, opts);
        circle
    }

    fn geometry(&self) -> (f64, f64, f64) {
        let b = self.base.bounds();
        let (cx, cy) = match self.center {
            Some(p) => (p.x as f64, p.y as f64),
            None => (
                (b.min.x as f64 + b.max.x as f64) / 2.0,
                (b.min.y as f64 + b.max.y as f64) / 2.0,
            ),
        };
        let r = match self.radius {
            Some(r) => r as f64,
            None => b.width().min(b.height()) as f64 / 2.0,
        };
        (cx, cy, r)
    }
}

impl Configurable for Circle {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Center(p) => {
                self.center = Some(*p);
                true
            }
            Opt::Radius(r) => {
                self.radius = Some((*r).max(0));
                true
            }
            _ => self.paint.configure(opt) || self.base.configure(opt),
        }
    }
}

impl Texture for Circle {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let (cx, cy, r) = self.geometry();
        let d = dist2(x, y, cx, cy).sqrt();
        let coverage = (r - d + 0.5).clamp(0.0, 1.0);
        if coverage >= 1.0 {
            self.paint.fill
        } else if coverage <= 0.0 {
            self.paint.space
        } else {
            self.paint.space.lerp_premultiplied(&self.paint.fill, coverage)
        }
    }
}
