//! Integer points and rectangles describing texture domains.

/// Integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with an exclusive `max` corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

/// Side of the library-wide default domain.
pub const DEFAULT_SIZE: i32 = 255;

impl Rect {
    /// Create a rectangle from two corners, normalizing their order.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Rectangle of the given size anchored at the origin.
    pub const fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Horizontal extent, saturating at `i32::MAX` for spans wider than `i32`.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min.x && x < self.max.x && y >= self.min.y && y < self.max.y
    }

    /// Overlap of two rectangles; empty (zero-sized at `self.min`) when disjoint.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let r = Rect {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() {
            Rect {
                min: self.min,
                max: self.min,
            }
        } else {
            r
        }
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Shift by `(dx, dy)`; corners stop at the edge of the `i32` plane.
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            min: Point::new(self.min.x.saturating_add(dx), self.min.y.saturating_add(dy)),
            max: Point::new(self.max.x.saturating_add(dx), self.max.y.saturating_add(dy)),
        }
    }

    /// Shrink by `n` on every side (grow when `n` is negative).
    pub fn inset(&self, n: i32) -> Rect {
        Rect::new(
            self.min.x.saturating_add(n),
            self.min.y.saturating_add(n),
            self.max.x.saturating_sub(n),
            self.max.y.saturating_sub(n),
        )
    }

    /// Clamp a coordinate into the rectangle. Callers must not pass an empty rect.
    #[inline]
    pub fn clamp_point(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x.clamp(self.min.x, self.max.x.saturating_sub(1)),
            y.clamp(self.min.y, self.max.y.saturating_sub(1)),
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::sized(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_255_square() {
        let r = Rect::default();
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!((r.width(), r.height()), (255, 255));
    }

    #[test]
    fn test_new_normalizes_corners() {
        let r = Rect::new(10, 20, 0, 5);
        assert_eq!(r, Rect::new(0, 5, 10, 20));
    }

    #[test]
    fn test_contains_max_exclusive() {
        let r = Rect::sized(4, 4);
        assert!(r.contains(0, 0));
        assert!(r.contains(3, 3));
        assert!(!r.contains(4, 0));
        assert!(!r.contains(-1, 2));
    }

    #[test]
    fn test_intersect_and_union() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 15, 15);
        assert_eq!(a.intersect(&b), Rect::new(5, 5, 10, 10));
        assert_eq!(a.union(&b), Rect::new(0, 0, 15, 15));
        assert!(a.intersect(&Rect::new(20, 20, 30, 30)).is_empty());
    }

    #[test]
    fn test_clamp_point() {
        let r = Rect::new(2, 2, 6, 6);
        assert_eq!(r.clamp_point(-10, 100), (2, 5));
        assert_eq!(r.clamp_point(3, 4), (3, 4));
    }

    #[test]
    fn test_extreme_rects_saturate() {
        let wide = Rect::new(-2_000_000_000, 0, 2_000_000_000, 10);
        assert_eq!((wide.width(), wide.height()), (i32::MAX, 10));
        assert!(!wide.is_empty());

        let r = Rect::sized(10, 10).translate(i32::MAX - 5, i32::MIN);
        assert_eq!(r.min, Point::new(i32::MAX - 5, i32::MIN));
        assert_eq!(r.max, Point::new(i32::MAX, i32::MIN + 10));

        let full = Rect::new(i32::MIN + 3, 0, i32::MAX - 3, 1).inset(-10);
        assert_eq!(full, Rect::new(i32::MIN, -10, i32::MAX, 11));
    }
}
