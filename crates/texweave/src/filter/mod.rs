//! Neighbourhood and threshold filters over a child node.
//!
//! Filters read the child's gray level (see [`Color::gray_level`]); the
//! neighbourhood filters sample the child directly around the pixel, so they
//! see past the child's bounds rather than wrapping.

mod dither;
mod edge;
mod normal;

pub use dither::{DitherOrdered, DitherRandom, BAYER4};
pub use edge::EdgeDetect;
pub use normal::NormalMap;

use crate::color::Color;
use crate::node::Node;

/// Sobel gradient `(gx, gy)` of the child's gray level at a pixel.
///
/// ```text
/// Gx = | -1  0  1 |    Gy = | -1 -2 -1 |
///      | -2  0  2 |         |  0  0  0 |
///      | -1  0  1 |         |  1  2  1 |
/// ```
pub(crate) fn sobel(child: &Node, x: i32, y: i32) -> (f64, f64) {
    let mut s = [[0.0; 3]; 3];
    for (dy, row) in s.iter_mut().enumerate() {
        for (dx, v) in row.iter_mut().enumerate() {
            let sx = x.saturating_add(dx as i32 - 1);
            let sy = y.saturating_add(dy as i32 - 1);
            *v = child.sample(sx, sy).gray_level();
        }
    }
    let gx = (s[0][2] + 2.0 * s[1][2] + s[2][2]) - (s[0][0] + 2.0 * s[1][0] + s[2][0]);
    let gy = (s[2][0] + 2.0 * s[2][1] + s[2][2]) - (s[0][0] + 2.0 * s[0][1] + s[0][2]);
    (gx, gy)
}

/// Two-tone output of the threshold filters.
#[inline]
pub(crate) fn threshold(level: f64, t: f64, dark: Color, light: Color) -> Color {
    if level > t {
        light
    } else {
        dark
    }
}
