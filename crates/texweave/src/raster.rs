//! Rasterizing a node into a pixel buffer.

use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::Texture;

/// A rendered rectangle of a texture.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Color model of the texture the buffer was rendered from.
    pub model: ColorModel,
    /// Pixel data (row-major).
    pub data: Vec<Color>,
}

impl TextureBuffer {
    /// Create a new texture buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            model: ColorModel::Rgba,
            data: vec![fill; size],
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = color;
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 8-bit RGBA bytes, straight alpha.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }

    /// 8-bit luminance bytes.
    pub fn to_gray8(&self) -> Vec<u8> {
        self.data.iter().map(Color::gray8).collect()
    }
}

/// Sample every pixel of `rect`, row-major from `rect.min`.
///
/// An empty rectangle yields an empty buffer.
pub fn render<T: Texture + ?Sized>(node: &T, rect: Rect) -> TextureBuffer {
    let (w, h) = if rect.is_empty() {
        (0, 0)
    } else {
        (rect.width(), rect.height())
    };
    let mut data = Vec::with_capacity(w as usize * h as usize);
    for y in rect.min.y..rect.min.y.saturating_add(h) {
        for x in rect.min.x..rect.min.x.saturating_add(w) {
            data.push(node.sample(x, y));
        }
    }
    TextureBuffer {
        width: w as u32,
        height: h as u32,
        model: node.color_model(),
        data,
    }
}

/// Render a node over its own bounds.
pub fn render_bounds<T: Texture + ?Sized>(node: &T) -> TextureBuffer {
    render(node, node.bounds())
}
