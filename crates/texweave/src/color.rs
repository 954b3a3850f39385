//! Color utilities for texture sampling.
//!
//! Colors are computed as normalized `f64` channels with straight alpha and
//! quantized to 8 or 16 bits only at the output boundary.

use thiserror::Error;

/// RGBA color with f64 components (0.0 to 1.0 range), straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// The color model a texture natively produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorModel {
    /// Premultiplied 8-bit RGBA.
    #[default]
    Rgba,
    /// Non-premultiplied 8-bit RGBA.
    Nrgba,
    /// 8-bit luminance.
    Gray,
    /// 16-bit luminance.
    Gray16,
}

impl ColorModel {
    /// Whether the model carries a single luminance channel.
    pub fn is_gray(&self) -> bool {
        matches!(self, ColorModel::Gray | ColorModel::Gray16)
    }
}

/// Errors from parsing hex color strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected #RRGGBB or #RRGGBBAA, got '{0}'")]
    BadLength(String),

    #[error("invalid hex digit in '{0}'")]
    BadDigit(String),
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque grayscale color.
    pub const fn gray(value: f64) -> Self {
        Self::rgb(value, value, value)
    }

    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    pub const fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }

    pub const fn transparent() -> Self {
        Self::TRANSPARENT
    }

    /// Create a color from HSV values.
    /// - h: hue in degrees (0-360)
    /// - s: saturation (0-1)
    /// - v: value/brightness (0-1)
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        if s <= 0.0 {
            return Self::rgb(v, v, v);
        }

        let h = h.rem_euclid(360.0) / 60.0;

        let i = h.floor() as i32;
        let f = h - i as f64;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match i {
            0 => Self::rgb(v, t, p),
            1 => Self::rgb(q, v, p),
            2 => Self::rgb(p, v, t),
            3 => Self::rgb(p, q, v),
            4 => Self::rgb(t, p, v),
            _ => Self::rgb(v, p, q),
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::BadLength(s.to_string()));
        }
        let mut bytes = [255u8; 4];
        for (i, byte) in bytes.iter_mut().enumerate().take(digits.len() / 2) {
            let pair = digits
                .get(i * 2..i * 2 + 2)
                .ok_or_else(|| ColorParseError::BadDigit(s.to_string()))?;
            *byte = u8::from_str_radix(pair, 16)
                .map_err(|_| ColorParseError::BadDigit(s.to_string()))?;
        }
        Ok(Self::from_rgba8(bytes))
    }

    /// Linearly interpolate between two colors (straight alpha).
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Interpolate in premultiplied space and return a straight-alpha color.
    ///
    /// Fading towards a transparent stop does not drag the color towards
    /// black this way.
    pub fn lerp_premultiplied(&self, other: &Color, t: f64) -> Color {
        self.premultiplied()
            .lerp(&other.premultiplied(), t)
            .unpremultiplied()
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    pub fn premultiplied(&self) -> Color {
        Color {
            r: self.r * self.a,
            g: self.g * self.a,
            b: self.b * self.a,
            a: self.a,
        }
    }

    /// Inverse of [`Color::premultiplied`]; a zero alpha yields transparent black.
    pub fn unpremultiplied(&self) -> Color {
        if self.a <= 0.0 {
            return Color::TRANSPARENT;
        }
        Color {
            r: self.r / self.a,
            g: self.g / self.a,
            b: self.b / self.a,
            a: self.a,
        }
    }

    /// Luminance of the color (perceived brightness), ignoring alpha.
    pub fn luminance(&self) -> f64 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// 16-bit luminance of the premultiplied color.
    pub fn gray16(&self) -> u16 {
        let l = self.premultiplied().luminance().clamp(0.0, 1.0);
        (l * 65535.0).round() as u16
    }

    /// 8-bit luminance of the premultiplied color.
    pub fn gray8(&self) -> u8 {
        (self.gray16() >> 8) as u8
    }

    /// Luminance as a real in [0, 1], quantized through 16 bits.
    pub fn gray_level(&self) -> f64 {
        self.gray16() as f64 / 65535.0
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }

    /// Convert to 16-bit RGBA.
    pub fn to_rgba16(&self) -> [u16; 4] {
        let c = self.clamp();
        [
            (c.r * 65535.0).round() as u16,
            (c.g * 65535.0).round() as u16,
            (c.b * 65535.0).round() as u16,
            (c.a * 65535.0).round() as u16,
        ]
    }

    /// Create from 8-bit RGBA.
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self {
            r: rgba[0] as f64 / 255.0,
            g: rgba[1] as f64 / 255.0,
            b: rgba[2] as f64 / 255.0,
            a: rgba[3] as f64 / 255.0,
        }
    }

    /// Pack the 8-bit channels into `0xRRGGBBAA`.
    pub fn pack_u32(&self) -> u32 {
        u32::from_be_bytes(self.to_rgba8())
    }

    /// Inverse of [`Color::pack_u32`].
    pub fn unpack_u32(word: u32) -> Self {
        Self::from_rgba8(word.to_be_bytes())
    }

    /// Multiply color by a scalar.
    pub fn scale(&self, factor: f64) -> Color {
        Color {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }

    /// Same color with a replaced alpha.
    pub fn with_alpha(&self, a: f64) -> Color {
        Color { a, ..*self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_gray() {
        let gray = Color::gray(0.5);
        assert!((gray.r - 0.5).abs() < 1e-10);
        assert!((gray.g - 0.5).abs() < 1e-10);
        assert!((gray.b - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_hsv_primaries() {
        let red = Color::from_hsv(0.0, 1.0, 1.0);
        assert_eq!(red.to_rgba8(), [255, 0, 0, 255]);
        let blue = Color::from_hsv(240.0, 1.0, 1.0);
        assert_eq!(blue.to_rgba8(), [0, 0, 255, 255]);
        let wrapped = Color::from_hsv(-120.0, 1.0, 1.0);
        assert_eq!(wrapped.to_rgba8(), blue.to_rgba8());
    }

    #[test]
    fn test_lerp() {
        let mid = Color::black().lerp(&Color::white(), 0.5);
        assert!((mid.r - 0.5).abs() < 1e-10);
        assert!((mid.g - 0.5).abs() < 1e-10);
        assert!((mid.b - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_lerp_premultiplied_keeps_hue_towards_transparent() {
        let c = Color::red().lerp_premultiplied(&Color::TRANSPARENT, 0.5);
        assert!((c.r - 1.0).abs() < 1e-10);
        assert!((c.a - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_gray16_extremes() {
        assert_eq!(Color::white().gray16(), 65535);
        assert_eq!(Color::black().gray16(), 0);
        assert_eq!(Color::TRANSPARENT.gray16(), 0);
        assert_eq!(Color::white().with_alpha(0.0).gray16(), 0);
    }

    #[test]
    fn test_pack_u32_layout() {
        let c = Color::from_rgba8([0x12, 0x34, 0x56, 0x78]);
        assert_eq!(c.pack_u32(), 0x1234_5678);
        assert_eq!(Color::unpack_u32(0x1234_5678).to_rgba8(), [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff0000").unwrap().to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(Color::from_hex("00ff0080").unwrap().to_rgba8(), [0, 255, 0, 128]);
        assert!(matches!(Color::from_hex("#fff"), Err(ColorParseError::BadLength(_))));
        assert!(matches!(Color::from_hex("#gg0000"), Err(ColorParseError::BadDigit(_))));
    }
}
