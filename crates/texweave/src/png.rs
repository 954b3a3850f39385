//! Deterministic PNG writer.
//!
//! Compression and filter are fixed per [`PngConfig`] and no variable
//! metadata is written, so the same node and rectangle always encode to the
//! same bytes.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::geom::Rect;
use crate::node::Texture;
use crate::raster::{render, TextureBuffer};

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smallest files.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Fastest encode.
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Encode a rendered buffer: single-channel for gray color models, RGBA
/// otherwise.
pub fn write_buffer<W: Write>(
    buffer: &TextureBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{} image has no pixels",
            buffer.width, buffer.height
        )));
    }

    let (color, data) = if buffer.model.is_gray() {
        (ColorType::Grayscale, buffer.to_gray8())
    } else {
        (ColorType::Rgba, buffer.to_rgba8())
    };

    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(color);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&data)?;
    Ok(())
}

/// Render `rect` of a node and encode it in memory.
pub fn encode_node<T: Texture + ?Sized>(
    node: &T,
    rect: Rect,
    config: &PngConfig,
) -> Result<Vec<u8>, PngError> {
    let buffer = render(node, rect);
    let mut data = Vec::new();
    write_buffer(&buffer, &mut data, config)?;
    Ok(data)
}

/// Render `rect` of a node to a PNG file, returning the BLAKE3 hash of the
/// written bytes.
pub fn write_node<T: Texture + ?Sized>(
    node: &T,
    rect: Rect,
    path: &Path,
    config: &PngConfig,
) -> Result<String, PngError> {
    let data = encode_node(node, rect, config)?;
    std::fs::write(path, &data)?;
    Ok(hash_png(&data))
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::noise::Noise;
    use crate::opts::{Opt, NO_OPTS};
    use crate::pattern::{Checker, Uniform};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_deterministic() {
        let node = Noise::perlin([Opt::Seed(3)]);
        let r = Rect::sized(32, 32);
        let a = encode_node(&node, r, &PngConfig::default()).expect("encode");
        let b = encode_node(&node, r, &PngConfig::default()).expect("encode");
        assert_eq!(a, b);
        assert_eq!(hash_png(&a), hash_png(&b));
        assert_eq!(&a[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_gray_models_write_one_channel() {
        let gray = encode_node(&Uniform::gray(0.5), Rect::sized(8, 8), &PngConfig::default())
            .expect("encode");
        let rgba = encode_node(&Checker::new(NO_OPTS), Rect::sized(8, 8), &PngConfig::default())
            .expect("encode");
        // IHDR color type byte: 0 = grayscale, 6 = RGBA.
        assert_eq!(gray[25], 0);
        assert_eq!(rgba[25], 6);
    }

    #[test]
    fn test_empty_rect_is_rejected() {
        let err = encode_node(&Uniform::new(Color::red()), Rect::new(0, 0, 0, 5), &PngConfig::fast());
        assert!(matches!(err, Err(PngError::InvalidDimensions(_))));
    }

    #[test]
    fn test_write_node_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("checker.png");
        let node = Checker::new(NO_OPTS);
        let hash = write_node(&node, Rect::sized(16, 16), &path, &PngConfig::best_compression())
            .expect("write");
        let bytes = std::fs::read(&path).expect("read back");
        assert_eq!(hash, hash_png(&bytes));
    }
}
