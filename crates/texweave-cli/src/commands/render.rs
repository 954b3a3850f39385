//! Render command implementation
//!
//! Renders one registered texture to a PNG file.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use super::{canvas, lookup, write_png, Compression};

/// Run the render command
///
/// # Arguments
/// * `name` - Registered texture name
/// * `out` - Output file (default: `<name>.png`)
/// * `width`, `height` - Canvas size in pixels
pub fn run(
    name: &str,
    out: Option<&str>,
    width: u32,
    height: u32,
    compression: Compression,
) -> Result<ExitCode> {
    let generator = lookup(name)?;
    let rect = canvas(width, height)?;
    let path = out
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("{}.png", name)));

    debug!(name, width, height, ?compression, "rendering");
    let node = generator(rect);
    let hash = write_png(node.as_ref(), rect, &path, &compression.png_config())?;

    println!(
        "{} {} -> {} ({})",
        "Rendered".green().bold(),
        name,
        path.display(),
        &hash[..16]
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("perlin.png");
        run("perlin", path.to_str(), 16, 8, Compression::Fast).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_render_unknown_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.png");
        assert!(run("nope", path.to_str(), 4, 4, Compression::Default).is_err());
        assert!(!path.exists());
    }
}
