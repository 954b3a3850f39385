//! CLI command implementations

pub mod list;
pub mod references;
pub mod render;
pub mod render_all;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use texweave::registry::GeneratorFn;
use texweave::{registry, PngConfig, Rect, Texture};

/// PNG compression preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Compression {
    Fast,
    #[default]
    Default,
    Best,
}

impl Compression {
    pub fn png_config(self) -> PngConfig {
        match self {
            Compression::Fast => PngConfig::fast(),
            Compression::Default => PngConfig::default(),
            Compression::Best => PngConfig::best_compression(),
        }
    }
}

/// Look up a generator, suggesting registered names on a miss.
pub(crate) fn lookup(name: &str) -> Result<GeneratorFn> {
    if let Some(generator) = registry().get_generator(name) {
        return Ok(generator);
    }
    let similar = registry().similar_names(name);
    if similar.is_empty() {
        anyhow::bail!("Unknown texture '{}' (run `texweave list`)", name);
    }
    anyhow::bail!(
        "Unknown texture '{}'. Did you mean: {}?",
        name,
        similar.join(", ")
    )
}

/// Canvas rectangle anchored at the origin.
pub(crate) fn canvas(width: u32, height: u32) -> Result<Rect> {
    let w = i32::try_from(width).context("Width out of range")?;
    let h = i32::try_from(height).context("Height out of range")?;
    Ok(Rect::sized(w, h))
}

/// Render a node to `path`, creating parent directories. Returns the BLAKE3
/// hash of the written file.
pub(crate) fn write_png(
    node: &dyn Texture,
    rect: Rect,
    path: &Path,
    config: &PngConfig,
) -> Result<String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    texweave::png::write_node(node, rect, path, config)
        .with_context(|| format!("Failed to write PNG: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_name() {
        assert!(lookup("checker").is_ok());
    }

    #[test]
    fn test_lookup_suggests_prefix_matches() {
        let err = lookup("pe").unwrap_err().to_string();
        assert!(err.contains("perlin"), "{err}");
        assert!(!err.contains("plasma"), "{err}");
    }

    #[test]
    fn test_lookup_without_suggestions() {
        let err = lookup("qqq").unwrap_err().to_string();
        assert!(err.contains("texweave list"), "{err}");
    }

    #[test]
    fn test_canvas_rejects_huge_sizes() {
        assert_eq!(canvas(4, 3).unwrap(), Rect::sized(4, 3));
        assert!(canvas(u32::MAX, 1).is_err());
    }

    #[test]
    fn test_write_png_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.png");
        let node = texweave::pattern::Checker::new(texweave::NO_OPTS);
        let hash = write_png(&node, Rect::sized(8, 8), &path, &PngConfig::fast()).unwrap();
        assert!(path.exists());
        assert_eq!(hash.len(), 64);
    }
}
