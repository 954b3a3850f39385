//! References command implementation
//!
//! Writes each intermediate layer of a texture as `<name>_<layer>.png`.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::{canvas, lookup, write_png, Compression};
use texweave::registry;

/// Run the references command
pub fn run(
    name: &str,
    out_dir: &str,
    width: u32,
    height: u32,
    compression: Compression,
) -> Result<ExitCode> {
    // Unknown names get the same suggestions as `render`.
    lookup(name)?;
    let Some(layers) = registry().get_references(name) else {
        anyhow::bail!("Texture '{}' has no reference layers", name);
    };

    let rect = canvas(width, height)?;
    let config = compression.png_config();
    let out_dir = Path::new(out_dir);

    for (layer, node) in layers(rect) {
        let path = out_dir.join(format!("{}_{}.png", name, layer));
        write_png(node.as_ref(), rect, &path, &config)?;
        println!("  {} {}", "wrote".green(), path.display());
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_write_every_layer() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        run("lava", out, 8, 8, Compression::Fast).unwrap();
        for layer in ["base", "warp", "ramp"] {
            assert!(dir.path().join(format!("lava_{layer}.png")).exists());
        }
    }

    #[test]
    fn test_texture_without_references_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = run("checker", dir.path().to_str().unwrap(), 4, 4, Compression::Fast)
            .unwrap_err();
        assert!(err.to_string().contains("no reference layers"));
    }
}
