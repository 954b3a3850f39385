//! Render-all command implementation
//!
//! Renders every registered texture into a directory and writes a
//! `manifest.json` with the file hashes.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::warn;

use super::{canvas, write_png, Compression};
use texweave::registry;

/// Result of rendering a single texture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    pub name: String,
    /// Output file name, relative to the output directory
    pub file: String,
    /// BLAKE3 hash of the PNG, absent on failure
    pub hash: Option<String>,
    pub error: Option<String>,
}

/// Summary written as `manifest.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSummary {
    pub width: u32,
    pub height: u32,
    pub successful: usize,
    pub failed: usize,
    pub runtime_seconds: f64,
    pub textures: Vec<RenderResult>,
}

/// Run the render-all command
///
/// # Returns
/// Exit code: 0 success, 1 if any texture failed
pub fn run(out_dir: &str, width: u32, height: u32, compression: Compression) -> Result<ExitCode> {
    let start = Instant::now();
    let rect = canvas(width, height)?;
    let config = compression.png_config();
    let out_path = Path::new(out_dir);
    fs::create_dir_all(out_path)
        .with_context(|| format!("Failed to create output directory: {}", out_dir))?;

    let reg = registry();
    let mut textures = Vec::with_capacity(reg.len());
    for name in reg.list_names() {
        let file = format!("{}.png", name);
        let result = match reg.generate(name, rect) {
            Some(node) => write_png(node.as_ref(), rect, &out_path.join(&file), &config),
            None => Err(anyhow::anyhow!("Texture '{}' vanished from the registry", name)),
        };
        let entry = match result {
            Ok(hash) => {
                println!("  {} {}", "OK".green().bold(), name);
                RenderResult {
                    name: name.to_string(),
                    file,
                    hash: Some(hash),
                    error: None,
                }
            }
            Err(e) => {
                warn!(name, error = %e, "render failed");
                println!("  {} {}: {:#}", "FAIL".red().bold(), name, e);
                RenderResult {
                    name: name.to_string(),
                    file,
                    hash: None,
                    error: Some(format!("{:#}", e)),
                }
            }
        };
        textures.push(entry);
    }

    let failed = textures.iter().filter(|t| t.error.is_some()).count();
    let summary = RenderSummary {
        width,
        height,
        successful: textures.len() - failed,
        failed,
        runtime_seconds: start.elapsed().as_secs_f64(),
        textures,
    };

    let manifest = out_path.join("manifest.json");
    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize manifest")?;
    fs::write(&manifest, json)
        .with_context(|| format!("Failed to write manifest: {}", manifest.display()))?;

    println!();
    println!(
        "{} {} rendered, {} failed in {:.2}s",
        "Summary:".cyan().bold(),
        summary.successful,
        summary.failed,
        summary.runtime_seconds
    );

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_all_writes_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        run(out.to_str().unwrap(), 8, 8, Compression::Fast).unwrap();

        let manifest = fs::read_to_string(out.join("manifest.json")).unwrap();
        let summary: RenderSummary = serde_json::from_str(&manifest).unwrap();
        assert_eq!(summary.textures.len(), registry().len());
        assert_eq!(summary.failed, 0);
        for t in &summary.textures {
            assert!(out.join(&t.file).exists(), "{} missing", t.file);
        }
    }
}
