//! List command implementation
//!
//! Prints every registered generator, marking the ones with reference
//! layers.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use texweave::{registry, Rect};

/// One registry entry as printed by `list --json`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListEntry {
    pub name: String,
    /// Names of the reference layers, empty when the generator has none.
    pub references: Vec<String>,
}

/// Collect the registry listing in name order.
pub fn entries() -> Vec<ListEntry> {
    let reg = registry();
    reg.list_names()
        .into_iter()
        .map(|name| ListEntry {
            name: name.to_string(),
            references: reg
                .get_references(name)
                .map(|layers| {
                    // Layer names do not depend on the canvas.
                    layers(Rect::sized(1, 1))
                        .into_iter()
                        .map(|(layer, _)| layer.to_string())
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect()
}

/// Run the list command
pub fn run(json: bool) -> Result<ExitCode> {
    let entries = entries();

    if json {
        let out = serde_json::to_string_pretty(&entries).context("Failed to serialize listing")?;
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Textures:".cyan().bold(), entries.len());
    for entry in &entries {
        if entry.references.is_empty() {
            println!("  {}", entry.name);
        } else {
            println!(
                "  {} {}",
                entry.name,
                format!("[{}]", entry.references.join(", ")).dimmed()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
