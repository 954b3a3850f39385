//! texweave CLI - render the procedural texture catalog to PNG files

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use texweave_cli::commands;
use texweave_cli::Compression;

const DEFAULT_SIZE: u32 = 255;

/// texweave - Procedural Texture Synthesis
#[derive(Parser)]
#[command(name = "texweave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overridden by TEXWEAVE_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// PNG compression preset
    #[arg(long, global = true, value_enum, default_value_t = Compression::Default)]
    compression: Compression,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered textures
    List {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one texture to a PNG file
    Render {
        /// Registered texture name
        name: String,

        /// Output file (default: <name>.png)
        #[arg(short, long)]
        out: Option<String>,

        /// Width in pixels
        #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..=16384))]
        width: u32,

        /// Height in pixels
        #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..=16384))]
        height: u32,
    },

    /// Render the intermediate layers of a texture
    References {
        /// Registered texture name
        name: String,

        /// Directory for the layer PNGs
        #[arg(long)]
        out_dir: String,

        /// Width in pixels
        #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..=16384))]
        width: u32,

        /// Height in pixels
        #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..=16384))]
        height: u32,
    },

    /// Render every registered texture into a directory
    RenderAll {
        /// Output directory
        #[arg(long)]
        out_dir: String,

        /// Width in pixels
        #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..=16384))]
        width: u32,

        /// Height in pixels
        #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..=16384))]
        height: u32,
    },
}

/// TEXWEAVE_LOG, then RUST_LOG, then `warn` (`debug` with `-v`).
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TEXWEAVE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let compression = cli.compression;
    let result = match cli.command {
        Commands::List { json } => commands::list::run(json),
        Commands::Render {
            name,
            out,
            width,
            height,
        } => commands::render::run(&name, out.as_deref(), width, height, compression),
        Commands::References {
            name,
            out_dir,
            width,
            height,
        } => commands::references::run(&name, &out_dir, width, height, compression),
        Commands::RenderAll {
            out_dir,
            width,
            height,
        } => commands::render_all::run(&out_dir, width, height, compression),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render_defaults() {
        let cli = Cli::try_parse_from(["texweave", "render", "lava"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.compression, Compression::Default);
        match cli.command {
            Commands::Render {
                name,
                out,
                width,
                height,
            } => {
                assert_eq!(name, "lava");
                assert!(out.is_none());
                assert_eq!((width, height), (255, 255));
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "texweave",
            "render-all",
            "--out-dir",
            "out",
            "--compression",
            "best",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.compression, Compression::Best);
        match cli.command {
            Commands::RenderAll { out_dir, .. } => assert_eq!(out_dir, "out"),
            _ => panic!("expected render-all command"),
        }
    }

    #[test]
    fn test_cli_parses_list_json() {
        let cli = Cli::try_parse_from(["texweave", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::List { json: true }));
    }

    #[test]
    fn test_cli_requires_out_dir_for_references() {
        assert!(Cli::try_parse_from(["texweave", "references", "bricks"]).is_err());
    }

    #[test]
    fn test_cli_rejects_zero_width() {
        assert!(Cli::try_parse_from(["texweave", "render", "checker", "--width", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_compression() {
        assert!(Cli::try_parse_from(["texweave", "list", "--compression", "max"]).is_err());
    }
}
