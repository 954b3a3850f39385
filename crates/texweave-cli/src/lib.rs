//! texweave CLI library.
//!
//! Command implementations behind the `texweave` binary: listing the
//! registered generators and rendering them, or their reference layers, to
//! PNG files.

pub mod commands;

pub use commands::Compression;
