//! Composable, deterministic texture synthesis.
//!
//! A texture is a pure function from integer pixel coordinates to a
//! [`Color`], wrapped in the [`Texture`] trait. Textures compose into
//! directed acyclic graphs of shared [`Node`] handles: noise and patterns at
//! the leaves, domain transforms, color ramps, blends and logic above them.
//! Nodes are configured at construction through [`Opt`] values and are
//! immutable afterwards, so any node can be sampled from many threads.
//!
//! # Example
//!
//! ```no_run
//! use texweave::{Color, ColorMap, Noise, Opt, PngConfig, Rect, Warp, NO_OPTS};
//! use std::path::Path;
//!
//! let base = Noise::perlin([Opt::Seed(11), Opt::Frequency(0.02), Opt::Octaves(4)]);
//! let flow = Noise::simplex([Opt::Seed(12)]);
//! let warped = Warp::new(base, flow, 12.0, NO_OPTS);
//! let lava = ColorMap::even(warped, &[Color::black(), Color::red(), Color::white()]);
//!
//! texweave::png::write_node(&lava, Rect::sized(256, 256), Path::new("lava.png"), &PngConfig::default())
//!     .unwrap();
//! ```
//!
//! # Determinism
//!
//! - Every random choice derives from [`hash::hash`] or a PCG32
//!   [`DeterministicRng`] keyed by the node seed.
//! - Sampling never fails; misuse degrades to documented defaults.
//! - PNG encoding uses fixed compression settings, so output bytes are stable.

pub mod blend;
pub mod blue_noise;
pub mod boolean;
pub mod catalog;
pub mod color;
pub mod color_map;
pub mod filter;
pub mod geom;
pub mod hash;
pub mod node;
pub mod noise;
pub mod opts;
pub mod pattern;
pub mod plasma;
pub mod png;
pub mod raster;
pub mod registry;
pub mod rng;
pub mod transform;

// Re-export main types for convenience
pub use blend::{Blend, BlendMode};
pub use blue_noise::BlueNoise;
pub use boolean::{BoolMode, BoolOp, Boolean};
pub use color::{Color, ColorModel};
pub use color_map::{ColorMap, ColorStop};
pub use geom::{Point, Rect};
pub use node::{IntoNode, Node, Null, Texture};
pub use noise::{Fbm, Noise, Noise2D, NoiseAlgorithm, PerlinNoise, SimplexNoise, WorleyNoise};
pub use opts::{Configurable, Opt, NO_OPTS};
pub use plasma::Plasma;
pub use png::{PngConfig, PngError};
pub use raster::{render, TextureBuffer};
pub use registry::{registry, Registry};
pub use rng::DeterministicRng;
pub use transform::{Clamp, Crop, Mirror, Pad, Rotate, Scale, Tile, Translate, Transpose, Warp};
