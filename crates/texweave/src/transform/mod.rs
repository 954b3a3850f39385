//! Domain transforms.
//!
//! Each transform wraps a child node and rewrites the coordinates it is
//! sampled at. All of them are O(1) per sample plus one child sample (Warp
//! adds the distortion lookups). Unless stated otherwise the reported bounds
//! default to the child's, and `Opt::Bounds` overrides only the reported
//! domain.

mod clamp;
mod crop;
mod mirror;
mod rotate;
mod scale;
mod tile;
mod transpose;
mod warp;

pub use clamp::Clamp;
pub use crop::{Crop, Pad};
pub use mirror::Mirror;
pub use rotate::{Rotate, Rotation};
pub use scale::Scale;
pub use tile::Tile;
pub use transpose::{Translate, Transpose};
pub use warp::Warp;

use crate::node::{Node, Null};

/// Base carrying the child's bounds, for transforms that do not resize.
#[inline]
fn inherit_bounds(child: &Node) -> Null {
    Null::with_bounds(child.bounds())
}
