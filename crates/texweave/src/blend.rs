//! Per-pixel blending of two nodes.

use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

/// Blend mode for combining a foreground `b` with a background `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Source-over: `b` composited atop `a`.
    #[default]
    Normal,
    Add,
    Multiply,
    Average,
    Screen,
    Overlay,
}

impl BlendMode {
    pub const ALL: [BlendMode; 6] = [
        BlendMode::Normal,
        BlendMode::Add,
        BlendMode::Multiply,
        BlendMode::Average,
        BlendMode::Screen,
        BlendMode::Overlay,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Add => "add",
            BlendMode::Multiply => "multiply",
            BlendMode::Average => "average",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
        }
    }

    /// Combine two straight-alpha colors.
    ///
    /// Modes other than `Normal` work on the straight RGB channels and
    /// average the two alphas.
    pub fn blend(self, a: &Color, b: &Color) -> Color {
        let channel: fn(f64, f64) -> f64 = match self {
            BlendMode::Normal => return source_over(a, b),
            BlendMode::Add => |x, y| x + y,
            BlendMode::Multiply => |x, y| x * y,
            BlendMode::Average => |x, y| (x + y) / 2.0,
            BlendMode::Screen => |x, y| 1.0 - (1.0 - x) * (1.0 - y),
            BlendMode::Overlay => overlay_channel,
        };
        Color::rgba(
            channel(a.r, b.r),
            channel(a.g, b.g),
            channel(a.b, b.b),
            (a.a + b.a) / 2.0,
        )
        .clamp()
    }
}

fn overlay_channel(base: f64, blend: f64) -> f64 {
    if base < 0.5 {
        2.0 * base * blend
    } else {
        1.0 - 2.0 * (1.0 - base) * (1.0 - blend)
    }
}

fn source_over(a: &Color, b: &Color) -> Color {
    if b.a <= 0.0 {
        return *a;
    }
    if b.a >= 1.0 {
        return *b;
    }
    let (pa, pb) = (a.premultiplied(), b.premultiplied());
    let k = 1.0 - b.a;
    Color::rgba(
        pb.r + pa.r * k,
        pb.g + pa.g * k,
        pb.b + pa.b * k,
        pb.a + pa.a * k,
    )
    .unpremultiplied()
}

/// Two nodes combined per pixel by a [`BlendMode`]; bounds default to the
/// union of both.
#[derive(Clone)]
pub struct Blend {
    base: Null,
    a: Node,
    b: Node,
    mode: BlendMode,
}

impl Blend {
    pub fn new(
        a: impl IntoNode,
        b: impl IntoNode,
        mode: BlendMode,
        opts: impl IntoIterator<Item = Opt>,
    ) -> Self {
        let (a, b) = (a.into_node(), b.into_node());
        let mut blend = Self {
            base: Null::with_bounds(a.bounds().union(&b.bounds())),
            a,
            b,
            mode,
        };
        apply_opts(&mut blend, opts);
        blend
    }

    pub fn mode(&self) -> BlendMode {
        self.mode
    }
}

impl std::fmt::Debug for Blend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blend")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Configurable for Blend {
    fn configure(&mut self, opt: &Opt) -> bool {
        self.base.configure(opt)
    }
}

impl Texture for Blend {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        self.mode.blend(&self.a.sample(x, y), &self.b.sample(x, y))
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::Rgba
    }
}
