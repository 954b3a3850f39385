//! Named patterns: tuned primitives and composites built from them.
//!
//! Every entry is a `fn(Rect) -> Node`; [`register_all`] puts them in a
//! [`Registry`] under their names. Seeds are fixed so each name renders the
//! same image on every run.

use crate::blend::{Blend, BlendMode};
use crate::blue_noise::BlueNoise;
use crate::boolean::{gray_above, BoolMode, BoolOp, Boolean};
use crate::color::Color;
use crate::color_map::{ColorMap, ColorStop};
use crate::geom::Rect;
use crate::node::{IntoNode, Node};
use crate::noise::{worley_opts, DistanceMetric, Noise, WorleyOutput};
use crate::opts::{Configurable, Opt};
use crate::pattern::{
    Brick, Checker, Crosshatch, Grid, LinearGradient, Polka, RadialGradient, Scales, Scatter,
    Screentone, Uniform, VerticalLine, Voronoi, WoodGrain,
};
use crate::plasma::Plasma;
use crate::registry::{GeneratorFn, ReferencesFn, Registry};
use crate::rng::DeterministicRng;
use crate::transform::Warp;

/// Every catalog generator, by name.
pub const GENERATORS: [(&str, GeneratorFn); 22] = [
    ("checker", checker),
    ("grid", grid),
    ("polka", polka),
    ("crosshatch", crosshatch),
    ("screentone", screentone),
    ("stripes", stripes),
    ("bricks", bricks),
    ("scales", scales),
    ("wood", wood),
    ("perlin", perlin),
    ("simplex", simplex),
    ("worley", worley),
    ("voronoi", voronoi),
    ("plasma", plasma),
    ("blue_noise", blue_noise),
    ("heatmap", heatmap),
    ("lava", lava),
    ("water", water),
    ("sparkles", sparkles),
    ("pcb_traces", pcb_traces),
    ("marble", marble),
    ("camo", camo),
];

/// Catalog entries that expose their intermediate layers.
pub const REFERENCES: [(&str, ReferencesFn); 2] = [("bricks", bricks_layers), ("lava", lava_layers)];

/// Register the whole catalog.
pub fn register_all(registry: &mut Registry) {
    for (name, generator) in GENERATORS {
        registry.register_generator(name, generator);
    }
    for (name, references) in REFERENCES {
        registry.register_references(name, references);
    }
}

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap_or(Color::TRANSPARENT)
}

pub fn checker(r: Rect) -> Node {
    Checker::new([Opt::Bounds(r), Opt::LineSize(16)]).into_node()
}

pub fn grid(r: Rect) -> Node {
    Grid::new([
        Opt::Bounds(r),
        Opt::LineSize(1),
        Opt::SpaceSize(15),
        Opt::FillColor(hex("#4a6fa5")),
        Opt::SpaceColor(hex("#f4f1e8")),
    ])
    .into_node()
}

pub fn polka(r: Rect) -> Node {
    Polka::new([
        Opt::Bounds(r),
        Opt::SpaceSize(24),
        Opt::Radius(6),
        Opt::FillColor(hex("#d64545")),
        Opt::SpaceColor(hex("#fff6e0")),
    ])
    .into_node()
}

pub fn crosshatch(r: Rect) -> Node {
    Crosshatch::new([
        Opt::Bounds(r),
        Opt::LineSize(1),
        Opt::SpaceSize(7),
        Opt::FillColor(Color::black()),
        Opt::SpaceColor(Color::white()),
    ])
    .into_node()
}

/// Halftone of a radial falloff.
pub fn screentone(r: Rect) -> Node {
    let shade = RadialGradient::new([
        Opt::Bounds(r),
        Opt::Colors(vec![Color::black(), Color::white()]),
    ]);
    Screentone::new(shade, [Opt::Bounds(r), Opt::SpaceSize(6), Opt::Angle(45.0)]).into_node()
}

pub fn stripes(r: Rect) -> Node {
    VerticalLine::new([
        Opt::Bounds(r),
        Opt::LineSize(8),
        Opt::SpaceSize(8),
        Opt::FillColor(hex("#1d3557")),
        Opt::SpaceColor(hex("#f1faee")),
    ])
    .into_node()
}

const BRICKS_SEED: u64 = 7;

/// The `mortar`, `tint` and `noise` layers of [`bricks`].
fn brick_parts(r: Rect) -> [Node; 3] {
    let seed = |layer: &str| DeterministicRng::derive_seed(BRICKS_SEED, layer);
    let mortar = Brick::new([
        Opt::Bounds(r),
        Opt::Seed(seed("mortar")),
        Opt::BrickSize(48, 20),
        Opt::MortarSize(3),
        Opt::ChipIntensity(0.25),
        Opt::FillColor(Color::white()),
        Opt::SpaceColor(Color::gray(0.55)),
    ])
    .into_node();
    let tint = ColorMap::new(
        Noise::perlin([Opt::Bounds(r), Opt::Seed(seed("tint")), Opt::Frequency(0.02)]),
        [
            ColorStop::new(0.0, hex("#7a2e1f")),
            ColorStop::new(0.5, hex("#a4452c")),
            ColorStop::new(1.0, hex("#c46a43")),
        ],
        [Opt::Bounds(r)],
    )
    .into_node();
    let noise = ColorMap::new(
        Noise::simplex([Opt::Bounds(r), Opt::Seed(seed("noise")), Opt::Frequency(0.3), Opt::Octaves(2)]),
        [
            ColorStop::new(0.0, Color::gray(0.8)),
            ColorStop::new(1.0, Color::white()),
        ],
        [Opt::Bounds(r)],
    )
    .into_node();
    [mortar, tint, noise]
}

pub fn bricks(r: Rect) -> Node {
    let [mortar, tint, noise] = brick_parts(r);
    let walled = Blend::new(tint, mortar, BlendMode::Multiply, [Opt::Bounds(r)]);
    Blend::new(walled, noise, BlendMode::Multiply, [Opt::Bounds(r)]).into_node()
}

fn bricks_layers(r: Rect) -> Vec<(&'static str, Node)> {
    let [mortar, tint, noise] = brick_parts(r);
    vec![("mortar", mortar), ("tint", tint), ("noise", noise)]
}

pub fn scales(r: Rect) -> Node {
    Scales::new([Opt::Bounds(r), Opt::Radius(14)]).into_node()
}

pub fn wood(r: Rect) -> Node {
    WoodGrain::new([Opt::Bounds(r), Opt::Seed(3), Opt::RingCount(10)]).into_node()
}

pub fn perlin(r: Rect) -> Node {
    Noise::perlin([
        Opt::Bounds(r),
        Opt::Seed(1),
        Opt::Frequency(0.03),
        Opt::Octaves(5),
    ])
    .into_node()
}

pub fn simplex(r: Rect) -> Node {
    Noise::simplex([
        Opt::Bounds(r),
        Opt::Seed(1),
        Opt::Frequency(0.03),
        Opt::Octaves(5),
    ])
    .into_node()
}

pub fn worley(r: Rect) -> Node {
    Noise::worley(worley_opts(1, 0.05, DistanceMetric::Euclidean, WorleyOutput::F1))
        .with([Opt::Bounds(r)])
        .into_node()
}

pub fn voronoi(r: Rect) -> Node {
    Voronoi::new([Opt::Bounds(r), Opt::Seed(3), Opt::Frequency(0.03)]).into_node()
}

pub fn plasma(r: Rect) -> Node {
    Plasma::colored([Opt::Bounds(r), Opt::Seed(5)]).into_node()
}

pub fn blue_noise(r: Rect) -> Node {
    BlueNoise::new([Opt::Bounds(r), Opt::Seed(5)]).into_node()
}

pub fn heatmap(r: Rect) -> Node {
    let field = Noise::perlin([Opt::Bounds(r), Opt::Seed(9), Opt::Frequency(0.02), Opt::Octaves(4)]);
    ColorMap::heatmap(field, [Opt::Bounds(r)]).into_node()
}

/// The `base`, `warp` and `ramp` stages of [`lava`]; the ramp is the result.
fn lava_parts(r: Rect) -> [Node; 3] {
    let base = Noise::perlin([
        Opt::Bounds(r),
        Opt::Seed(11),
        Opt::Frequency(0.02),
        Opt::Octaves(4),
    ])
    .into_node();
    let flow = Noise::simplex([Opt::Seed(12), Opt::Frequency(0.05)]);
    let warp = Warp::new(base.clone(), flow, 12.0, [Opt::Bounds(r)]).into_node();
    let ramp = ColorMap::new(
        warp.clone(),
        [
            ColorStop::new(0.0, hex("#1a0500")),
            ColorStop::new(0.45, hex("#8b1a00")),
            ColorStop::new(0.7, hex("#ff5a00")),
            ColorStop::new(1.0, hex("#ffe066")),
        ],
        [Opt::Bounds(r)],
    )
    .into_node();
    [base, warp, ramp]
}

pub fn lava(r: Rect) -> Node {
    let [_, _, ramp] = lava_parts(r);
    ramp
}

fn lava_layers(r: Rect) -> Vec<(&'static str, Node)> {
    let [base, warp, ramp] = lava_parts(r);
    vec![("base", base), ("warp", warp), ("ramp", ramp)]
}

/// Caustic cells rippled by low-frequency noise.
pub fn water(r: Rect) -> Node {
    let cells = Noise::worley(worley_opts(4, 0.04, DistanceMetric::Euclidean, WorleyOutput::F2MinusF1));
    let tinted = ColorMap::new(
        cells,
        [
            ColorStop::new(0.0, hex("#0b3d91")),
            ColorStop::new(0.25, hex("#1e88e5")),
            ColorStop::new(0.6, hex("#80deea")),
            ColorStop::new(1.0, Color::white()),
        ],
        [Opt::Bounds(r)],
    );
    let ripple = Noise::perlin([Opt::Seed(5), Opt::Frequency(0.03)]);
    Warp::new(tinted, ripple, 6.0, [Opt::Bounds(r)]).into_node()
}

pub fn sparkles(r: Rect) -> Node {
    let sky = Uniform::new(hex("#0d1b2a")).with([Opt::Bounds(r)]);
    let stars = Scatter::new([
        Opt::Bounds(r),
        Opt::Seed(21),
        Opt::SpaceSize(12),
        Opt::Radius(1),
        Opt::Density(0.35),
        Opt::SpaceColor(Color::TRANSPARENT),
        Opt::Colors(vec![Color::white(), hex("#fff3b0"), hex("#a0c4ff")]),
    ]);
    Blend::new(sky, stars, BlendMode::Normal, [Opt::Bounds(r)]).into_node()
}

/// Copper traces where grid lines meet randomly enabled cells, with pads
/// on top.
pub fn pcb_traces(r: Rect) -> Node {
    let lines = Grid::new([Opt::LineSize(2), Opt::SpaceSize(14)]).into_node();
    let enabled = Noise::hash([Opt::Seed(31), Opt::Frequency(1.0 / 16.0)]).into_node();
    let traces = Boolean::new(
        BoolOp::And,
        BoolMode::Threshold(gray_above(110)),
        [lines, enabled],
        [
            Opt::Bounds(r),
            Opt::FillColor(hex("#c8a24a")),
            Opt::SpaceColor(hex("#0f5132")),
        ],
    );
    let pads = Polka::new([
        Opt::SpaceSize(32),
        Opt::Radius(3),
        Opt::FillColor(hex("#e0c070")),
        Opt::SpaceColor(Color::TRANSPARENT),
    ]);
    Blend::new(traces, pads, BlendMode::Normal, [Opt::Bounds(r)]).into_node()
}

pub fn marble(r: Rect) -> Node {
    let bands = LinearGradient::new([Opt::Bounds(r), Opt::Angle(30.0)]);
    let veins = Noise::perlin([Opt::Seed(17), Opt::Frequency(0.02), Opt::Octaves(5)]);
    let swirled = Warp::new(bands, veins, 60.0, [Opt::Bounds(r)]);
    ColorMap::even(
        swirled,
        &[
            Color::white(),
            Color::gray(0.82),
            Color::white(),
            Color::gray(0.45),
            Color::gray(0.9),
        ],
    )
    .with([Opt::Bounds(r)])
    .into_node()
}

pub fn camo(r: Rect) -> Node {
    let patches = Voronoi::new([
        Opt::Seed(13),
        Opt::Frequency(0.03),
        Opt::WorleyMetric(DistanceMetric::Manhattan),
        Opt::Colors(vec![
            hex("#4b5320"),
            hex("#6b4f2a"),
            hex("#c2b280"),
            hex("#2f3b1f"),
        ]),
    ]);
    let wobble = Noise::simplex([Opt::Seed(14), Opt::Frequency(0.06)]);
    Warp::new(patches, wobble, 10.0, [Opt::Bounds(r)]).into_node()
}
