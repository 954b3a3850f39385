//! End-to-end scenarios with literal inputs.

use pretty_assertions::assert_eq;
use texweave::noise::{WorleyNoise, WorleyOutput};
use texweave::pattern::{Checker, Uniform};
use texweave::{
    Blend, BlendMode, Color, ColorMap, ColorStop, IntoNode, Noise, Opt, Rect, Texture, Tile, Warp,
    NO_OPTS,
};

#[test]
fn test_deterministic_perlin() {
    let perlin = Noise::perlin([
        Opt::Seed(42),
        Opt::Frequency(0.1),
        Opt::Octaves(3),
        Opt::Persistence(0.5),
        Opt::Lacunarity(2.0),
    ]);
    let c = perlin.sample(10, 20);
    assert_eq!((c.gray16(), c.gray8()), (32767, 127));
    assert_eq!(perlin.sample(10, 20), c);
}

/// gray16 at (10, 20), (13, 27) and (-7, 3).
fn gray16_at(field: &Noise) -> [u16; 3] {
    [(10, 20), (13, 27), (-7, 3)].map(|(x, y)| field.sample(x, y).gray16())
}

#[test]
fn test_perlin_off_lattice_levels() {
    let perlin = Noise::perlin([Opt::Seed(42), Opt::Frequency(0.1)]);
    assert_eq!(gray16_at(&perlin), [32767, 19579, 36610]);
}

#[test]
fn test_simplex_levels() {
    let simplex = Noise::simplex([Opt::Seed(42)]);
    assert_eq!(gray16_at(&simplex), [37413, 32151, 27775]);
}

#[test]
fn test_worley_output_levels() {
    let worley = |output| Noise::worley([Opt::Seed(42), Opt::WorleyOutput(output)]);
    assert_eq!(gray16_at(&worley(WorleyOutput::F2)), [33254, 34286, 46387]);
    assert_eq!(gray16_at(&worley(WorleyOutput::F2MinusF1)), [21822, 19683, 25119]);
    assert_eq!(gray16_at(&worley(WorleyOutput::CellId)), [8738, 27756, 23130]);
}

#[test]
fn test_worley_f1_at_origin() {
    let worley = Noise::worley([Opt::Seed(1), Opt::Frequency(0.05)]);
    let c = worley.sample(0, 0);
    assert_eq!((c.gray16(), c.gray8()), (4375, 17));

    let s = WorleyNoise::new(1).evaluate(0.0, 0.0);
    assert!((s.f1 - 0.066_765_030_334_236_88).abs() < 1e-12);
    assert!((s.f2 - 0.508_472_209_338_672_8).abs() < 1e-12);
    assert_eq!(s.cell, 0x5692_161d_100b_05e5);
    assert!(s.f1 <= s.f2);
}

#[test]
fn test_color_map_boundary() {
    let source = Uniform::gray(128.0 / 255.0);
    let map = ColorMap::new(
        source,
        [
            ColorStop::new(0.0, Color::black()),
            ColorStop::new(0.5, Color::red()),
            ColorStop::new(1.0, Color::white()),
        ],
        NO_OPTS,
    );
    let [r, g, b, a] = map.sample(3, 4).to_rgba8();
    assert_eq!((r, a), (255, 255));
    assert!(g <= 1 && b <= 1, "got {g} {b}");
}

#[test]
fn test_multiply_by_white_is_identity() {
    let a = Checker::new([
        Opt::LineSize(5),
        Opt::FillColor(Color::rgb(0.2, 0.4, 0.6)),
        Opt::SpaceColor(Color::rgb(0.9, 0.1, 0.3)),
    ])
    .into_node();
    let blend = Blend::new(a.clone(), Uniform::new(Color::white()), BlendMode::Multiply, NO_OPTS);
    for y in -12..12 {
        for x in -12..12 {
            assert_eq!(blend.sample(x, y), a.sample(x, y));
        }
    }
}

#[test]
fn test_tiled_checker() {
    let checker = Checker::new([Opt::LineSize(10)]);
    let tile = Tile::new(checker, Rect::new(0, 0, 200, 200), NO_OPTS);
    let at = tile.sample(5, 5);
    assert_eq!(tile.sample(25, 5), at);
    assert_eq!(tile.sample(25, 25), at);
    assert_eq!(tile.sample(205, -195), at);
}

#[test]
fn test_warp_by_mid_gray_is_identity() {
    let source = Noise::hash([Opt::Seed(6)]).into_node();
    let warp = Warp::new(source.clone(), Uniform::gray(0.5), 10.0, NO_OPTS);
    assert_eq!(warp.offset_at(0, 0), (0, 0));
    for y in -8..8 {
        for x in -8..8 {
            assert_eq!(warp.sample(x, y), source.sample(x, y));
        }
    }
}
