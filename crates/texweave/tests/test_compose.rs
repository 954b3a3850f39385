//! Color maps, blends and logic over real sources.

use proptest::prelude::*;
use texweave::boolean::{gray_above, gray_level};
use texweave::color_map::even_stops;
use texweave::pattern::{Checker, LinearGradient, Uniform};
use texweave::{
    Blend, BlendMode, BoolMode, BoolOp, Boolean, Color, ColorMap, IntoNode, Node, Noise, Opt, Rect,
    Texture, NO_OPTS,
};

fn gradient() -> Node {
    LinearGradient::new([Opt::Bounds(Rect::sized(256, 1))]).into_node()
}

#[test]
fn test_color_map_is_monotone_over_a_ramp() {
    // A black to white ramp mapped through black to red brightens red only.
    let map = ColorMap::even(gradient(), &[Color::black(), Color::red()]);
    let reds: Vec<f64> = (0..256).map(|x| map.sample(x, 0).r).collect();
    assert!(reds.windows(2).all(|w| w[0] <= w[1] + 1e-12));
    assert_eq!(map.sample(0, 0), Color::black());
    assert_eq!(map.sample(255, 0), Color::red());
}

#[test]
fn test_color_map_keeps_bounds_of_source() {
    let map = ColorMap::new(gradient(), even_stops(&[Color::white()]), NO_OPTS);
    assert_eq!(map.bounds(), Rect::sized(256, 1));
    assert_eq!(map.sample(100, 0), Color::white());
}

#[test]
fn test_boolean_threshold_and_fuzzy() {
    let dark = Uniform::gray(0.2).into_node();
    let light = Uniform::gray(0.9).into_node();

    let and = Boolean::and(BoolMode::Threshold(gray_above(128)), [dark.clone(), light.clone()]);
    let or = Boolean::or(BoolMode::Threshold(gray_above(128)), [dark.clone(), light.clone()]);
    assert_eq!(and.sample(0, 0), Color::black());
    assert_eq!(or.sample(0, 0), Color::white());

    let fuzzy_or = Boolean::or(BoolMode::Fuzzy(gray_level()), [dark.clone(), light.clone()]);
    let fuzzy_and = Boolean::and(BoolMode::Fuzzy(gray_level()), [dark, light]);
    assert!(fuzzy_or.sample(0, 0).r > fuzzy_and.sample(0, 0).r);
}

#[test]
fn test_boolean_not_inverts_checker() {
    let checker = Checker::new([Opt::LineSize(2)]).into_node();
    let not = Boolean::new(
        BoolOp::Not,
        BoolMode::Threshold(gray_above(128)),
        [checker.clone()],
        NO_OPTS,
    );
    for (x, y) in [(0, 0), (2, 0), (3, 3), (-1, 0)] {
        let expected = if checker.sample(x, y) == Color::white() {
            Color::black()
        } else {
            Color::white()
        };
        assert_eq!(not.sample(x, y), expected);
    }
}

proptest! {
    #[test]
    fn prop_normal_over_transparent_is_identity(seed in any::<u64>(), x in -300i32..300, y in -300i32..300) {
        let a = Noise::perlin([Opt::Seed(seed)]).into_node();
        let blend = Blend::new(a.clone(), Uniform::new(Color::transparent()), BlendMode::Normal, NO_OPTS);
        prop_assert_eq!(blend.sample(x, y), a.sample(x, y));
    }

    #[test]
    fn prop_multiply_by_black_is_black(seed in any::<u64>(), x in -300i32..300, y in -300i32..300) {
        let a = Noise::simplex([Opt::Seed(seed)]).into_node();
        let blend = Blend::new(a, Uniform::new(Color::black()), BlendMode::Multiply, NO_OPTS);
        prop_assert_eq!(blend.sample(x, y), Color::black());
    }

    #[test]
    fn prop_screen_never_darkens(seed in any::<u64>(), x in -300i32..300, y in -300i32..300) {
        let a = Noise::worley([Opt::Seed(seed)]).into_node();
        let b = Noise::hash([Opt::Seed(seed ^ 1)]).into_node();
        let screen = Blend::new(a.clone(), b, BlendMode::Screen, NO_OPTS);
        prop_assert!(screen.sample(x, y).r + 1e-12 >= a.sample(x, y).r);
    }
}
