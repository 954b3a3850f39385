//! Color ramps over the luminance of a source node.

use crate::color::Color;
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

/// A color pinned at a ramp position in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(position: f64, color: Color) -> Self {
        Self { position, color }
    }
}

/// Stops spaced evenly from 0 to 1.
pub fn even_stops(colors: &[Color]) -> Vec<ColorStop> {
    match colors.len() {
        0 => Vec::new(),
        1 => vec![ColorStop::new(0.0, colors[0])],
        n => colors
            .iter()
            .enumerate()
            .map(|(i, c)| ColorStop::new(i as f64 / (n - 1) as f64, *c))
            .collect(),
    }
}

/// Black, blue, cyan, green, yellow, red, white.
pub fn heatmap_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Color::black()),
        ColorStop::new(0.15, Color::rgb(0.0, 0.0, 1.0)),
        ColorStop::new(0.35, Color::rgb(0.0, 1.0, 1.0)),
        ColorStop::new(0.5, Color::rgb(0.0, 1.0, 0.0)),
        ColorStop::new(0.65, Color::rgb(1.0, 1.0, 0.0)),
        ColorStop::new(0.85, Color::red()),
        ColorStop::new(1.0, Color::white()),
    ]
}

/// Maps the 16-bit gray level of a source through piecewise-linear stops.
///
/// Interpolation runs in premultiplied space. Below the first stop the first
/// color is returned and above the last the last color; with duplicate
/// positions the later stop wins at that position. An empty stop list passes
/// the source color through.
#[derive(Clone)]
pub struct ColorMap {
    base: Null,
    source: Node,
    stops: Vec<ColorStop>,
}

impl ColorMap {
    pub fn new(
        source: impl IntoNode,
        stops: impl IntoIterator<Item = ColorStop>,
        opts: impl IntoIterator<Item = Opt>,
    ) -> Self {
        let source = source.into_node();
        let mut map = Self {
            base: Null::with_bounds(source.bounds()),
            source,
            stops: Vec::new(),
        };
        map.set_stops(stops);
        apply_opts(&mut map, opts);
        map
    }

    /// Ramp through `colors` at even spacing.
    pub fn even(source: impl IntoNode, colors: &[Color]) -> Self {
        Self::new(source, even_stops(colors), crate::opts::NO_OPTS)
    }

    /// False-color heatmap of the source luminance.
    pub fn heatmap(source: impl IntoNode, opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::new(source, heatmap_stops(), opts)
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    fn set_stops(&mut self, stops: impl IntoIterator<Item = ColorStop>) {
        self.stops = stops
            .into_iter()
            .filter(|s| s.position.is_finite())
            .map(|s| ColorStop::new(s.position.clamp(0.0, 1.0), s.color))
            .collect();
        // Stable, so duplicates keep their insertion order.
        self.stops
            .sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    /// Ramp color at `t` in [0, 1].
    pub fn color_at(&self, t: f64) -> Option<Color> {
        sample_stops(&self.stops, t)
    }
}

/// Piecewise-linear lookup in stops sorted by position; `None` when empty.
pub fn sample_stops(stops: &[ColorStop], t: f64) -> Option<Color> {
    let (first, last) = (stops.first()?, stops.last()?);
    if t.is_nan() || t < first.position {
        return Some(first.color);
    }
    if t >= last.position {
        return Some(last.color);
    }
    let i = stops.partition_point(|s| s.position <= t);
    let (lo, hi) = (&stops[i - 1], &stops[i]);
    let frac = (t - lo.position) / (hi.position - lo.position);
    Some(lo.color.lerp_premultiplied(&hi.color, frac))
}

impl std::fmt::Debug for ColorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorMap")
            .field("stops", &self.stops)
            .finish_non_exhaustive()
    }
}

impl Configurable for ColorMap {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Colors(colors) => {
                self.set_stops(even_stops(colors));
                true
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for ColorMap {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let src = self.source.sample(x, y);
        self.color_at(src.gray_level()).unwrap_or(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opts::NO_OPTS;
    use crate::pattern::Uniform;

    fn ramp(stops: Vec<ColorStop>) -> ColorMap {
        ColorMap::new(Uniform::new(Color::black()), stops, NO_OPTS)
    }

    #[test]
    fn test_stops_sorted_at_construction() {
        let m = ramp(vec![
            ColorStop::new(1.0, Color::white()),
            ColorStop::new(0.0, Color::black()),
            ColorStop::new(0.5, Color::red()),
        ]);
        let positions: Vec<f64> = m.stops().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_endpoints_and_midpoint() {
        let m = ramp(vec![
            ColorStop::new(0.2, Color::black()),
            ColorStop::new(0.8, Color::white()),
        ]);
        assert_eq!(m.color_at(0.0), Some(Color::black()));
        assert_eq!(m.color_at(1.0), Some(Color::white()));
        let mid = m.color_at(0.5).unwrap();
        assert!((mid.r - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_position_takes_later_stop() {
        let m = ramp(vec![
            ColorStop::new(0.0, Color::black()),
            ColorStop::new(0.5, Color::red()),
            ColorStop::new(0.5, Color::white()),
            ColorStop::new(1.0, Color::black()),
        ]);
        assert_eq!(m.color_at(0.5), Some(Color::white()));
    }

    #[test]
    fn test_empty_stops_pass_source_through() {
        let m = ColorMap::new(Uniform::new(Color::red()), Vec::new(), NO_OPTS);
        assert_eq!(m.sample(3, 3), Color::red());
    }

    #[test]
    fn test_colors_option_replaces_stops() {
        let m = ColorMap::heatmap(Uniform::new(Color::white()), [Opt::Colors(vec![
            Color::black(),
            Color::red(),
        ])]);
        assert_eq!(m.stops().len(), 2);
        assert_eq!(m.sample(0, 0), Color::red());
    }

    #[test]
    fn test_heatmap_extremes() {
        let cold = ColorMap::heatmap(Uniform::new(Color::black()), NO_OPTS);
        let hot = ColorMap::heatmap(Uniform::new(Color::white()), NO_OPTS);
        assert_eq!(cold.sample(0, 0), Color::black());
        assert_eq!(hot.sample(0, 0), Color::white());
    }
}
