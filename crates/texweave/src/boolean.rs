//! Logical composition of nodes.
//!
//! `And`, `Or` and `Xor` take any number of inputs, `Not` uses only the
//! first. How a color becomes a logical value depends on the [`BoolMode`]:
//!
//! - `ComponentWise`: bit logic on each 8-bit channel.
//! - `Bitwise`: bit logic on the packed `0xRRGGBBAA` word.
//! - `Threshold`: a predicate turns each input into a bool and the result
//!   picks the true or false color.
//! - `Fuzzy`: a predicate turns each input into a level in [0, 1]; `and` is
//!   min, `or` is max, `xor` is `|a - b|` and `not` is `1 - a`. The result
//!   interpolates from the false color to the true color.

use std::fmt;
use std::sync::Arc;

use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{IntoNode, Node, Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

/// Reduces a color to a bool.
pub type Predicate = Arc<dyn Fn(Color) -> bool + Send + Sync>;

/// Reduces a color to a level in [0, 1].
pub type FuzzyPredicate = Arc<dyn Fn(Color) -> f64 + Send + Sync>;

/// True when the 8-bit gray value exceeds `threshold`.
pub fn gray_above(threshold: u8) -> Predicate {
    Arc::new(move |c: Color| c.gray8() > threshold)
}

/// True when alpha exceeds `threshold`.
pub fn alpha_above(threshold: f64) -> Predicate {
    Arc::new(move |c: Color| c.a > threshold)
}

/// The alpha channel as a level.
pub fn alpha_level() -> FuzzyPredicate {
    Arc::new(|c: Color| c.a.clamp(0.0, 1.0))
}

/// The 16-bit gray value as a level.
pub fn gray_level() -> FuzzyPredicate {
    Arc::new(|c: Color| c.gray_level())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    And,
    Or,
    Xor,
    Not,
}

impl BoolOp {
    fn bits(self, acc: u32, next: u32) -> u32 {
        match self {
            BoolOp::And => acc & next,
            BoolOp::Or => acc | next,
            BoolOp::Xor => acc ^ next,
            BoolOp::Not => acc,
        }
    }

    fn fuzzy(self, acc: f64, next: f64) -> f64 {
        match self {
            BoolOp::And => acc.min(next),
            BoolOp::Or => acc.max(next),
            BoolOp::Xor => (acc - next).abs(),
            BoolOp::Not => acc,
        }
    }
}

/// Interpretation of input colors as logical values.
#[derive(Clone)]
pub enum BoolMode {
    ComponentWise,
    Bitwise,
    Threshold(Predicate),
    Fuzzy(FuzzyPredicate),
}

impl Default for BoolMode {
    fn default() -> Self {
        BoolMode::Threshold(gray_above(128))
    }
}

impl fmt::Debug for BoolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolMode::ComponentWise => f.write_str("ComponentWise"),
            BoolMode::Bitwise => f.write_str("Bitwise"),
            BoolMode::Threshold(_) => f.write_str("Threshold(..)"),
            BoolMode::Fuzzy(_) => f.write_str("Fuzzy(..)"),
        }
    }
}

/// N-ary logical combination of nodes.
#[derive(Clone)]
pub struct Boolean {
    base: Null,
    op: BoolOp,
    mode: BoolMode,
    inputs: Vec<Node>,
    true_color: Color,
    false_color: Color,
}

impl Boolean {
    pub fn new<I, N>(op: BoolOp, mode: BoolMode, inputs: I, opts: impl IntoIterator<Item = Opt>) -> Self
    where
        I: IntoIterator<Item = N>,
        N: IntoNode,
    {
        let inputs: Vec<Node> = inputs.into_iter().map(IntoNode::into_node).collect();
        let bounds = inputs
            .iter()
            .map(|n| n.bounds())
            .reduce(|a, b| a.union(&b))
            .filter(|r| !r.is_empty())
            .unwrap_or_default();
        let mut boolean = Self {
            base: Null::with_bounds(bounds),
            op,
            mode,
            inputs,
            true_color: Color::white(),
            false_color: Color::black(),
        };
        apply_opts(&mut boolean, opts);
        boolean
    }

    pub fn and<I, N>(mode: BoolMode, inputs: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: IntoNode,
    {
        Self::new(BoolOp::And, mode, inputs, crate::opts::NO_OPTS)
    }

    pub fn or<I, N>(mode: BoolMode, inputs: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: IntoNode,
    {
        Self::new(BoolOp::Or, mode, inputs, crate::opts::NO_OPTS)
    }

    pub fn xor<I, N>(mode: BoolMode, inputs: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: IntoNode,
    {
        Self::new(BoolOp::Xor, mode, inputs, crate::opts::NO_OPTS)
    }

    pub fn not(mode: BoolMode, input: impl IntoNode) -> Self {
        Self::new(BoolOp::Not, mode, [input.into_node()], crate::opts::NO_OPTS)
    }

    pub fn op(&self) -> BoolOp {
        self.op
    }

    fn combine_bits(&self, x: i32, y: i32, word: impl Fn(Color) -> u32, unword: impl Fn(u32) -> Color) -> Color {
        let mut words = self.inputs.iter().map(|n| word(n.sample(x, y)));
        let Some(first) = words.next() else {
            return Color::TRANSPARENT;
        };
        let bits = match self.op {
            BoolOp::Not => !first,
            op => words.fold(first, |acc, w| op.bits(acc, w)),
        };
        unword(bits)
    }

    fn threshold(&self, x: i32, y: i32, pred: &Predicate) -> Color {
        let mut values = self.inputs.iter().map(|n| pred(n.sample(x, y)));
        let Some(first) = values.next() else {
            return self.false_color;
        };
        let truth = match self.op {
            BoolOp::And => values.fold(first, |acc, v| acc && v),
            BoolOp::Or => values.fold(first, |acc, v| acc || v),
            BoolOp::Xor => values.fold(first, |acc, v| acc ^ v),
            BoolOp::Not => !first,
        };
        if truth {
            self.true_color
        } else {
            self.false_color
        }
    }

    fn fuzzy(&self, x: i32, y: i32, pred: &FuzzyPredicate) -> Color {
        let mut levels = self.inputs.iter().map(|n| pred(n.sample(x, y)).clamp(0.0, 1.0));
        let Some(first) = levels.next() else {
            return self.false_color;
        };
        let level = match self.op {
            BoolOp::Not => 1.0 - first,
            op => levels.fold(first, |acc, v| op.fuzzy(acc, v)),
        };
        self.false_color.lerp(&self.true_color, level)
    }
}

impl fmt::Debug for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boolean")
            .field("op", &self.op)
            .field("mode", &self.mode)
            .field("inputs", &self.inputs.len())
            .finish_non_exhaustive()
    }
}

impl Configurable for Boolean {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::FillColor(c) => {
                self.true_color = *c;
                true
            }
            Opt::SpaceColor(c) => {
                self.false_color = *c;
                true
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for Boolean {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        match &self.mode {
            BoolMode::ComponentWise => self.combine_bits(
                x,
                y,
                |c| u32::from_le_bytes(c.to_rgba8()),
                |w| Color::from_rgba8(w.to_le_bytes()),
            ),
            BoolMode::Bitwise => self.combine_bits(x, y, |c| c.pack_u32(), Color::unpack_u32),
            BoolMode::Threshold(pred) => self.threshold(x, y, pred),
            BoolMode::Fuzzy(pred) => self.fuzzy(x, y, pred),
        }
    }

    fn color_model(&self) -> ColorModel {
        match self.mode {
            BoolMode::ComponentWise | BoolMode::Bitwise => ColorModel::Nrgba,
            _ => ColorModel::Rgba,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Uniform;

    fn solid(rgba: [u8; 4]) -> Node {
        Uniform::new(Color::from_rgba8(rgba)).into_node()
    }

    #[test]
    fn test_componentwise_and_bitwise_agree() {
        let inputs = vec![solid([0xF0, 0x0F, 0xAA, 0xFF]), solid([0x3C, 0xFF, 0x55, 0x80])];
        for op in [BoolOp::And, BoolOp::Or, BoolOp::Xor, BoolOp::Not] {
            let cw = Boolean::new(op, BoolMode::ComponentWise, inputs.clone(), crate::opts::NO_OPTS);
            let bw = Boolean::new(op, BoolMode::Bitwise, inputs.clone(), crate::opts::NO_OPTS);
            assert_eq!(cw.sample(0, 0).to_rgba8(), bw.sample(0, 0).to_rgba8(), "{op:?}");
        }
    }

    #[test]
    fn test_componentwise_values() {
        let inputs = vec![solid([0xF0, 0x0F, 0xAA, 0xFF]), solid([0x3C, 0xFF, 0x55, 0x80])];
        let and = Boolean::and(BoolMode::ComponentWise, inputs.clone());
        assert_eq!(and.sample(0, 0).to_rgba8(), [0x30, 0x0F, 0x00, 0x80]);
        let xor = Boolean::xor(BoolMode::ComponentWise, inputs.clone());
        assert_eq!(xor.sample(0, 0).to_rgba8(), [0xCC, 0xF0, 0xFF, 0x7F]);
        let not = Boolean::not(BoolMode::ComponentWise, inputs[0].clone());
        assert_eq!(not.sample(0, 0).to_rgba8(), [0x0F, 0xF0, 0x55, 0x00]);
    }

    #[test]
    fn test_threshold_xor_is_parity() {
        let white = Uniform::new(Color::white()).into_node();
        let black = Uniform::new(Color::black()).into_node();
        let mode = BoolMode::Threshold(gray_above(128));
        let odd = Boolean::xor(mode.clone(), vec![white.clone(), white.clone(), white.clone()]);
        assert_eq!(odd.sample(0, 0), Color::white());
        let even = Boolean::xor(mode.clone(), vec![white.clone(), white.clone(), black.clone()]);
        assert_eq!(even.sample(0, 0), Color::black());
        let and = Boolean::and(mode.clone(), vec![white.clone(), black.clone()]);
        assert_eq!(and.sample(0, 0), Color::black());
        let or = Boolean::or(mode, vec![white, black]);
        assert_eq!(or.sample(0, 0), Color::white());
    }

    #[test]
    fn test_threshold_colors_are_options() {
        let b = Boolean::new(
            BoolOp::Not,
            BoolMode::Threshold(alpha_above(0.5)),
            [Null::default()],
            [Opt::FillColor(Color::red()), Opt::SpaceColor(Color::TRANSPARENT)],
        );
        assert_eq!(b.sample(1, 1), Color::red());
    }

    #[test]
    fn test_fuzzy_ops() {
        let half = Uniform::new(Color::white().with_alpha(0.5)).into_node();
        let quarter = Uniform::new(Color::white().with_alpha(0.25)).into_node();
        let mode = BoolMode::Fuzzy(alpha_level());
        let level = |b: Boolean| b.sample(0, 0).r;
        assert!((level(Boolean::and(mode.clone(), vec![half.clone(), quarter.clone()])) - 0.25).abs() < 1e-12);
        assert!((level(Boolean::or(mode.clone(), vec![half.clone(), quarter.clone()])) - 0.5).abs() < 1e-12);
        assert!((level(Boolean::xor(mode.clone(), vec![half.clone(), quarter.clone()])) - 0.25).abs() < 1e-12);
        assert!((level(Boolean::not(mode, quarter)) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_empty_inputs() {
        let none: Vec<Node> = Vec::new();
        let t = Boolean::and(BoolMode::default(), none.clone());
        assert_eq!(t.sample(0, 0), Color::black());
        let c = Boolean::and(BoolMode::Bitwise, none);
        assert_eq!(c.sample(0, 0), Color::TRANSPARENT);
        assert_eq!(c.bounds(), Rect::default());
    }
}
