//! Text rendered with a built-in 5x7 bitmap font.

use crate::color::Color;
use crate::geom::Rect;
use crate::node::{Null, Texture};
use crate::opts::{apply_opts, size_or_one, Configurable, Opt};

const GLYPH_WIDTH: i32 = 5;
const GLYPH_HEIGHT: i32 = 7;
const ADVANCE: i32 = GLYPH_WIDTH + 1;
const LINE_HEIGHT: i32 = GLYPH_HEIGHT + 1;

/// Row bitmasks for ASCII 32..=95; bit 4 is the leftmost column.
#[rustfmt::skip]
const GLYPHS: [[u8; 7]; 64] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x04, 0x04, 0x04, 0x04, 0x00, 0x04, 0x00], // '!'
    [0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x00, 0x00], // '#'
    [0x04, 0x0E, 0x14, 0x0E, 0x05, 0x0E, 0x04], // '$'
    [0x19, 0x1A, 0x04, 0x0B, 0x13, 0x00, 0x00], // '%'
    [0x0C, 0x12, 0x0C, 0x12, 0x13, 0x0D, 0x00], // '&'
    [0x04, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00], // "'"
    [0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00], // '('
    [0x04, 0x02, 0x02, 0x02, 0x02, 0x04, 0x00], // ')'
    [0x00, 0x15, 0x0E, 0x15, 0x00, 0x00, 0x00], // '*'
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x04, 0x04, 0x08], // ','
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00], // '.'
    [0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00], // '/'
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // '0'
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // '1'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // '2'
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // '3'
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // '4'
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // '5'
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // '6'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // '7'
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // '8'
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // '9'
    [0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00], // ':'
    [0x00, 0x04, 0x00, 0x00, 0x04, 0x04, 0x08], // ';'
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // '<'
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00], // '='
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // '>'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // '?'
    [0x0E, 0x11, 0x17, 0x15, 0x17, 0x10, 0x0E], // '@'
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // 'A'
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // 'B'
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // 'C'
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // 'D'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // 'E'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // 'F'
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // 'G'
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // 'H'
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // 'I'
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // 'J'
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // 'K'
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // 'L'
    [0x11, 0x1B, 0x15, 0x11, 0x11, 0x11, 0x11], // 'M'
    [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11], // 'N'
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // 'O'
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // 'P'
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // 'Q'
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // 'R'
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // 'S'
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // 'T'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // 'U'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // 'V'
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11], // 'W'
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // 'X'
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // 'Y'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // 'Z'
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E], // '['
    [0x10, 0x08, 0x04, 0x02, 0x01, 0x00, 0x00], // '\\'
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E], // ']'
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F], // '_'
];

fn glyph(c: char) -> &'static [u8; 7] {
    let c = c.to_ascii_uppercase();
    let code = c as u32;
    if (32..=95).contains(&code) {
        &GLYPHS[(code - 32) as usize]
    } else {
        &GLYPHS[('?' as u32 - 32) as usize]
    }
}

/// Monospaced bitmap text; `line_size` is the size of one font pixel.
///
/// Lowercase letters render as uppercase and unsupported characters as `?`.
/// Unless bounds are given they cover the rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    base: Null,
    lines: Vec<Vec<char>>,
    scale: i32,
    ink: Color,
    paper: Color,
    fixed_bounds: bool,
}

impl Text {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut text = Self {
            base: Null::default(),
            lines: Vec::new(),
            scale: 1,
            ink: Color::white(),
            paper: Color::TRANSPARENT,
            fixed_bounds: false,
        };
        apply_opts(&mut text, opts);
        if !text.fixed_bounds {
            if let Some(extent) = text.extent() {
                text.base.set_bounds(extent);
            }
        }
        text
    }

    /// Area covered by the glyphs, `None` for empty text.
    pub fn extent(&self) -> Option<Rect> {
        let cols = self.lines.iter().map(Vec::len).max().unwrap_or(0) as i32;
        let rows = self.lines.len() as i32;
        if cols == 0 {
            return None;
        }
        let w = (cols * ADVANCE - 1) * self.scale;
        let h = (rows * LINE_HEIGHT - 1) * self.scale;
        Some(Rect::sized(w, h))
    }

    fn ink_at(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (fx, fy) = (x / self.scale, y / self.scale);
        let (row, gy) = ((fy / LINE_HEIGHT) as usize, fy % LINE_HEIGHT);
        let (col, gx) = ((fx / ADVANCE) as usize, fx % ADVANCE);
        if gx >= GLYPH_WIDTH || gy >= GLYPH_HEIGHT {
            return false;
        }
        match self.lines.get(row).and_then(|line| line.get(col)) {
            Some(&c) => glyph(c)[gy as usize] & (0x10 >> gx) != 0,
            None => false,
        }
    }
}

impl Configurable for Text {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Text(s) => {
                self.lines = s.lines().map(|l| l.chars().collect()).collect();
                true
            }
            Opt::LineSize(n) => {
                self.scale = size_or_one(*n);
                true
            }
            Opt::FillColor(c) => {
                self.ink = *c;
                true
            }
            Opt::SpaceColor(c) => {
                self.paper = *c;
                true
            }
            Opt::Bounds(_) => {
                let accepted = self.base.configure(opt);
                self.fixed_bounds |= accepted;
                accepted
            }
            _ => false,
        }
    }
}

impl Texture for Text {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        if self.ink_at(x, y) {
            self.ink
        } else {
            self.paper
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_cover_text() {
        let t = Text::new([Opt::Text("AB\nC".into())]);
        assert_eq!(t.bounds(), Rect::sized(11, 15));
        let big = Text::new([Opt::Text("AB".into()), Opt::LineSize(3)]);
        assert_eq!(big.bounds(), Rect::sized(33, 21));
    }

    #[test]
    fn test_glyph_pixels() {
        let t = Text::new([Opt::Text("L".into())]);
        assert_eq!(t.sample(0, 0), Color::white());
        assert_eq!(t.sample(1, 0), Color::TRANSPARENT);
        assert_eq!(t.sample(4, 6), Color::white());
        assert_eq!(t.sample(5, 6), Color::TRANSPARENT);
    }

    #[test]
    fn test_lowercase_and_unknown() {
        let lower = Text::new([Opt::Text("x".into())]);
        let upper = Text::new([Opt::Text("X".into())]);
        for y in 0..7 {
            for x in 0..5 {
                assert_eq!(lower.sample(x, y), upper.sample(x, y));
            }
        }
        assert_eq!(glyph('~'), glyph('?'));
    }

    #[test]
    fn test_empty_text_keeps_default_bounds() {
        let t = Text::new([Opt::Text(String::new())]);
        assert_eq!(t.bounds(), Rect::default());
        assert_eq!(t.sample(0, 0), Color::TRANSPARENT);
    }
}
