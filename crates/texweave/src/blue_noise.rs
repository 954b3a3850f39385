//! Blue noise threshold map.
//!
//! White noise is high-pass filtered (the value minus a wrapped box blur of
//! its neighbourhood) and then rank-equalized so every level in [0, 1] is
//! equally likely. The tile is built on first sample and repeats with period
//! `size` in both axes.

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::hash::hash_unit;
use crate::node::{Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};

pub const DEFAULT_TILE_SIZE: usize = 64;
pub const DEFAULT_BLUR_RADIUS: usize = 2;

/// Tileable blue-noise field presented as gray.
#[derive(Debug)]
pub struct BlueNoise {
    base: Null,
    seed: u64,
    size: usize,
    radius: usize,
    table: OnceCell<Vec<f64>>,
}

impl BlueNoise {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut noise = Self {
            base: Null::default(),
            seed: 0,
            size: DEFAULT_TILE_SIZE,
            radius: DEFAULT_BLUR_RADIUS,
            table: OnceCell::new(),
        };
        apply_opts(&mut noise, opts);
        noise
    }

    /// Set the tile period (at least 4).
    pub fn with_tile_size(mut self, size: usize) -> Self {
        self.size = size.max(4);
        self.table = OnceCell::new();
        self
    }

    pub fn tile_size(&self) -> usize {
        self.size
    }

    pub fn is_initialized(&self) -> bool {
        self.table.get().is_some()
    }

    fn table(&self) -> &[f64] {
        self.table.get_or_init(|| {
            debug!(size = self.size, seed = self.seed, "building blue noise tile");
            build_table(self.size, self.radius, self.seed)
        })
    }
}

impl Configurable for BlueNoise {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Seed(s) => {
                self.seed = *s;
                true
            }
            Opt::Radius(r) => {
                self.radius = (*r).max(1) as usize;
                true
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for BlueNoise {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let n = self.size as i64;
        let tx = (x as i64).rem_euclid(n) as usize;
        let ty = (y as i64).rem_euclid(n) as usize;
        Color::gray(self.table()[ty * self.size + tx])
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::Gray
    }
}

fn build_table(size: usize, radius: usize, seed: u64) -> Vec<f64> {
    let white: Vec<f64> = (0..size * size)
        .map(|i| hash_unit((i % size) as i64, (i / size) as i64, seed))
        .collect();

    let blurred = box_blur_wrapped(&white, size, radius);
    let high: Vec<f64> = white.iter().zip(&blurred).map(|(w, b)| w - b).collect();

    // Rank-equalize; ties break on index so the order is total.
    let mut order: Vec<usize> = (0..high.len()).collect();
    order.sort_by(|&a, &b| high[a].total_cmp(&high[b]).then(a.cmp(&b)));

    let last = (high.len() - 1).max(1) as f64;
    let mut table = vec![0.0; high.len()];
    for (rank, &idx) in order.iter().enumerate() {
        table[idx] = rank as f64 / last;
    }
    table
}

/// Separable box blur on a square, toroidally wrapped grid.
fn box_blur_wrapped(src: &[f64], size: usize, r: usize) -> Vec<f64> {
    let d = (2 * r + 1) as f64;
    let n = size as i64;
    let wrap = |v: i64| v.rem_euclid(n) as usize;

    let mut tmp = vec![0.0; src.len()];
    for y in 0..size {
        for x in 0..size {
            let sum: f64 = (-(r as i64)..=r as i64)
                .map(|dx| src[y * size + wrap(x as i64 + dx)])
                .sum();
            tmp[y * size + x] = sum / d;
        }
    }

    let mut out = vec![0.0; src.len()];
    for y in 0..size {
        for x in 0..size {
            let sum: f64 = (-(r as i64)..=r as i64)
                .map(|dy| tmp[wrap(y as i64 + dy) * size + x])
                .sum();
            out[y * size + x] = sum / d;
        }
    }
    out
}
