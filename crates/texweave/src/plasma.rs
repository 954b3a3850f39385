//! Plasma fractal via the diamond-square algorithm.
//!
//! The grid is computed on first sample, at most once per texture, and is
//! read-only afterwards.

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::color::{Color, ColorModel};
use crate::geom::Rect;
use crate::node::{Null, Texture};
use crate::opts::{apply_opts, Configurable, Opt};
use crate::rng::DeterministicRng;

/// Default roughness: jitter amplitude per unit of step size.
pub const DEFAULT_ROUGHNESS: f64 = 0.6;

/// Largest grid period; wider domains wrap around it.
pub const MAX_GRID_PERIOD: usize = 4096;

/// Diamond-square plasma, gray or per-channel color.
#[derive(Debug)]
pub struct Plasma {
    base: Null,
    seed: u64,
    roughness: f64,
    colored: bool,
    /// One `(n + 1)^2` grid per channel.
    grids: OnceCell<PlasmaGrids>,
}

#[derive(Debug)]
struct PlasmaGrids {
    /// Power-of-two period; the grid side is `n + 1`.
    n: usize,
    channels: Vec<Vec<f64>>,
}

impl Plasma {
    /// Gray plasma.
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut plasma = Self {
            base: Null::default(),
            seed: 0,
            roughness: DEFAULT_ROUGHNESS,
            colored: false,
            grids: OnceCell::new(),
        };
        apply_opts(&mut plasma, opts);
        plasma
    }

    /// Color plasma: R, G and B are independent fields seeded `S`, `S+1`, `S+2`.
    pub fn colored(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut plasma = Self::new(opts);
        plasma.colored = true;
        plasma
    }

    /// Whether the grid has been computed yet.
    pub fn is_initialized(&self) -> bool {
        self.grids.get().is_some()
    }

    fn grids(&self) -> &PlasmaGrids {
        self.grids.get_or_init(|| {
            let n = grid_period(self.base.bounds());
            let count = if self.colored { 3 } else { 1 };
            debug!(n, channels = count, seed = self.seed, "building plasma grid");
            let channels = (0..count)
                .map(|ch| diamond_square(n, self.seed.wrapping_add(ch as u64), self.roughness))
                .collect();
            PlasmaGrids { n, channels }
        })
    }
}

/// Power-of-two period covering `bounds`, capped at [`MAX_GRID_PERIOD`].
fn grid_period(bounds: Rect) -> usize {
    let side = bounds.width().max(bounds.height()).max(1) as usize;
    side.min(MAX_GRID_PERIOD).next_power_of_two()
}

impl Configurable for Plasma {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Seed(s) => {
                self.seed = *s;
                true
            }
            Opt::Roughness(r) if r.is_finite() => {
                self.roughness = (*r).max(0.0);
                true
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for Plasma {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let grids = self.grids();
        let bounds = self.base.bounds();
        let n = grids.n as i64;
        let gx = (x as i64 - bounds.min.x as i64).rem_euclid(n) as usize;
        let gy = (y as i64 - bounds.min.y as i64).rem_euclid(n) as usize;
        let idx = gy * (grids.n + 1) + gx;

        match grids.channels.as_slice() {
            [r, g, b] => Color::rgb(r[idx], g[idx], b[idx]),
            [v, ..] => Color::gray(v[idx]),
            [] => Color::TRANSPARENT,
        }
    }

    fn color_model(&self) -> ColorModel {
        if self.colored {
            ColorModel::Rgba
        } else {
            ColorModel::Gray
        }
    }
}

/// Fill an `(n + 1)^2` grid and rescale it to [0, 1].
fn diamond_square(n: usize, seed: u64, roughness: f64) -> Vec<f64> {
    let side = n + 1;
    let mut grid = vec![0.0; side * side];
    let mut rng = DeterministicRng::new(seed);
    let at = |x: usize, y: usize| y * side + x;

    for &(x, y) in &[(0, 0), (n, 0), (0, n), (n, n)] {
        grid[at(x, y)] = rng.gen_f64();
    }

    let mut size = n;
    while size > 1 {
        let half = size / 2;
        let amplitude = roughness * size as f64;

        // Diamond step: centre of every square.
        for y in (half..n).step_by(size) {
            for x in (half..n).step_by(size) {
                let avg = (grid[at(x - half, y - half)]
                    + grid[at(x + half, y - half)]
                    + grid[at(x - half, y + half)]
                    + grid[at(x + half, y + half)])
                    / 4.0;
                grid[at(x, y)] = avg + amplitude * rng.gen_signed_f64();
            }
        }

        // Square step: edge midpoints, averaging the neighbours inside the grid.
        for y in (0..=n).step_by(half) {
            let start = if (y / half) % 2 == 0 { half } else { 0 };
            for x in (start..=n).step_by(size) {
                let mut sum = 0.0;
                let mut count = 0.0;
                if x >= half {
                    sum += grid[at(x - half, y)];
                    count += 1.0;
                }
                if x + half <= n {
                    sum += grid[at(x + half, y)];
                    count += 1.0;
                }
                if y >= half {
                    sum += grid[at(x, y - half)];
                    count += 1.0;
                }
                if y + half <= n {
                    sum += grid[at(x, y + half)];
                    count += 1.0;
                }
                grid[at(x, y)] = sum / count + amplitude * rng.gen_signed_f64();
            }
        }

        size = half;
    }

    normalize(&mut grid);
    grid
}

fn normalize(values: &mut [f64]) {
    let (min, max) = values
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;
    for v in values.iter_mut() {
        *v = if range > 0.0 { (*v - min) / range } else { 0.5 };
    }
}
