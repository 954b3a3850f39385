//! Flat-colored Voronoi cells.

use crate::color::Color;
use crate::geom::Rect;
use crate::node::{Null, Texture};
use crate::noise::WorleyNoise;
use crate::opts::{apply_opts, frequency_or_default, Configurable, Opt};

/// Each Worley cell painted one color: picked from `Opt::Colors` when a
/// palette is given, otherwise a saturated hue derived from the cell hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Voronoi {
    base: Null,
    worley: WorleyNoise,
    frequency: f64,
    palette: Vec<Color>,
}

impl Voronoi {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        let mut voronoi = Self {
            base: Null::default(),
            worley: WorleyNoise::new(0),
            frequency: 0.05,
            palette: Vec::new(),
        };
        apply_opts(&mut voronoi, opts);
        voronoi
    }

    /// Hash of the cell owning the pixel.
    pub fn cell_at(&self, x: i32, y: i32) -> u64 {
        self.worley
            .evaluate(x as f64 * self.frequency, y as f64 * self.frequency)
            .cell
    }
}

impl Configurable for Voronoi {
    fn configure(&mut self, opt: &Opt) -> bool {
        match opt {
            Opt::Seed(s) => {
                self.worley = WorleyNoise::new(*s)
                    .with_jitter(self.worley.jitter())
                    .with_metric(self.worley.metric());
                true
            }
            Opt::Frequency(f) => {
                self.frequency = frequency_or_default(*f);
                true
            }
            Opt::WorleyMetric(m) => {
                self.worley.set_metric(*m);
                true
            }
            Opt::WorleyJitter(j) => {
                self.worley.set_jitter(*j);
                true
            }
            Opt::Colors(colors) => {
                self.palette = colors.clone();
                true
            }
            _ => self.base.configure(opt),
        }
    }
}

impl Texture for Voronoi {
    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let cell = self.cell_at(x, y);
        if self.palette.is_empty() {
            let hue = (cell >> 40) as f64 / (1u64 << 24) as f64 * 360.0;
            let value = 0.6 + 0.4 * ((cell >> 32) & 0xFF) as f64 / 255.0;
            Color::from_hsv(hue, 0.7, value)
        } else {
            self.palette[((cell >> 48) as usize) % self.palette.len()]
        }
    }
}
