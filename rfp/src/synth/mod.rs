use log::info;
use rand::Rng;
use rand::rngs::SmallRng;
use roomgen::entities::{Layout, N_ROOM_KINDS, Plot, Room, RoomKind};
use roomgen::geometry::Rect;
use serde::{Deserialize, Serialize};
use thousands::Separable;

/// Configuration of the synthetic layout sampler.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    /// Number of layouts to sample
    pub n_samples: usize,
    /// Plot width and depth are drawn uniformly from this half-open range
    pub plot_dim_range: (f64, f64),
    /// Rooms per layout, integer uniform over `[min, max)`
    pub room_count_range: (usize, usize),
    /// Lower bound for room widths and heights
    pub min_room_dim: f64,
    /// Upper bound for room widths (heights) as a fraction of the plot width (depth)
    pub max_room_dim_frac: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            n_samples: 10_000,
            plot_dim_range: (20.0, 100.0),
            room_count_range: (2, 8),
            min_room_dim: 8.0,
            max_room_dim_frac: 0.5,
        }
    }
}

/// Samples random room layouts to train on.
/// Every sampled room fits its plot individually, but rooms are free to overlap
/// each other: layouts go into the training matrix as-is, without repair.
pub struct LayoutSampler {
    pub config: SynthConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

impl LayoutSampler {
    pub fn new(config: SynthConfig, rng: SmallRng) -> Self {
        assert!(config.n_samples > 0);
        assert!(config.plot_dim_range.0 < config.plot_dim_range.1);
        assert!(config.room_count_range.0 < config.room_count_range.1);
        //the smallest possible plot must still admit the smallest possible room
        assert!(config.min_room_dim < config.plot_dim_range.0 * config.max_room_dim_frac);
        Self { config, rng }
    }

    pub fn sample(&mut self) -> Vec<Layout> {
        let layouts = (0..self.config.n_samples)
            .map(|_| self.sample_layout())
            .collect();
        info!(
            "[SYNTH] sampled {} layouts",
            self.config.n_samples.separate_with_commas()
        );
        layouts
    }

    pub fn sample_layout(&mut self) -> Layout {
        let (dim_min, dim_max) = self.config.plot_dim_range;
        let plot = Plot {
            width: self.rng.random_range(dim_min..dim_max),
            depth: self.rng.random_range(dim_min..dim_max),
        };
        let (n_min, n_max) = self.config.room_count_range;
        let n_rooms = self.rng.random_range(n_min..n_max);
        let rooms = (0..n_rooms).map(|_| self.sample_room(&plot)).collect();
        Layout::new(plot, rooms)
    }

    fn sample_room(&mut self, plot: &Plot) -> Room {
        let min_dim = self.config.min_room_dim;
        let frac = self.config.max_room_dim_frac;
        //the cap only binds if the size fraction is configured above 1.0
        let width = f64::min(
            self.rng.random_range(min_dim..plot.width * frac),
            plot.width,
        );
        let height = f64::min(
            self.rng.random_range(min_dim..plot.depth * frac),
            plot.depth,
        );
        let x = self.rng.random_range(0.0..plot.width - width);
        let y = self.rng.random_range(0.0..plot.depth - height);
        let kind = RoomKind::ALL[self.rng.random_range(0..N_ROOM_KINDS)];
        Room {
            rect: Rect {
                x,
                y,
                width,
                height,
            },
            kind,
        }
    }
}
