use ndarray::{Array1, Array2, Axis};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use roomgen::entities::{Layout, Plot, RoomKind};

/// Feature columns: plot width, plot depth, number of rooms, room kind index.
pub const N_FEATURES: usize = 4;
/// Only the leading numerical columns are standardized; the kind index passes through raw.
pub const N_SCALED_FEATURES: usize = 3;
/// Regression targets: x, y, width, height of a room.
pub const N_TARGETS: usize = 4;

pub const TARGET_NAMES: [&str; N_TARGETS] = ["x", "y", "width", "height"];

/// One feature row per room: the descriptors of its plot plus its own kind.
pub fn feature_row(plot: &Plot, n_rooms: usize, kind: RoomKind) -> [f64; N_FEATURES] {
    [
        plot.width,
        plot.depth,
        n_rooms as f64,
        kind.feature_index() as f64,
    ]
}

/// The training matrix: one row per room across all sampled layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// `(n_rows, N_FEATURES)` feature matrix
    pub features: Array2<f64>,
    /// `(n_rows, N_TARGETS)` target matrix, columns ordered as [`TARGET_NAMES`]
    pub targets: Array2<f64>,
}

impl Dataset {
    pub fn from_layouts(layouts: &[Layout]) -> Self {
        let n_rows = layouts.iter().map(|l| l.rooms.len()).sum();
        let mut features = Array2::zeros((n_rows, N_FEATURES));
        let mut targets = Array2::zeros((n_rows, N_TARGETS));

        let mut row = 0;
        for layout in layouts {
            for room in &layout.rooms {
                let f_row = feature_row(&layout.plot, layout.rooms.len(), room.kind);
                features.row_mut(row).assign(&Array1::from_iter(f_row));
                targets.row_mut(row).assign(&Array1::from_iter([
                    room.rect.x,
                    room.rect.y,
                    room.rect.width,
                    room.rect.height,
                ]));
                row += 1;
            }
        }

        Dataset { features, targets }
    }

    pub fn n_rows(&self) -> usize {
        self.features.nrows()
    }

    pub fn target_column(&self, target: usize) -> Array1<f64> {
        self.targets.column(target).to_owned()
    }
}

/// A train/holdout partition of row indices, shared by all four targets so their
/// holdout scores are comparable.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub train: Vec<usize>,
    pub holdout: Vec<usize>,
}

impl Split {
    /// Shuffles `0..n_rows` and cuts off the trailing `holdout_frac` as holdout.
    pub fn new(n_rows: usize, holdout_frac: f64, rng: &mut SmallRng) -> Self {
        assert!((0.0..1.0).contains(&holdout_frac));
        let mut indices = (0..n_rows).collect::<Vec<_>>();
        indices.shuffle(rng);
        let n_holdout = (n_rows as f64 * holdout_frac).round() as usize;
        let holdout = indices.split_off(n_rows - n_holdout);
        Split {
            train: indices,
            holdout,
        }
    }
}

/// Copies the given rows out of a matrix.
pub fn select_rows(matrix: &Array2<f64>, indices: &[usize]) -> Array2<f64> {
    matrix.select(Axis(0), indices)
}

/// Copies the given elements out of a vector.
pub fn select_elems(vector: &Array1<f64>, indices: &[usize]) -> Array1<f64> {
    vector.select(Axis(0), indices)
}
