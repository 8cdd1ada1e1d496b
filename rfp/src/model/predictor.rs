use crate::model::dataset::{N_FEATURES, feature_row};
use crate::model::trainer::GeometryModel;
use anyhow::{Context, Result, ensure};
use log::debug;
use ndarray::{Array1, Array2};
use roomgen::entities::{Layout, Plot, Room, RoomKind};
use roomgen::geometry::Rect;
use roomgen::repair::{RepairConfig, repair_layout};

/// Plot dimension range accepted in prediction requests (inclusive).
pub const PLOT_DIM_RANGE: (f64, f64) = (20.0, 100.0);
/// Room count range accepted in prediction requests (inclusive).
pub const ROOM_COUNT_RANGE: (usize, usize) = (2, 8);

/// A request for a predicted layout: the plot plus the kind of every desired room.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRequest {
    pub plot: Plot,
    pub kinds: Vec<RoomKind>,
}

impl LayoutRequest {
    /// Validates the request against the ranges the model was trained for.
    pub fn try_new(plot_width: f64, plot_depth: f64, kinds: Vec<RoomKind>) -> Result<Self> {
        let (dim_min, dim_max) = PLOT_DIM_RANGE;
        ensure!(
            (dim_min..=dim_max).contains(&plot_width) && (dim_min..=dim_max).contains(&plot_depth),
            "plot dimensions must be between {dim_min} and {dim_max}, got {plot_width} x {plot_depth}"
        );
        let (n_min, n_max) = ROOM_COUNT_RANGE;
        ensure!(
            (n_min..=n_max).contains(&kinds.len()),
            "number of rooms must be between {n_min} and {n_max}, got {}",
            kinds.len()
        );
        let plot = Plot::try_new(plot_width, plot_depth)?;
        Ok(LayoutRequest { plot, kinds })
    }
}

/// Predicts a layout for `request` and repairs it into a non-overlapping one.
///
/// The raw forest predictions are clamped into the plot before repair: sizes are
/// capped at the plot dimensions first, positions are then clamped using the
/// already-capped sizes, so the draft handed to the repair engine is in bounds.
pub fn predict_layout(
    model: &GeometryModel,
    request: &LayoutRequest,
    repair_config: &RepairConfig,
) -> Result<Layout> {
    let plot = request.plot;
    let n_rooms = request.kinds.len();

    let mut features = Array2::zeros((n_rooms, N_FEATURES));
    for (i, kind) in request.kinds.iter().enumerate() {
        let row = feature_row(&plot, n_rooms, *kind);
        features.row_mut(i).assign(&Array1::from_iter(row));
    }
    let scaled = model.scaler.transform(&features);
    let [xs, ys, widths, heights] = model.forests().map(|forest| forest.predict(&scaled));

    let mut rooms = Vec::with_capacity(n_rooms);
    for (i, &kind) in request.kinds.iter().enumerate() {
        let width = f64::min(widths[i], plot.width);
        let height = f64::min(heights[i], plot.depth);
        let x = xs[i].clamp(0.0, plot.width - width);
        let y = ys[i].clamp(0.0, plot.depth - height);
        let rect = Rect::try_new(x, y, width, height)
            .with_context(|| format!("model predicted a degenerate room {i}"))?;
        rooms.push(Room { rect, kind });
    }

    let draft = Layout::new(plot, rooms);
    debug!(
        "[PREDICT] draft layout has {} overlapping pair(s)",
        draft.overlapping_pairs().len()
    );
    let repaired = repair_layout(&draft, repair_config)?;
    Ok(repaired)
}
