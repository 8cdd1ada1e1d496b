use crate::entities::Layout;
use crate::geometry::geo_traits::CollidesWith;
use crate::util::assertions;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration of [`repair_layout`].
#[derive(Clone, Debug, Copy, Serialize, Deserialize, PartialEq)]
pub struct RepairConfig {
    /// Maximum number of nudges applied to a single (anchor, mover) pair before the
    /// repair is abandoned with [`RepairError::LayoutUnresolvable`].
    pub max_nudges_per_pair: usize,
}

impl Default for RepairConfig {
    fn default() -> Self {
        RepairConfig {
            max_nudges_per_pair: 500,
        }
    }
}

/// Ways in which [`repair_layout`] can fail.
/// Every failure is fatal to the repair call; the caller decides whether to skip,
/// re-predict or abort.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepairError {
    /// A room with a non-positive (or non-finite) size reached the repair engine.
    #[error("room {index} has a non-positive size: {width} x {height}")]
    InvalidRectangle {
        index: usize,
        width: f64,
        height: f64,
    },
    /// A room is wider or deeper than the plot itself. Its position cannot be
    /// clamped into the plot, the clamp bounds would be inverted.
    #[error(
        "room {index} ({width} x {height}) cannot fit in the plot ({plot_width} x {plot_depth})"
    )]
    DegenerateBounds {
        index: usize,
        width: f64,
        height: f64,
        plot_width: f64,
        plot_depth: f64,
    },
    /// A pair of rooms could not be separated within the configured nudge cap.
    #[error("rooms {anchor} and {mover} still overlap after {cap} nudges")]
    LayoutUnresolvable {
        anchor: usize,
        mover: usize,
        cap: usize,
    },
}

/// Separates overlapping rooms by nudging later-indexed rooms until they no longer
/// overlap any earlier-indexed one, keeping every room inside the plot.
///
/// The procedure is a single deterministic sweep over all ordered pairs:
/// for every anchor `i` (ascending) and every mover `j > i` (ascending), while the
/// pair overlaps, the mover is shifted right by half the anchor's width; when it
/// would stick out past the right plot edge it is wrapped back to `x = 0` and
/// shifted up by half the anchor's height; after every nudge its position is
/// clamped into the plot. Anchors are never moved, so earlier rooms take priority
/// over later ones.
///
/// One sweep is not a fixed point: a nudge of room `j` can reintroduce an overlap
/// with a room that was already cleared against an earlier anchor, and such pairs
/// are not revisited. Callers that need a guarantee should check
/// [`Layout::is_overlap_free`] on the result.
///
/// The input layout is left untouched; the repaired layout is returned as a new
/// value with identical room order, kinds and sizes.
pub fn repair_layout(layout: &Layout, config: &RepairConfig) -> Result<Layout, RepairError> {
    let plot = layout.plot;
    for (index, room) in layout.rooms.iter().enumerate() {
        let (width, height) = (room.rect.width, room.rect.height);
        if !(width > 0.0 && height > 0.0) {
            return Err(RepairError::InvalidRectangle {
                index,
                width,
                height,
            });
        }
        if width > plot.width || height > plot.depth {
            return Err(RepairError::DegenerateBounds {
                index,
                width,
                height,
                plot_width: plot.width,
                plot_depth: plot.depth,
            });
        }
    }

    let mut repaired = layout.clone();
    let n = repaired.rooms.len();
    let mut total_nudges = 0;

    for i in 0..n {
        //the anchor is never moved while resolving pairs (i, j), its rect can be copied out
        let anchor = repaired.rooms[i].rect;
        for j in (i + 1)..n {
            let mut pair_nudges = 0;
            while repaired.rooms[j].rect.collides_with(&anchor) {
                if pair_nudges == config.max_nudges_per_pair {
                    return Err(RepairError::LayoutUnresolvable {
                        anchor: i,
                        mover: j,
                        cap: config.max_nudges_per_pair,
                    });
                }
                let mover = &mut repaired.rooms[j].rect;
                mover.x += anchor.width * 0.5;
                if mover.x + mover.width > plot.width {
                    //out of horizontal space, wrap to the left edge one shelf up
                    mover.x = 0.0;
                    mover.y += anchor.height * 0.5;
                }
                mover.x = mover.x.clamp(0.0, plot.width - mover.width);
                mover.y = mover.y.clamp(0.0, plot.depth - mover.height);
                pair_nudges += 1;
            }
            total_nudges += pair_nudges;
        }
    }

    debug!(
        "[REPAIR] separated {} rooms with {} nudges",
        n, total_nudges
    );
    //rooms that never overlapped anything are left exactly where they were,
    //even outside the plot, so in-bounds-ness is only guaranteed for in-bounds inputs
    debug_assert!(assertions::layouts_have_same_footprint(layout, &repaired));

    Ok(repaired)
}
