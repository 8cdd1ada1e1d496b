use crate::entities::Layout;
use crate::geometry::Rect;
use crate::geometry::geo_traits::CollidesWith;
use crate::util::FPA;
use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

//Various checks to verify the correctness of layouts.
//Used in debug_assert!() blocks and tests.

pub fn layout_is_overlap_free(layout: &Layout) -> bool {
    let mut overlap_free = true;
    for ((i, a), (j, b)) in layout.rooms.iter().enumerate().tuple_combinations() {
        if a.rect.collides_with(&b.rect) {
            error!(
                "rooms {i} and {j} overlap, intersection: {:?}",
                Rect::intersection(a.rect, b.rect)
            );
            overlap_free = false;
        }
    }
    overlap_free
}

pub fn rooms_within_plot(layout: &Layout) -> bool {
    let bounds = layout.plot.bounds();
    let mut within = true;
    for (i, room) in layout.rooms.iter().enumerate() {
        if !bounds.almost_contains(&room.rect) {
            error!("room {i} exceeds the plot: {:?} vs {:?}", room.rect, bounds);
            within = false;
        }
    }
    within
}

/// Checks that both layouts contain the same rooms (kind and size) in the same
/// order, ignoring their positions.
pub fn layouts_have_same_footprint(a: &Layout, b: &Layout) -> bool {
    a.plot == b.plot
        && a.rooms.len() == b.rooms.len()
        && a.rooms.iter().zip(b.rooms.iter()).all(|(ra, rb)| {
            ra.kind == rb.kind
                && approx_eq!(f64, ra.rect.width, rb.rect.width)
                && approx_eq!(f64, ra.rect.height, rb.rect.height)
        })
}

/// Checks that every room coordinate in `a` matches `b` within floating point tolerance.
pub fn layouts_match(a: &Layout, b: &Layout) -> bool {
    layouts_have_same_footprint(a, b)
        && a.rooms.iter().zip(b.rooms.iter()).all(|(ra, rb)| {
            FPA(ra.rect.x) == FPA(rb.rect.x) && FPA(ra.rect.y) == FPA(rb.rect.y)
        })
}
