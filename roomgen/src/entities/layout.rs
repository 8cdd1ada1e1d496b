use crate::entities::Plot;
use crate::entities::Room;
use crate::geometry::geo_traits::CollidesWith;
use itertools::Itertools;

/// An ordered collection of rooms on one plot.
///
/// Room order is significant for [`repair_layout`](crate::repair::repair_layout):
/// earlier rooms act as anchors and are never moved to clear an overlap with a
/// later room. It carries no other meaning.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub plot: Plot,
    pub rooms: Vec<Room>,
}

impl Layout {
    pub fn new(plot: Plot, rooms: Vec<Room>) -> Self {
        Layout { plot, rooms }
    }

    pub fn is_overlap_free(&self) -> bool {
        self.rooms
            .iter()
            .tuple_combinations()
            .all(|(a, b)| !a.rect.collides_with(&b.rect))
    }

    /// All index pairs `(i, j)` with `i < j` whose rooms currently overlap.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        self.rooms
            .iter()
            .enumerate()
            .tuple_combinations()
            .filter(|((_, a), (_, b))| a.rect.collides_with(&b.rect))
            .map(|((i, _), (j, _))| (i, j))
            .collect_vec()
    }

    /// Summed area of all rooms. Can exceed the plot area while rooms overlap.
    pub fn room_area(&self) -> f64 {
        self.rooms.iter().map(|room| room.rect.area()).sum()
    }
}
