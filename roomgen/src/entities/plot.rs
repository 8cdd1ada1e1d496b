use crate::geometry::Rect;
use anyhow::Result;
use anyhow::ensure;

/// The fixed outer bounding rectangle within which all rooms of a [`Layout`](crate::entities::Layout) must fit.
/// Its lower-left corner is the origin of the layout's coordinate system.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Plot {
    pub width: f64,
    pub depth: f64,
}

impl Plot {
    pub fn try_new(width: f64, depth: f64) -> Result<Self> {
        ensure!(
            width > 0.0 && depth > 0.0,
            "invalid plot, width: {width}, depth: {depth} (both must be positive)"
        );
        Ok(Plot { width, depth })
    }

    /// The plot as a rectangle with its lower-left corner at the origin.
    pub fn bounds(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.depth,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.depth
    }
}
