use serde::{Deserialize, Serialize};

/// External representation of a [`Layout`](crate::entities::Layout).
/// Serialized as a JSON object with all numeric fields as floating point.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayout {
    /// Horizontal extent of the plot
    pub plot_width: f64,
    /// Vertical extent of the plot
    pub plot_depth: f64,
    /// One object per room, in layout order
    pub rooms: Vec<ExtRoom>,
}

/// External representation of a [`Room`](crate::entities::Room).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRoom {
    /// x-coordinate of the lower-left corner
    pub x: f64,
    /// y-coordinate of the lower-left corner
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Room category tag. Validated against the closed set of
    /// [`RoomKind`](crate::entities::RoomKind)s on import; unknown tags are kept
    /// here so that any stored layout can still be drawn.
    #[serde(rename = "type")]
    pub kind: String,
}
