use crate::geometry::Rect;
use anyhow::anyhow;
use std::fmt;
use std::str::FromStr;

/// A room: an axis-aligned rectangle with a category tag.
/// The geometry of a room is independent of its kind.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Room {
    pub rect: Rect,
    pub kind: RoomKind,
}

/// Number of room categories in the closed set.
pub const N_ROOM_KINDS: usize = 4;

/// Category of a [`Room`]. Closed set; external inputs are validated against it
/// at the boundaries (import, prediction requests).
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash)]
pub enum RoomKind {
    Bedroom,
    Bathroom,
    Kitchen,
    LivingRoom,
}

impl RoomKind {
    pub const ALL: [RoomKind; N_ROOM_KINDS] = [
        RoomKind::Bedroom,
        RoomKind::Bathroom,
        RoomKind::Kitchen,
        RoomKind::LivingRoom,
    ];

    /// Stable index used to encode the kind as a regression feature.
    pub fn feature_index(&self) -> usize {
        match self {
            RoomKind::Bedroom => 0,
            RoomKind::Bathroom => 1,
            RoomKind::Kitchen => 2,
            RoomKind::LivingRoom => 3,
        }
    }

    /// Tag used in the persisted layout format.
    pub fn label(&self) -> &'static str {
        match self {
            RoomKind::Bedroom => "bedroom",
            RoomKind::Bathroom => "bathroom",
            RoomKind::Kitchen => "kitchen",
            RoomKind::LivingRoom => "living_room",
        }
    }

    pub fn from_label(label: &str) -> Option<RoomKind> {
        RoomKind::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoomKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomKind::from_label(s).ok_or_else(|| {
            anyhow!(
                "unknown room type: {s}, expected one of {:?}",
                RoomKind::ALL.map(|kind| kind.label())
            )
        })
    }
}
