use crate::entities::{Layout, Room};
use crate::io::ext_repr::{ExtLayout, ExtRoom};

/// Exports a layout to its external representation.
pub fn export_layout(layout: &Layout) -> ExtLayout {
    ExtLayout {
        plot_width: layout.plot.width,
        plot_depth: layout.plot.depth,
        rooms: layout.rooms.iter().map(export_room).collect(),
    }
}

pub fn export_room(room: &Room) -> ExtRoom {
    ExtRoom {
        x: room.rect.x,
        y: room.rect.y,
        width: room.rect.width,
        height: room.rect.height,
        kind: room.kind.label().to_string(),
    }
}
