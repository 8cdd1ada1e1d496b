use crate::entities::{Layout, Plot, Room};
use crate::geometry::Rect;
use crate::io::ext_repr::{ExtLayout, ExtRoom};
use anyhow::{Context, Result};
use log::warn;

/// Converts an external layout into an internal [`Layout`].
///
/// Room tags are validated against the closed set and sizes must be positive.
/// Rooms lying (partially) outside the plot are accepted with a warning, since the
/// repair engine only repositions rooms that overlap another room.
pub fn import_layout(ext_layout: &ExtLayout) -> Result<Layout> {
    let plot = Plot::try_new(ext_layout.plot_width, ext_layout.plot_depth)?;
    let rooms = ext_layout
        .rooms
        .iter()
        .enumerate()
        .map(|(i, ext_room)| {
            import_room(ext_room).with_context(|| format!("could not import room {i}"))
        })
        .collect::<Result<Vec<Room>>>()?;

    let bounds = plot.bounds();
    for (i, room) in rooms.iter().enumerate() {
        if !bounds.almost_contains(&room.rect) {
            warn!(
                "room {i} does not fit the plot: {:?} vs {:?}",
                room.rect, bounds
            );
        }
    }

    Ok(Layout::new(plot, rooms))
}

pub fn import_room(ext_room: &ExtRoom) -> Result<Room> {
    let kind = ext_room.kind.parse()?;
    let rect = Rect::try_new(ext_room.x, ext_room.y, ext_room.width, ext_room.height)?;
    Ok(Room { rect, kind })
}
