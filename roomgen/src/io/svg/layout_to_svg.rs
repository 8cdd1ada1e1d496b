use crate::entities::{Layout, RoomKind};
use crate::io::export;
use crate::io::ext_repr::{ExtLayout, ExtRoom};
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

pub fn layout_to_svg(layout: &Layout, options: SvgDrawOptions) -> Document {
    ext_layout_to_svg(&export::export_layout(layout), options)
}

/// Draws a layout from its external representation. Rooms are filled by the
/// per-kind palette of the theme; unknown tags are drawn in the fallback fill
/// instead of being rejected, so any stored layout file can be rendered.
pub fn ext_layout_to_svg(ext_layout: &ExtLayout, options: SvgDrawOptions) -> Document {
    let (plot_width, plot_depth) = (ext_layout.plot_width, ext_layout.plot_depth);
    let theme = &options.theme;

    let stroke_width = f64::min(plot_width, plot_depth) * 0.001 * theme.stroke_width_multiplier;

    //draw plot
    let plot_group = {
        let title = Title::new(format!("plot, {plot_width} x {plot_depth}"));
        let outline = Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", plot_width)
            .set("height", plot_depth)
            .set("fill", format!("{}", theme.plot_fill))
            .set("stroke", "black")
            .set("stroke-width", 2.0 * stroke_width);
        Group::new().set("id", "plot").add(outline).add(title)
    };

    //draw rooms
    let mut rooms_group = Group::new().set("id", "rooms");
    for (i, ext_room) in ext_layout.rooms.iter().enumerate() {
        //svg y-axis points down, layout y-axis points up
        let svg_y = plot_depth - (ext_room.y + ext_room.height);
        let fill = theme.room_fill(RoomKind::from_label(&ext_room.kind));

        let title = Title::new(format!(
            "room {i}, type: {}, x: {:.3}, y: {:.3}, width: {:.3}, height: {:.3}",
            ext_room.kind, ext_room.x, ext_room.y, ext_room.width, ext_room.height
        ));
        let rect = Rectangle::new()
            .set("x", ext_room.x)
            .set("y", svg_y)
            .set("width", ext_room.width)
            .set("height", ext_room.height)
            .set("fill", format!("{fill}"))
            .set("fill-opacity", format!("{}", theme.room_fill_opacity))
            .set("stroke", "black")
            .set("stroke-width", stroke_width)
            .add(title);
        rooms_group = rooms_group.add(rect);

        if options.room_labels {
            rooms_group = rooms_group.add(room_label(ext_room, svg_y));
        }
    }

    //pad the view box so the plot outline is not clipped
    let vbox = (
        -0.025 * plot_width,
        -0.025 * plot_depth,
        1.05 * plot_width,
        1.05 * plot_depth,
    );

    Document::new()
        .set("viewBox", vbox)
        .add(plot_group)
        .add(rooms_group)
}

fn room_label(ext_room: &ExtRoom, svg_y: f64) -> Text {
    let font_size = f64::min(ext_room.width, ext_room.height) * 0.2;
    Text::new(ext_room.kind.clone())
        .set("x", ext_room.x + ext_room.width / 2.0)
        .set("y", svg_y + ext_room.height / 2.0)
        .set("font-size", font_size)
        .set("font-family", "monospace")
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle")
}
