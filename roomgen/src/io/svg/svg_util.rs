use crate::entities::{N_ROOM_KINDS, RoomKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Write the category tag in the center of every room
    #[serde(default)]
    pub room_labels: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            room_labels: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub plot_fill: Color,
    ///Fill per room kind, indexed by [`RoomKind::feature_index`]
    pub kind_fill: [Color; N_ROOM_KINDS],
    ///Fill for tags outside the closed kind set
    pub fallback_fill: Color,
    pub room_fill_opacity: f64,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::PRIMARY
    }
}

impl SvgLayoutTheme {
    pub const PRIMARY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        plot_fill: Color(0xF5, 0xF5, 0xF5),
        kind_fill: [
            Color(0x00, 0x00, 0xFF), // BEDROOM, BLUE
            Color(0x00, 0x80, 0x00), // BATHROOM, GREEN
            Color(0xFF, 0x00, 0x00), // KITCHEN, RED
            Color(0xFF, 0xFF, 0x00), // LIVING ROOM, YELLOW
        ],
        fallback_fill: Color(0x80, 0x80, 0x80), // GRAY
        room_fill_opacity: 0.5,
    };

    pub const MUTED: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        plot_fill: Color(0xFA, 0xFA, 0xFA),
        kind_fill: [
            Color(0x66, 0x88, 0xCC), // BEDROOM
            Color(0x66, 0xAA, 0x66), // BATHROOM
            Color(0xCC, 0x66, 0x66), // KITCHEN
            Color(0xCC, 0xCC, 0x66), // LIVING ROOM
        ],
        fallback_fill: Color(0x99, 0x99, 0x99),
        room_fill_opacity: 0.7,
    };

    /// Fill color for a room tag; tags outside the closed set get the fallback fill.
    pub fn room_fill(&self, kind: Option<RoomKind>) -> Color {
        match kind {
            Some(kind) => self.kind_fill[kind.feature_index()],
            None => self.fallback_fill,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<String> for Color {
    fn from(mut s: String) -> Self {
        if s.starts_with('#') {
            s.remove(0);
        }
        let r = u8::from_str_radix(&s[0..2], 16).unwrap();
        let g = u8::from_str_radix(&s[2..4], 16).unwrap();
        let b = u8::from_str_radix(&s[4..6], 16).unwrap();
        Color(r, g, b)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::from(s.to_owned())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::from(s))
    }
}
