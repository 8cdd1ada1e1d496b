mod layout;
mod plot;
mod room;

#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use plot::Plot;
#[doc(inline)]
pub use room::N_ROOM_KINDS;
#[doc(inline)]
pub use room::Room;
#[doc(inline)]
pub use room::RoomKind;
