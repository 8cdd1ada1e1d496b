pub mod geo_traits;

mod rect;

#[doc(inline)]
pub use rect::Rect;
