//! Screen geometry for window placement
//!
//! Positions are in CSS pixels relative to the desktop area's top-left.

mod vec2;
mod rect;
mod size;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
