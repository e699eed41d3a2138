//! Pure math/data for slide-out menu layout
//!
//! Geometry primitives, colors, and layer transforms shared by the menu
//! state machine and host adapters.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{GraphicsLayer, Point, Rect, Size};
}
