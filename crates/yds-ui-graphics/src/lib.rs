//! Pure math/data for drawing in YDS
//!
//! This crate contains color, geometry and typography value types shared by
//! the theme and the widgets. Nothing here knows about invalidation.

mod color;
mod geometry;
mod typography;

pub use color::*;
pub use geometry::*;
pub use typography::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Size};
    pub use crate::typography::TextStyle;
}
