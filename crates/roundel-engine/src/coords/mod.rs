//! Coordinate and geometry types shared by the geometry builder, fitter and hit tester.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left of the view
//! - +X right, +Y down (positive angles turn clockwise on screen)

mod corner_radii;
mod edges;
mod rect;
mod vec2;
mod viewport;

pub use corner_radii::CornerRadii;
pub use edges::Edges;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
