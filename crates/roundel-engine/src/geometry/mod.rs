//! Boundary geometry for the rounded image.
//!
//! Responsibilities:
//! - path representation (lines + elliptical arcs, one closed contour)
//! - the boundary construction from viewport size and per-corner radii
//! - cubic Bézier export of the corner arcs for rasterizers

mod boundary;
mod path;

pub use boundary::{build_boundary, CornerOvals};
pub use path::{ArcSegment, BoundaryPath, LineSegment, PathBuilder, Segment};
