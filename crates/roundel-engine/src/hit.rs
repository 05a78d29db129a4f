//! Pointer hit-testing for the rounded image.
//!
//! The touchable region is the circle inscribed in the draw bounds: a point is
//! inside iff its distance to the bounds center is at most `width / 2`. The
//! per-corner rounding of the visible boundary is deliberately ignored, so a
//! square-cornered image still only reacts inside its inscribed circle.

use crate::coords::{Rect, Vec2};

/// Returns `true` if `point` lies within the inscribed-circle touch region of `bounds`.
///
/// Points exactly on the circle count as inside.
pub fn is_inside(bounds: Rect, point: Vec2) -> bool {
    let distance = point.distance(bounds.center());
    let inside = distance <= bounds.width() * 0.5;
    log::trace!("hit test {:?} in {:?}: distance {} -> {}", point, bounds, distance, inside);
    inside
}
