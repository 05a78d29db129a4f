use super::{Edges, Vec2};

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Shrinks the rectangle by `edges`. Width/height saturate at zero.
    #[inline]
    pub fn inset(self, edges: Edges) -> Self {
        Rect::new(
            self.origin.x + edges.left,
            self.origin.y + edges.top,
            (self.size.x - edges.h()).max(0.0),
            (self.size.y - edges.v()).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── center ────────────────────────────────────────────────────────────

    #[test]
    fn center_of_offset_rect() {
        assert_eq!(r(10.0, 20.0, 100.0, 50.0).center(), Vec2::new(60.0, 45.0));
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_from_each_side() {
        let i = r(0.0, 0.0, 100.0, 100.0).inset(Edges::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(i, r(1.0, 2.0, 96.0, 94.0));
    }

    #[test]
    fn inset_larger_than_rect_saturates() {
        let i = r(0.0, 0.0, 10.0, 10.0).inset(Edges::all(8.0));
        assert_eq!(i.size, Vec2::zero());
        assert!(i.is_empty());
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
