use super::{Edges, Rect};

/// View size in logical pixels, as last reported by the host.
///
/// The boundary path is built in this space: `(0, 0)` is the top-left corner of
/// the view and `(width, height)` the bottom-right.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Full view rectangle at the origin.
    #[inline]
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Draw bounds: the view rectangle inset by `padding`, never negative in size.
    #[inline]
    pub fn draw_bounds(self, padding: Edges) -> Rect {
        self.rect().inset(padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_sizes_are_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(!Viewport::new(10.0, -1.0).is_valid());
        assert!(!Viewport::new(f32::INFINITY, 10.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }

    #[test]
    fn draw_bounds_without_padding_is_full_view() {
        let vp = Viewport::new(120.0, 80.0);
        assert_eq!(vp.draw_bounds(Edges::default()), Rect::new(0.0, 0.0, 120.0, 80.0));
    }

    #[test]
    fn draw_bounds_applies_padding() {
        let vp = Viewport::new(120.0, 80.0);
        let b = vp.draw_bounds(Edges::new(10.0, 5.0, 20.0, 15.0));
        assert_eq!(b, Rect::new(10.0, 5.0, 90.0, 60.0));
    }
}
