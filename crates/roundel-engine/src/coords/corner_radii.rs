/// Per-corner radii for the rounded image boundary (logical pixels).
///
/// A radius of `0.0` is a sharp corner: the boundary emits no arc there.
/// Radii are not clamped against the edge lengths; adjacent radii that sum past
/// an edge make the corner arcs overlap.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Returns the first radius that is negative or non-finite, named by corner.
    pub fn first_invalid(&self) -> Option<(&'static str, f32)> {
        [
            ("top_left", self.top_left),
            ("top_right", self.top_right),
            ("bottom_right", self.bottom_right),
            ("bottom_left", self.bottom_left),
        ]
        .into_iter()
        .find(|(_, r)| !r.is_finite() || *r < 0.0)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.first_invalid().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_invalid_names_the_corner() {
        let radii = CornerRadii::new(4.0, 4.0, -1.0, 4.0);
        assert_eq!(radii.first_invalid(), Some(("bottom_right", -1.0)));
        assert!(!radii.is_valid());
    }

    #[test]
    fn nan_is_invalid() {
        assert!(!CornerRadii::new(f32::NAN, 0.0, 0.0, 0.0).is_valid());
    }

    #[test]
    fn zero_is_valid() {
        assert!(CornerRadii::zero().is_valid());
    }
}
