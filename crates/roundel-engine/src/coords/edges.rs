/// Content padding between the view edge and the draw bounds (logical pixels).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Edges {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Edges {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub const fn all(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Returns the first side that is negative or non-finite, named by field.
    pub fn first_invalid(&self) -> Option<(&'static str, f32)> {
        [
            ("padding_left", self.left),
            ("padding_top", self.top),
            ("padding_right", self.right),
            ("padding_bottom", self.bottom),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite() || *v < 0.0)
    }

    /// Total horizontal padding.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}
