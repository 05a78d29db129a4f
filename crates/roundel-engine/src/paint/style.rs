use super::Color;

/// Outline drawn centered on the boundary path.
///
/// `width == 0.0` disables the stroke pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color,
}

impl StrokeStyle {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(0.0, Color::transparent())
    }
}

/// Translucent overlay painted over the shape while it is pressed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HighlightStyle {
    pub color: Color,
    pub enabled: bool,
}

impl HighlightStyle {
    /// Default press overlay: black at 50/255 alpha.
    pub const DEFAULT_ARGB: u32 = 0x3200_0000;

    #[inline]
    pub const fn new(color: Color, enabled: bool) -> Self {
        Self { color, enabled }
    }
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self::new(Color::from_argb(Self::DEFAULT_ARGB), true)
    }
}
