use crate::coords::{CornerRadii, Edges};
use crate::error::ConfigError;
use crate::paint::{Color, HighlightStyle, StrokeStyle};

/// Explicit configuration of a rounded image.
///
/// Defaults: sharp corners, no visible stroke (transparent, width 0), press
/// highlight enabled with [`HighlightStyle::DEFAULT_ARGB`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapeConfig {
    pub radii: CornerRadii,
    pub stroke: StrokeStyle,
    pub highlight: HighlightStyle,
}

impl ShapeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_radii(mut self, radii: CornerRadii) -> Self {
        self.radii = radii;
        self
    }

    pub fn with_stroke(mut self, width: f32, color: Color) -> Self {
        self.stroke = StrokeStyle::new(width, color);
        self
    }

    pub fn with_highlight(mut self, color: Color, enabled: bool) -> Self {
        self.highlight = HighlightStyle::new(color, enabled);
        self
    }

    /// Rejects negative or non-finite radii and stroke width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_radii(&self.radii)?;
        validate_stroke_width(self.stroke.width)
    }
}

pub(crate) fn validate_radii(radii: &CornerRadii) -> Result<(), ConfigError> {
    match radii.first_invalid() {
        Some((field, value)) => Err(ConfigError::InvalidConfiguration { field, value }),
        None => Ok(()),
    }
}

pub(crate) fn validate_padding(padding: &Edges) -> Result<(), ConfigError> {
    match padding.first_invalid() {
        Some((field, value)) => Err(ConfigError::InvalidConfiguration { field, value }),
        None => Ok(()),
    }
}

/// View sizes may be zero or negative (an empty boundary) but must be finite.
pub(crate) fn validate_view_size(width: f32, height: f32) -> Result<(), ConfigError> {
    if !width.is_finite() {
        return Err(ConfigError::InvalidConfiguration { field: "width", value: width });
    }
    if !height.is_finite() {
        return Err(ConfigError::InvalidConfiguration { field: "height", value: height });
    }
    Ok(())
}

pub(crate) fn validate_stroke_width(width: f32) -> Result<(), ConfigError> {
    if width.is_finite() && width >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidConfiguration { field: "stroke_width", value: width })
    }
}
