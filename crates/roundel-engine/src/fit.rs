//! Image-to-shape fitting.
//!
//! Maps image pixel space into view space with a uniform scale plus translation.
//! The scale is picked from the image orientation: portrait images match the
//! bounds width, landscape and square images match the bounds height. The scaled
//! image is then centered on the axis that overflows.

use crate::coords::Rect;

/// Uniform scale + translation from image pixels to view pixels.
///
/// `view = image * scale + translate`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SamplingTransform {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl SamplingTransform {
    #[inline]
    pub const fn new(scale: f32, translate_x: f32, translate_y: f32) -> Self {
        Self { scale, translate_x, translate_y }
    }
}

/// Computes the sampling transform for an `image_width` x `image_height` image
/// drawn into `bounds`.
///
/// Both image dimensions must be non-zero; `PixelBuffer` guarantees this.
pub fn fit_image(bounds: Rect, image_width: u32, image_height: u32) -> SamplingTransform {
    let iw = image_width as f32;
    let ih = image_height as f32;

    if image_width < image_height {
        let scale = bounds.width() / iw;
        let dy = bounds.top() + (bounds.height() - ih * scale) * 0.5;
        SamplingTransform::new(scale, bounds.left(), dy)
    } else {
        let scale = bounds.height() / ih;
        let dx = bounds.left() + (bounds.width() - iw * scale) * 0.5;
        let dy = bounds.top() + (bounds.height() - ih * scale) * 0.5;
        SamplingTransform::new(scale, dx, dy)
    }
}
