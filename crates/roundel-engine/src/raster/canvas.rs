use tiny_skia::{
    ColorU8, FillRule, FilterQuality, IntSize, Pattern, Pixmap, SpreadMode, Stroke, Transform,
};

use crate::geometry::{BoundaryPath, Segment};
use crate::paint::{Color, ImagePaint, Paint};
use crate::pixel_buffer::{PixelBuffer, PixelBufferError, Rgba8};
use crate::scene::{DrawCmd, DrawList};

/// Premultiplied RGBA8 render target in view pixels, transparent when created.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Fails for zero dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        Pixmap::new(width, height)
            .map(|pixmap| Self { pixmap })
            .ok_or(PixelBufferError::EmptyDimensions { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied color at `(x, y)`, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let p = self.pixmap.pixel(x, y)?;
        let unit = |v: u8| v as f32 / 255.0;
        Some(Color::from_premul(unit(p.red()), unit(p.green()), unit(p.blue()), unit(p.alpha())))
    }

    /// Executes every command of `list` in paint order.
    pub fn execute(&mut self, list: &mut DrawList<'_>) {
        for item in list.iter_in_paint_order() {
            self.draw(&item.cmd);
        }
    }

    /// Executes a single command. Empty paths draw nothing.
    pub fn draw(&mut self, cmd: &DrawCmd<'_>) {
        let Some(path) = skia_path(cmd.path()) else {
            log::trace!("skipping draw of an empty boundary");
            return;
        };
        match cmd {
            DrawCmd::FillPath { paint: Paint::Solid(color), .. } => {
                let paint = solid_paint(*color);
                self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
            DrawCmd::FillPath { paint: Paint::Image(image), .. } => {
                self.fill_image(&path, image);
            }
            DrawCmd::StrokePath { stroke, .. } => {
                let paint = solid_paint(stroke.color);
                let outline = Stroke { width: stroke.width, ..Stroke::default() };
                self.pixmap.stroke_path(&path, &paint, &outline, Transform::identity(), None);
            }
        }
    }

    fn fill_image(&mut self, path: &tiny_skia::Path, image: &ImagePaint<'_>) {
        let Some(source) = source_pixmap(image.image) else {
            log::warn!("cannot upload {}x{} image", image.image.width(), image.image.height());
            return;
        };
        let t = image.transform;
        let mut paint = tiny_skia::Paint::default();
        paint.anti_alias = true;
        paint.shader = Pattern::new(
            source.as_ref(),
            SpreadMode::Pad,
            FilterQuality::Nearest,
            1.0,
            Transform::from_row(t.scale, 0.0, 0.0, t.scale, t.translate_x, t.translate_y),
        );
        self.pixmap.fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Straight-alpha RGBA8 pixels, row-major.
    pub fn to_rgba8(&self) -> Vec<Rgba8> {
        self.pixmap
            .pixels()
            .iter()
            .map(|p| {
                let c = p.demultiply();
                Rgba8::new(c.red(), c.green(), c.blue(), c.alpha())
            })
            .collect()
    }

    /// Straight-alpha RGBA8 bytes, ready for an encoder.
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_rgba8()).to_vec()
    }

    pub fn to_pixel_buffer(&self) -> Result<PixelBuffer, PixelBufferError> {
        PixelBuffer::new(self.width(), self.height(), self.to_rgba8())
    }
}

/// Converts the boundary into a tiny-skia path, arcs as cubics.
fn skia_path(path: &BoundaryPath) -> Option<tiny_skia::Path> {
    let start = path.start()?;
    let mut pb = tiny_skia::PathBuilder::new();
    pb.move_to(start.x, start.y);
    for segment in path.segments() {
        match segment {
            Segment::Line(line) => pb.line_to(line.to.x, line.to.y),
            Segment::Arc(arc) => {
                for [c1, c2, end] in arc.to_cubics() {
                    pb.cubic_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
                }
            }
        }
    }
    if path.is_closed() {
        pb.close();
    }
    pb.finish()
}

fn solid_paint(color: Color) -> tiny_skia::Paint<'static> {
    let (r, g, b, a) = color.to_straight();
    let unit = |v: f32| v.clamp(0.0, 1.0);
    let mut paint = tiny_skia::Paint::default();
    paint.set_color(
        tiny_skia::Color::from_rgba(unit(r), unit(g), unit(b), unit(a))
            .unwrap_or(tiny_skia::Color::TRANSPARENT),
    );
    paint.anti_alias = true;
    paint
}

/// Premultiplies the host's straight-alpha pixels into a pattern source.
fn source_pixmap(image: &PixelBuffer) -> Option<Pixmap> {
    let size = IntSize::from_wh(image.width(), image.height())?;
    let data = image
        .as_bytes()
        .chunks_exact(4)
        .flat_map(|px| {
            let c = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Pixmap::from_vec(data, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShapeConfig;
    use crate::coords::CornerRadii;
    use crate::input::PointerEvent;
    use crate::view::RoundedImage;

    const RED: Rgba8 = Rgba8::new(255, 0, 0, 255);
    const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);

    fn red() -> Color {
        Color::from_srgb_u8(255, 0, 0, 255)
    }

    fn render(shape: &mut RoundedImage, image: Option<&PixelBuffer>, w: u32, h: u32) -> Canvas {
        let mut list = shape.frame(image);
        let mut canvas = Canvas::new(w, h).unwrap();
        canvas.execute(&mut list);
        canvas
    }

    fn circle(size: f32) -> RoundedImage {
        let cfg = ShapeConfig::new().with_radii(CornerRadii::all(size / 2.0));
        let mut shape = RoundedImage::new(cfg).unwrap();
        shape.resize(size, size).unwrap();
        shape
    }

    // ── target ────────────────────────────────────────────────────────────

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert_eq!(
            Canvas::new(0, 4).unwrap_err(),
            PixelBufferError::EmptyDimensions { width: 0, height: 4 }
        );
    }

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(3, 2).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (3, 2));
        assert_eq!(canvas.pixel(2, 1), Some(Color::transparent()));
        assert_eq!(canvas.pixel(3, 0), None);
    }

    // ── image fill ────────────────────────────────────────────────────────

    #[test]
    fn circle_clips_image_corners() {
        let mut shape = circle(32.0);
        let img = PixelBuffer::filled(8, 8, RED).unwrap();
        let canvas = render(&mut shape, Some(&img), 32, 32);

        assert_eq!(canvas.pixel(0, 0), Some(Color::transparent()));
        assert_eq!(canvas.pixel(31, 31), Some(Color::transparent()));
        assert_eq!(canvas.pixel(16, 16), Some(red()));
    }

    #[test]
    fn sharp_corners_keep_corner_pixels() {
        let mut shape = RoundedImage::new(ShapeConfig::default()).unwrap();
        shape.resize(16.0, 16.0).unwrap();
        let img = PixelBuffer::filled(4, 4, RED).unwrap();
        let canvas = render(&mut shape, Some(&img), 16, 16);
        assert_eq!(canvas.pixel(0, 0), Some(red()));
        assert_eq!(canvas.pixel(15, 15), Some(red()));
    }

    #[test]
    fn overflow_past_the_image_repeats_edge_pixels() {
        // A square image in a 2:1 view is scaled to the view height, leaving 5 px
        // on each side that sample past the image extent.
        let mut shape = RoundedImage::new(ShapeConfig::default()).unwrap();
        shape.resize(20.0, 10.0).unwrap();
        let blue = Rgba8::new(0, 0, 255, 255);
        let img = PixelBuffer::new(2, 2, vec![RED, blue, RED, blue]).unwrap();
        let canvas = render(&mut shape, Some(&img), 20, 10);

        assert_eq!(canvas.pixel(0, 5), Some(red()));
        assert_eq!(canvas.pixel(19, 5), Some(Color::from_srgb_u8(0, 0, 255, 255)));
    }

    #[test]
    fn empty_boundary_draws_nothing() {
        let mut shape = RoundedImage::new(ShapeConfig::new().with_stroke(2.0, Color::black())).unwrap();
        let img = PixelBuffer::filled(4, 4, RED).unwrap();
        let canvas = render(&mut shape, Some(&img), 4, 4);
        assert!(canvas.to_rgba8().iter().all(|px| px.a == 0));
    }

    // ── stroke and highlight ──────────────────────────────────────────────

    #[test]
    fn highlight_darkens_pressed_shape() {
        let mut shape = circle(32.0);
        let img = PixelBuffer::filled(8, 8, WHITE).unwrap();

        let idle = render(&mut shape, Some(&img), 32, 32).pixel(16, 16).unwrap();
        shape.on_pointer(PointerEvent::down(16.0, 16.0));
        let pressed = render(&mut shape, Some(&img), 32, 32).pixel(16, 16).unwrap();

        assert_eq!(idle, Color::white());
        assert!(pressed.r < idle.r);
        assert!((pressed.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn stroke_paints_over_fill_on_the_boundary() {
        let mut shape = circle(32.0);
        shape.set_stroke_width(2.0).unwrap();
        shape.set_stroke_color(Color::black());
        let img = PixelBuffer::filled(8, 8, WHITE).unwrap();
        let canvas = render(&mut shape, Some(&img), 32, 32);

        // Left-most point of the circle sits on the stroke.
        let edge = canvas.pixel(0, 16).unwrap();
        assert!(edge.r < 0.1 && edge.a > 0.9, "{edge:?}");
        assert_eq!(canvas.pixel(16, 16), Some(Color::white()));
    }

    // ── export ────────────────────────────────────────────────────────────

    #[test]
    fn export_round_trips_opaque_pixels() {
        let mut shape = RoundedImage::new(ShapeConfig::default()).unwrap();
        shape.resize(4.0, 4.0).unwrap();
        let img = PixelBuffer::filled(4, 4, RED).unwrap();
        let canvas = render(&mut shape, Some(&img), 4, 4);
        assert_eq!(canvas.to_pixel_buffer().unwrap(), img);
        assert_eq!(canvas.to_rgba8_bytes().len(), 64);
    }
}
