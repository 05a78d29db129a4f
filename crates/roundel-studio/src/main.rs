//! Example host: decodes an image, renders it through a `RoundedImage` and
//! writes the rasterized frame as a PNG.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;

use roundel_engine::logging::{init_logging, LoggingConfig};
use roundel_engine::paint::Color;
use roundel_engine::pixel_buffer::PixelBuffer;
use roundel_engine::raster::Canvas;
use roundel_engine::{CornerRadii, Edges, EventResult, PointerEvent, RoundedImage, ShapeConfig};

#[derive(Debug, Parser)]
#[command(name = "roundel-studio", about = "Render an image clipped to a per-corner rounded rectangle")]
struct Args {
    /// Image to decode (png, jpeg, bmp, gif, webp).
    input: PathBuf,
    /// PNG file to write.
    output: PathBuf,

    #[arg(long, default_value_t = 256)]
    width: u32,
    #[arg(long, default_value_t = 256)]
    height: u32,
    /// Content padding applied on every side.
    #[arg(long, default_value_t = 0.0)]
    padding: f32,

    /// Radius for every corner not given explicitly.
    #[arg(long, default_value_t = 0.0)]
    radius: f32,
    #[arg(long)]
    top_left: Option<f32>,
    #[arg(long)]
    top_right: Option<f32>,
    #[arg(long)]
    bottom_right: Option<f32>,
    #[arg(long)]
    bottom_left: Option<f32>,

    #[arg(long, default_value_t = 0.0)]
    stroke_width: f32,
    /// Stroke color as `RRGGBB` or `AARRGGBB` hex.
    #[arg(long, default_value = "FF000000")]
    stroke_color: String,

    /// Highlight color as `RRGGBB` or `AARRGGBB` hex.
    #[arg(long, default_value = "32000000")]
    highlight_color: String,
    #[arg(long)]
    no_highlight: bool,
    /// Simulate a press at the view center before rendering.
    #[arg(long)]
    pressed: bool,

    /// Log filter in `env_logger` syntax (overrides `RUST_LOG`).
    #[arg(long)]
    log: Option<String>,
    /// Log at debug level when no filter is given.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn logging(&self) -> LoggingConfig {
        let mut config = LoggingConfig::default();
        if self.verbose {
            config = config.with_default_level(LevelFilter::Debug);
        }
        match &self.log {
            Some(filter) => config.with_filter(filter.clone()),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.logging());

    let decoded = image::open(&args.input)
        .with_context(|| format!("failed to decode {}", args.input.display()))?
        .to_rgba8();
    let (iw, ih) = decoded.dimensions();
    let pixels = PixelBuffer::from_rgba8(iw, ih, decoded.as_raw())
        .context("decoded image is not usable as a pixel buffer")?;
    log::info!("decoded {} ({}x{})", args.input.display(), iw, ih);

    let radius = |corner: Option<f32>| corner.unwrap_or(args.radius);
    let config = ShapeConfig::new()
        .with_radii(CornerRadii::new(
            radius(args.top_left),
            radius(args.top_right),
            radius(args.bottom_right),
            radius(args.bottom_left),
        ))
        .with_stroke(args.stroke_width, parse_color(&args.stroke_color)?)
        .with_highlight(parse_color(&args.highlight_color)?, !args.no_highlight);

    let mut shape = RoundedImage::new(config).context("invalid shape configuration")?;
    shape.resize(args.width as f32, args.height as f32).context("invalid view size")?;
    shape.set_padding(Edges::all(args.padding)).context("invalid padding")?;

    if args.pressed {
        let c = shape.draw_bounds().center();
        if shape.on_pointer(PointerEvent::down(c.x, c.y)) == EventResult::Ignored {
            log::warn!("press at {:?} fell outside the shape", c);
        }
    }

    let mut frame = shape.frame(Some(&pixels));
    log::info!("recorded passes {:?}", frame.passes());

    let mut canvas = Canvas::new(args.width, args.height).context("cannot allocate canvas")?;
    canvas.execute(&mut frame);

    image::RgbaImage::from_raw(args.width, args.height, canvas.to_rgba8_bytes())
        .context("canvas size does not match its pixel data")?
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}

/// Parses `RRGGBB` (opaque) or `AARRGGBB`, with an optional leading `#`.
fn parse_color(hex: &str) -> Result<Color> {
    let digits = hex.trim_start_matches('#');
    let value = u32::from_str_radix(digits, 16)
        .with_context(|| format!("invalid hex color {hex:?}"))?;
    match digits.len() {
        6 => Ok(Color::from_argb(0xFF00_0000 | value)),
        8 => Ok(Color::from_argb(value)),
        _ => bail!("hex color {hex:?} must have 6 or 8 digits"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_colors_are_opaque() {
        assert_eq!(parse_color("#336699").unwrap().to_argb(), 0xFF33_6699);
    }

    #[test]
    fn eight_digit_colors_keep_alpha() {
        assert_eq!(parse_color("32000000").unwrap().to_argb(), 0x3200_0000);
    }

    #[test]
    fn verbose_and_log_filter_shape_the_logger() {
        let args = Args::parse_from(["roundel-studio", "in.png", "out.png", "-v", "--log", "roundel_engine=trace"]);
        let logging = args.logging();
        assert_eq!(logging.default_level, LevelFilter::Debug);
        assert_eq!(logging.env_filter.as_deref(), Some("roundel_engine=trace"));
        assert_eq!(Args::parse_from(["roundel-studio", "a", "b"]).logging().env_filter, None);
    }

    #[test]
    fn malformed_colors_are_errors() {
        assert!(parse_color("12345").is_err());
        assert!(parse_color("zzzzzz").is_err());
    }
}
