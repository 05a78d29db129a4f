//! Roundel engine crate.
//!
//! Draws an image clipped to a rectangle with four independent corner radii,
//! with an optional stroke along the same boundary and a translucent highlight
//! while pressed. Hosts supply the view size, configuration, decoded pixels and
//! pointer events; the engine returns the boundary path, ordered draw commands
//! and whether each pointer event was handled.
//!
//! ```
//! use roundel_engine::{CornerRadii, PointerEvent, RoundedImage, ShapeConfig};
//! use roundel_engine::pixel_buffer::{PixelBuffer, Rgba8};
//! use roundel_engine::raster::Canvas;
//!
//! let config = ShapeConfig::new().with_radii(CornerRadii::all(24.0));
//! let mut shape = RoundedImage::new(config).unwrap();
//! shape.resize(96.0, 96.0).unwrap();
//! assert!(shape.on_pointer(PointerEvent::down(48.0, 48.0)).is_consumed());
//!
//! let image = PixelBuffer::filled(16, 16, Rgba8::new(200, 80, 40, 255)).unwrap();
//! let mut frame = shape.frame(Some(&image));
//! let mut canvas = Canvas::new(96, 96).unwrap();
//! canvas.execute(&mut frame);
//! ```

pub mod cache;
pub mod config;
pub mod coords;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod logging;
pub mod paint;
pub mod pixel_buffer;
pub mod raster;
pub mod scene;
pub mod view;

pub use config::ShapeConfig;
pub use coords::{CornerRadii, Edges, Rect, Vec2, Viewport};
pub use error::ConfigError;
pub use fit::{fit_image, SamplingTransform};
pub use geometry::{build_boundary, BoundaryPath, CornerOvals};
pub use hit::is_inside;
pub use input::{EventResult, PointerEvent, PointerPhase};
pub use view::{PressState, RoundedImage};
