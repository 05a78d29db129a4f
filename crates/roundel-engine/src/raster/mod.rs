//! CPU reference rasterizer.
//!
//! Executes a frame's `DrawList` into an RGBA target with `tiny-skia`, so hosts
//! without a GPU path (and tests) can see exactly what the draw commands mean:
//! - fills: nonzero winding, anti-aliased
//! - image fills: nearest sampling with clamp-to-edge (`SpreadMode::Pad`)
//! - strokes: centered on the boundary
//! - compositing: premultiplied source-over

mod canvas;

pub use canvas::Canvas;
