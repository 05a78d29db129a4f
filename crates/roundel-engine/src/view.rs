//! The rounded image component: configuration, cached geometry, press state and
//! per-frame draw composition.
//!
//! Hosts drive it with explicit calls (`resize`, setters, `on_pointer`, `frame`)
//! and poll [`RoundedImage::take_redraw_request`] to schedule repaints.

use std::sync::Arc;

use crate::cache::Cached;
use crate::config::{self, ShapeConfig};
use crate::coords::{CornerRadii, Edges, Rect, Viewport};
use crate::error::ConfigError;
use crate::fit::{fit_image, SamplingTransform};
use crate::geometry::{build_boundary, BoundaryPath, CornerOvals};
use crate::hit::is_inside;
use crate::input::{EventResult, PointerEvent, PointerPhase};
use crate::paint::{Color, Paint};
use crate::pixel_buffer::PixelBuffer;
use crate::scene::{DrawCmd, DrawList, DrawPass};

/// Interaction state of the shape.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PressState {
    #[default]
    Idle,
    /// A press started inside the shape and has not ended yet.
    Pressed,
}

type BoundaryKey = (Viewport, CornerRadii);
type FitKey = (Rect, u32, u32);

/// Image clipped to a per-corner rounded rectangle, with stroke and press highlight.
#[derive(Debug)]
pub struct RoundedImage {
    config: ShapeConfig,
    viewport: Viewport,
    padding: Edges,
    state: PressState,
    redraw_requested: bool,

    boundary: Cached<BoundaryKey, (Arc<BoundaryPath>, CornerOvals)>,
    fit: Cached<FitKey, SamplingTransform>,
}

impl Default for RoundedImage {
    fn default() -> Self {
        Self {
            config: ShapeConfig::default(),
            viewport: Viewport::default(),
            padding: Edges::default(),
            state: PressState::Idle,
            redraw_requested: false,
            boundary: Cached::new(),
            fit: Cached::new(),
        }
    }
}

impl RoundedImage {
    /// Creates the component from a validated configuration.
    pub fn new(config: ShapeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, ..Self::default() })
    }

    #[inline]
    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    // ── size ──────────────────────────────────────────────────────────────

    /// Host resize notification. Zero or negative sizes produce an empty boundary.
    ///
    /// Non-finite sizes are rejected and the previous size is kept.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        config::validate_view_size(width, height).inspect_err(|e| log::warn!("{e}"))?;
        let viewport = Viewport::new(width, height);
        if viewport != self.viewport {
            log::debug!("resize {}x{} -> {}x{}", self.viewport.width, self.viewport.height, width, height);
            self.viewport = viewport;
            self.request_redraw();
        }
        Ok(())
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Content padding between the view edge and the draw bounds.
    ///
    /// Negative or non-finite sides are rejected and the previous padding is kept.
    pub fn set_padding(&mut self, padding: Edges) -> Result<(), ConfigError> {
        config::validate_padding(&padding).inspect_err(|e| log::warn!("{e}"))?;
        if padding != self.padding {
            self.padding = padding;
            self.request_redraw();
        }
        Ok(())
    }

    #[inline]
    pub fn padding(&self) -> Edges {
        self.padding
    }

    /// Rectangle used for image fitting and hit-testing.
    #[inline]
    pub fn draw_bounds(&self) -> Rect {
        self.viewport.draw_bounds(self.padding)
    }

    // ── configuration ─────────────────────────────────────────────────────

    #[inline]
    pub fn corner_radii(&self) -> CornerRadii {
        self.config.radii
    }

    pub fn set_corner_radii(&mut self, radii: CornerRadii) -> Result<(), ConfigError> {
        config::validate_radii(&radii).inspect_err(|e| log::warn!("{e}"))?;
        self.config.radii = radii;
        self.request_redraw();
        Ok(())
    }

    #[inline]
    pub fn stroke_color(&self) -> Color {
        self.config.stroke.color
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.config.stroke.color = color;
        self.request_redraw();
    }

    #[inline]
    pub fn stroke_width(&self) -> f32 {
        self.config.stroke.width
    }

    pub fn set_stroke_width(&mut self, width: f32) -> Result<(), ConfigError> {
        config::validate_stroke_width(width).inspect_err(|e| log::warn!("{e}"))?;
        self.config.stroke.width = width;
        self.request_redraw();
        Ok(())
    }

    #[inline]
    pub fn highlight_color(&self) -> Color {
        self.config.highlight.color
    }

    pub fn set_highlight_color(&mut self, color: Color) {
        self.config.highlight.color = color;
        self.request_redraw();
    }

    #[inline]
    pub fn highlight_enabled(&self) -> bool {
        self.config.highlight.enabled
    }

    pub fn set_highlight_enabled(&mut self, enabled: bool) {
        self.config.highlight.enabled = enabled;
        self.request_redraw();
    }

    // ── press state machine ───────────────────────────────────────────────

    #[inline]
    pub fn press_state(&self) -> PressState {
        self.state
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.state == PressState::Pressed
    }

    /// Feeds a pointer event.
    ///
    /// - down inside the touch region: `Idle -> Pressed`, consumed
    /// - down outside: ignored, state unchanged
    /// - up / cancel anywhere: `-> Idle`, consumed
    pub fn on_pointer(&mut self, event: PointerEvent) -> EventResult {
        log::trace!("pointer {:?} in state {:?}", event, self.state);
        match event.phase {
            PointerPhase::Down => {
                if !is_inside(self.draw_bounds(), event.position()) {
                    return EventResult::Ignored;
                }
                self.transition(PressState::Pressed);
                EventResult::Consumed
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                self.transition(PressState::Idle);
                EventResult::Consumed
            }
        }
    }

    fn transition(&mut self, next: PressState) {
        if self.state != next {
            log::debug!("press state {:?} -> {:?}", self.state, next);
            self.state = next;
            self.request_redraw();
        }
    }

    // ── redraw ────────────────────────────────────────────────────────────

    #[inline]
    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Returns whether a redraw was requested since the last call, and clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    // ── derived geometry ──────────────────────────────────────────────────

    fn boundary_entry(&mut self) -> &(Arc<BoundaryPath>, CornerOvals) {
        self.boundary.get_or_update((self.viewport, self.config.radii), |&(viewport, radii)| {
            log::debug!("rebuilding boundary for {:?} with {:?}", viewport, radii);
            (
                Arc::new(build_boundary(viewport, radii)),
                CornerOvals::compute(viewport, radii),
            )
        })
    }

    /// Boundary path for the current size and radii (cached).
    pub fn boundary(&mut self) -> Arc<BoundaryPath> {
        Arc::clone(&self.boundary_entry().0)
    }

    /// Corner ovals for the current size and radii (cached with the boundary).
    pub fn corner_ovals(&mut self) -> CornerOvals {
        self.boundary_entry().1
    }

    /// Sampling transform fitting `image` into the draw bounds (cached).
    pub fn sampling_transform(&mut self, image: &PixelBuffer) -> SamplingTransform {
        let key = (self.draw_bounds(), image.width(), image.height());
        *self.fit.get_or_update(key, |&(bounds, w, h)| {
            let t = fit_image(bounds, w, h);
            log::debug!("refit {}x{} image into {:?}: {:?}", w, h, bounds, t);
            t
        })
    }

    // ── frame composition ─────────────────────────────────────────────────

    /// Records this frame's draw commands into a fresh list.
    pub fn frame<'a>(&mut self, image: Option<&'a PixelBuffer>) -> DrawList<'a> {
        let mut list = DrawList::new();
        self.record_frame(image, &mut list);
        list
    }

    /// Records this frame's draw commands into `list` (cleared first).
    ///
    /// Order: image fill (if `image` is given and the draw bounds have an area),
    /// stroke (if width > 0), highlight (if enabled and pressed). All passes
    /// share one boundary path.
    pub fn record_frame<'a>(&mut self, image: Option<&'a PixelBuffer>, list: &mut DrawList<'a>) {
        list.clear();
        let path = self.boundary();

        match image {
            Some(image) if !self.draw_bounds().is_empty() => {
                let transform = self.sampling_transform(image);
                list.push(
                    DrawPass::Fill,
                    DrawCmd::FillPath { path: Arc::clone(&path), paint: Paint::image(image, transform) },
                );
            }
            Some(_) => log::trace!("no draw area in {:?}; image fill skipped", self.draw_bounds()),
            None => {}
        }

        let stroke = self.config.stroke;
        if stroke.is_visible() {
            list.push(DrawPass::Stroke, DrawCmd::StrokePath { path: Arc::clone(&path), stroke });
        }

        let highlight = self.config.highlight;
        if highlight.enabled && self.is_pressed() {
            list.push(
                DrawPass::Highlight,
                DrawCmd::FillPath { path, paint: Paint::solid(highlight.color) },
            );
        }
    }
}
