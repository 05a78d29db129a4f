use std::sync::Arc;

use crate::geometry::BoundaryPath;
use crate::paint::{Paint, StrokeStyle};

/// Renderer-agnostic draw command.
///
/// Every command carries its own handle to the (immutable) boundary path; the
/// same `Arc` is shared by all passes of a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd<'a> {
    /// Fill the path interior (nonzero winding) with `paint`.
    FillPath {
        path: Arc<BoundaryPath>,
        paint: Paint<'a>,
    },
    /// Outline the path, centered on it.
    StrokePath {
        path: Arc<BoundaryPath>,
        stroke: StrokeStyle,
    },
}

impl DrawCmd<'_> {
    #[inline]
    pub fn path(&self) -> &Arc<BoundaryPath> {
        match self {
            DrawCmd::FillPath { path, .. } | DrawCmd::StrokePath { path, .. } => path,
        }
    }
}
