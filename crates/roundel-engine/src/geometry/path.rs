use crate::coords::{Rect, Vec2};

/// Straight segment between two points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
}

impl LineSegment {
    #[inline]
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// Elliptical arc inscribed in `oval`.
///
/// Angles are in degrees, measured from +X. The view is y-down, so positive
/// angles turn clockwise on screen and a negative sweep turns counter-clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSegment {
    pub oval: Rect,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl ArcSegment {
    #[inline]
    pub const fn new(oval: Rect, start_angle: f32, sweep_angle: f32) -> Self {
        Self { oval, start_angle, sweep_angle }
    }

    /// Point on the oval at `degrees`.
    #[inline]
    pub fn point_at(&self, degrees: f32) -> Vec2 {
        let c = self.oval.center();
        let (sin, cos) = sin_cos_degrees(degrees);
        Vec2::new(c.x + self.oval.width() * 0.5 * cos, c.y + self.oval.height() * 0.5 * sin)
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.point_at(self.start_angle)
    }

    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.point_at(self.start_angle + self.sweep_angle)
    }

    /// Derivative of `point_at` with respect to the angle in radians.
    fn tangent_at(&self, degrees: f32) -> Vec2 {
        let (sin, cos) = sin_cos_degrees(degrees);
        Vec2::new(-self.oval.width() * 0.5 * sin, self.oval.height() * 0.5 * cos)
    }

    /// Cubic Bézier approximation, one curve per quarter turn or less.
    ///
    /// Each item is `[control1, control2, end]`; the first curve starts at
    /// [`start_point`](Self::start_point).
    pub fn to_cubics(&self) -> Vec<[Vec2; 3]> {
        if self.sweep_angle == 0.0 || !self.sweep_angle.is_finite() {
            return Vec::new();
        }
        let pieces = (self.sweep_angle.abs() / 90.0).ceil().max(1.0) as usize;
        let step = self.sweep_angle / pieces as f32;
        let k = 4.0 / 3.0 * (step.to_radians() / 4.0).tan();

        (0..pieces)
            .map(|i| {
                let a0 = self.start_angle + step * i as f32;
                let a1 = a0 + step;
                let (p0, p1) = (self.point_at(a0), self.point_at(a1));
                [p0 + self.tangent_at(a0) * k, p1 - self.tangent_at(a1) * k, p1]
            })
            .collect()
    }
}

/// `(sin, cos)` of an angle in degrees, exact at multiples of 90.
///
/// Corner arcs start and end on quarter turns, and those endpoints must land
/// exactly on the adjacent edge lines.
fn sin_cos_degrees(degrees: f32) -> (f32, f32) {
    if degrees.rem_euclid(90.0) != 0.0 {
        return degrees.to_radians().sin_cos();
    }
    match (degrees.rem_euclid(360.0) / 90.0) as u32 {
        0 => (0.0, 1.0),
        1 => (1.0, 0.0),
        2 => (0.0, -1.0),
        _ => (-1.0, 0.0),
    }
}

/// One element of a boundary contour.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    Line(LineSegment),
    Arc(ArcSegment),
}

impl Segment {
    #[inline]
    pub fn end_point(&self) -> Vec2 {
        match self {
            Segment::Line(l) => l.to,
            Segment::Arc(a) => a.end_point(),
        }
    }

    fn approx_eq(&self, other: &Segment, eps: f32) -> bool {
        match (self, other) {
            (Segment::Line(a), Segment::Line(b)) => {
                a.from.approx_eq(b.from, eps) && a.to.approx_eq(b.to, eps)
            }
            (Segment::Arc(a), Segment::Arc(b)) => {
                a.oval.origin.approx_eq(b.oval.origin, eps)
                    && a.oval.size.approx_eq(b.oval.size, eps)
                    && (a.start_angle - b.start_angle).abs() <= eps
                    && (a.sweep_angle - b.sweep_angle).abs() <= eps
            }
            _ => false,
        }
    }
}

/// A single contour of lines and arcs.
///
/// Paths are immutable once built; draw commands share them through `Arc`
/// rather than appending to a common path object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryPath {
    start: Option<Vec2>,
    segments: Vec<Segment>,
    closed: bool,
}

impl BoundaryPath {
    /// Path with no contour. Produced for zero-area viewports.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn start(&self) -> Option<Vec2> {
        self.start
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Line(l) => Some(l),
            Segment::Arc(_) => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcSegment> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Arc(a) => Some(a),
            Segment::Line(_) => None,
        })
    }

    /// Geometric equality within `eps` on every coordinate and angle.
    pub fn approx_eq(&self, other: &BoundaryPath, eps: f32) -> bool {
        let starts = match (self.start, other.start) {
            (Some(a), Some(b)) => a.approx_eq(b, eps),
            (None, None) => true,
            _ => false,
        };
        starts
            && self.closed == other.closed
            && self.segments.len() == other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|(a, b)| a.approx_eq(b, eps))
    }
}

/// Incremental builder for a [`BoundaryPath`], tracking the current point.
#[derive(Debug, Default)]
pub struct PathBuilder {
    path: BoundaryPath,
    current: Vec2,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the contour. Only one contour is supported; a second call restarts it.
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        let p = Vec2::new(x, y);
        self.path = BoundaryPath { start: Some(p), segments: Vec::new(), closed: false };
        self.current = p;
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        let to = Vec2::new(x, y);
        self.path.segments.push(Segment::Line(LineSegment { from: self.current, to }));
        self.current = to;
        self
    }

    /// Appends an arc of `oval`. The arc is expected to begin at the current point.
    pub fn arc_to(mut self, oval: Rect, start_angle: f32, sweep_angle: f32) -> Self {
        let arc = ArcSegment::new(oval, start_angle, sweep_angle);
        self.current = arc.end_point();
        self.path.segments.push(Segment::Arc(arc));
        self
    }

    pub fn close(mut self) -> Self {
        if self.path.start.is_some() {
            self.path.closed = true;
        }
        self
    }

    pub fn build(self) -> BoundaryPath {
        self.path
    }
}
