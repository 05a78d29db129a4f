use crate::coords::{CornerRadii, Rect, Viewport};

use super::{BoundaryPath, PathBuilder};

/// The square boxes inscribing each corner arc (side = 2 x radius).
///
/// Pure function of `(viewport, radii)`; recompute on every resize or radius change.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerOvals {
    pub top_left: Rect,
    pub top_right: Rect,
    pub bottom_right: Rect,
    pub bottom_left: Rect,
}

impl CornerOvals {
    pub fn compute(viewport: Viewport, radii: CornerRadii) -> Self {
        let (w, h) = (viewport.width, viewport.height);
        let tl = radii.top_left * 2.0;
        let tr = radii.top_right * 2.0;
        let br = radii.bottom_right * 2.0;
        let bl = radii.bottom_left * 2.0;

        Self {
            top_left: Rect::new(0.0, 0.0, tl, tl),
            top_right: Rect::new(w - tr, 0.0, tr, tr),
            bottom_right: Rect::new(w - br, h - br, br, br),
            bottom_left: Rect::new(0.0, h - bl, bl, bl),
        }
    }
}

/// Builds the closed boundary of a `viewport`-sized view with per-corner `radii`.
///
/// The contour starts at the top of the left edge and runs down the left side,
/// along the bottom, up the right side and back along the top. Every corner arc
/// sweeps -90 degrees. Corners with a zero radius emit no arc, so the adjacent
/// edges meet at a sharp corner. Edge lines are emitted even when they have zero
/// length (e.g. for a full circle).
///
/// Zero or negative viewport sizes yield an empty path. Radii are trusted as
/// given: callers validate them (see `ShapeConfig::validate`).
pub fn build_boundary(viewport: Viewport, radii: CornerRadii) -> BoundaryPath {
    if !viewport.is_valid() {
        return BoundaryPath::empty();
    }

    let (w, h) = (viewport.width, viewport.height);
    let ovals = CornerOvals::compute(viewport, radii);

    let mut b = PathBuilder::new()
        .move_to(0.0, radii.top_left)
        .line_to(0.0, h - radii.bottom_left);
    if radii.bottom_left > 0.0 {
        b = b.arc_to(ovals.bottom_left, -180.0, -90.0);
    }

    b = b.line_to(w - radii.bottom_right, h);
    if radii.bottom_right > 0.0 {
        b = b.arc_to(ovals.bottom_right, 90.0, -90.0);
    }

    b = b.line_to(w, radii.top_right);
    if radii.top_right > 0.0 {
        b = b.arc_to(ovals.top_right, 0.0, -90.0);
    }

    b = b.line_to(radii.top_left, 0.0);
    if radii.top_left > 0.0 {
        b = b.arc_to(ovals.top_left, -90.0, -90.0);
    }

    b.close().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::geometry::Segment;

    const EPS: f32 = 1e-3;

    // ── sharp corners ─────────────────────────────────────────────────────

    #[test]
    fn zero_radii_yield_plain_rectangle() {
        let path = build_boundary(Viewport::new(120.0, 80.0), CornerRadii::zero());

        assert_eq!(path.arcs().count(), 0);
        let lines: Vec<_> = path.lines().map(|l| (l.from, l.to)).collect();
        assert_eq!(
            lines,
            vec![
                (Vec2::new(0.0, 0.0), Vec2::new(0.0, 80.0)),
                (Vec2::new(0.0, 80.0), Vec2::new(120.0, 80.0)),
                (Vec2::new(120.0, 80.0), Vec2::new(120.0, 0.0)),
                (Vec2::new(120.0, 0.0), Vec2::new(0.0, 0.0)),
            ]
        );
        assert!(path.is_closed());
    }

    #[test]
    fn single_rounded_corner_only_adds_one_arc() {
        let path = build_boundary(Viewport::new(100.0, 100.0), CornerRadii::new(0.0, 0.0, 20.0, 0.0));
        let arcs: Vec<_> = path.arcs().collect();
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].oval, Rect::new(60.0, 60.0, 40.0, 40.0));
        assert_eq!(path.segments().len(), 5);
    }

    // ── circle ────────────────────────────────────────────────────────────

    #[test]
    fn half_side_radii_on_square_make_a_circle() {
        let side = 64.0;
        let path = build_boundary(Viewport::new(side, side), CornerRadii::all(side / 2.0));

        assert_eq!(path.arcs().count(), 4);
        for line in path.lines() {
            assert!(line.length() <= f32::EPSILON, "straight run of {}", line.length());
        }

        let center = Vec2::new(side / 2.0, side / 2.0);
        for arc in path.arcs() {
            for t in 0..=8 {
                let p = arc.point_at(arc.start_angle + arc.sweep_angle * t as f32 / 8.0);
                assert!((p.distance(center) - side / 2.0).abs() < EPS);
            }
        }
    }

    // ── arc orientation ───────────────────────────────────────────────────

    #[test]
    fn arcs_join_the_adjacent_edges() {
        let vp = Viewport::new(200.0, 100.0);
        let radii = CornerRadii::new(10.0, 20.0, 30.0, 40.0);
        let path = build_boundary(vp, radii);

        let segs = path.segments();
        for pair in segs.windows(2) {
            if let Segment::Arc(arc) = pair[1] {
                assert!(arc.start_point().approx_eq(pair[0].end_point(), EPS));
            }
            if let (Segment::Arc(arc), Segment::Line(line)) = (pair[0], pair[1]) {
                assert!(arc.end_point().approx_eq(line.from, EPS));
            }
        }

        // The last arc (top-left) returns to the start point.
        let last = segs.last().unwrap().end_point();
        assert!(last.approx_eq(path.start().unwrap(), EPS));
    }

    #[test]
    fn corner_arcs_have_expected_endpoints() {
        let path = build_boundary(Viewport::new(100.0, 50.0), CornerRadii::all(10.0));
        let ends: Vec<_> = path.arcs().map(|a| (a.start_point(), a.end_point())).collect();
        let expect = [
            (Vec2::new(0.0, 40.0), Vec2::new(10.0, 50.0)),   // bottom-left
            (Vec2::new(90.0, 50.0), Vec2::new(100.0, 40.0)), // bottom-right
            (Vec2::new(100.0, 10.0), Vec2::new(90.0, 0.0)),  // top-right
            (Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)),    // top-left
        ];
        for ((s, e), (es, ee)) in ends.into_iter().zip(expect) {
            assert!(s.approx_eq(es, EPS), "{s:?} vs {es:?}");
            assert!(e.approx_eq(ee, EPS), "{e:?} vs {ee:?}");
        }
        assert!(path.arcs().all(|a| a.sweep_angle == -90.0));
    }

    // ── ovals ─────────────────────────────────────────────────────────────

    #[test]
    fn ovals_follow_resize() {
        let radii = CornerRadii::all(5.0);
        let small = CornerOvals::compute(Viewport::new(50.0, 50.0), radii);
        let large = CornerOvals::compute(Viewport::new(80.0, 60.0), radii);
        assert_eq!(small.bottom_right, Rect::new(40.0, 40.0, 10.0, 10.0));
        assert_eq!(large.bottom_right, Rect::new(70.0, 50.0, 10.0, 10.0));
        assert_eq!(large.top_left, small.top_left);
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn zero_sized_viewport_is_empty() {
        assert!(build_boundary(Viewport::new(0.0, 100.0), CornerRadii::all(4.0)).is_empty());
        assert!(build_boundary(Viewport::new(100.0, -3.0), CornerRadii::zero()).is_empty());
    }

    #[test]
    fn overlapping_radii_stay_finite() {
        let path = build_boundary(Viewport::new(40.0, 40.0), CornerRadii::all(35.0));
        for arc in path.arcs() {
            assert!(arc.to_cubics().iter().flatten().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
        assert_eq!(path.arcs().count(), 4);
    }

    #[test]
    fn building_twice_gives_equal_paths() {
        let vp = Viewport::new(33.0, 77.0);
        let radii = CornerRadii::new(1.5, 0.0, 12.0, 7.25);
        assert!(build_boundary(vp, radii).approx_eq(&build_boundary(vp, radii), 0.0));
    }
}
