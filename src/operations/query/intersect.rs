use crate::error::Result;
use crate::geometry::{Arc, Curve, CurvePrimitive, LineSegment};
use crate::math::intersect_2d::{
    arc_arc_intersect_2d, segment_arc_intersect_2d, segment_segment_intersect_2d,
};
use crate::math::{Point2, Point3};

/// Result of a curve-curve intersection.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionResult {
    /// The intersection point.
    pub point: Point3,
    /// Parameter on the first curve.
    pub t1: f64,
    /// Parameter on the second curve.
    pub t2: f64,
}

/// Computes intersections between two planar curve primitives in the XY
/// plane. Reported points carry the elevation of the first curve.
pub struct CurveCurveIntersect<'a> {
    curve_a: &'a CurvePrimitive,
    curve_b: &'a CurvePrimitive,
}

impl<'a> CurveCurveIntersect<'a> {
    /// Creates a new `CurveCurveIntersect` query.
    #[must_use]
    pub fn new(curve_a: &'a CurvePrimitive, curve_b: &'a CurvePrimitive) -> Self {
        Self { curve_a, curve_b }
    }

    /// Executes the query, returning all intersection points. Parallel or
    /// collinear segments and concentric arcs report none.
    ///
    /// # Errors
    ///
    /// This query does not currently fail; the `Result` is kept for
    /// consistency with the other operations.
    pub fn execute(&self) -> Result<Vec<IntersectionResult>> {
        let z = self.curve_a.start_point().z;
        let hits = match (self.curve_a, self.curve_b) {
            (CurvePrimitive::Segment(a), CurvePrimitive::Segment(b)) => {
                let (a0, a1) = segment_2d(a);
                let (b0, b1) = segment_2d(b);
                segment_segment_intersect_2d(&a0, &a1, &b0, &b1)
                    .into_iter()
                    .collect()
            }
            (CurvePrimitive::Segment(s), CurvePrimitive::Arc(arc)) => segment_arc(s, arc),
            (CurvePrimitive::Arc(arc), CurvePrimitive::Segment(s)) => segment_arc(s, arc)
                .into_iter()
                .map(|(p, t_seg, t_arc)| (p, t_arc, t_seg))
                .collect(),
            (CurvePrimitive::Arc(a), CurvePrimitive::Arc(b)) => arc_arc_intersect_2d(
                &a.center_2d(),
                a.radius(),
                a.start_angle(),
                a.sweep(),
                &b.center_2d(),
                b.radius(),
                b.start_angle(),
                b.sweep(),
            ),
        };

        Ok(hits
            .into_iter()
            .map(|(p, t1, t2)| IntersectionResult {
                point: Point3::new(p.x, p.y, z),
                t1,
                t2,
            })
            .collect())
    }
}

fn segment_2d(s: &LineSegment) -> (Point2, Point2) {
    (s.start().xy(), s.end().xy())
}

fn segment_arc(s: &LineSegment, arc: &Arc) -> Vec<(Point2, f64, f64)> {
    let (a0, a1) = segment_2d(s);
    segment_arc_intersect_2d(
        &a0,
        &a1,
        &arc.center_2d(),
        arc.radius(),
        arc.start_angle(),
        arc.sweep(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn upper_unit_arc() -> CurvePrimitive {
        Arc::from_start_middle_end(&p(1.0, 0.0), &p(0.0, 1.0), &p(-1.0, 0.0))
            .unwrap()
            .into()
    }

    #[test]
    fn crossing_segments() {
        let a: CurvePrimitive = LineSegment::new(p(0.0, 0.0), p(2.0, 2.0)).into();
        let b: CurvePrimitive = LineSegment::new(p(0.0, 2.0), p(2.0, 0.0)).into();
        let hits = CurveCurveIntersect::new(&a, &b).execute().unwrap();
        assert_eq!(hits.len(), 1);
        assert!((hits[0].point - p(1.0, 1.0)).norm() < 1e-9);
        assert!((hits[0].t1 - 0.5).abs() < 1e-9);
        assert!((hits[0].t2 - 0.5).abs() < 1e-9);
    }

    #[test]
    fn segment_through_arc_swaps_parameters() {
        let seg: CurvePrimitive = LineSegment::new(p(0.0, 0.0), p(0.0, 2.0)).into();
        let arc = upper_unit_arc();

        let forward = CurveCurveIntersect::new(&seg, &arc).execute().unwrap();
        assert_eq!(forward.len(), 1);
        assert!((forward[0].point - p(0.0, 1.0)).norm() < 1e-9);
        assert!((forward[0].t1 - 0.5).abs() < 1e-9);
        assert!((forward[0].t2 - 0.5).abs() < 1e-9);

        let seg_b: CurvePrimitive = LineSegment::new(p(0.0, 0.0), p(0.0, 4.0)).into();
        let backward = CurveCurveIntersect::new(&arc, &seg_b).execute().unwrap();
        assert_eq!(backward.len(), 1);
        assert!((backward[0].t1 - 0.5).abs() < 1e-9);
        assert!((backward[0].t2 - 0.25).abs() < 1e-9);
    }

    #[test]
    fn overlapping_arcs() {
        let a = upper_unit_arc();
        let b: CurvePrimitive =
            Arc::from_start_middle_end(&p(2.0, 0.0), &p(1.0, 1.0), &p(0.0, 0.0))
                .unwrap()
                .into();
        let hits = CurveCurveIntersect::new(&a, &b).execute().unwrap();
        assert_eq!(hits.len(), 1);
        let expected = p(0.5, 3.0_f64.sqrt() / 2.0);
        assert!((hits[0].point - expected).norm() < 1e-9);
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let a: CurvePrimitive = LineSegment::new(p(0.0, 0.0), p(1.0, 0.0)).into();
        let b: CurvePrimitive = LineSegment::new(p(0.0, 1.0), p(1.0, 1.0)).into();
        assert!(CurveCurveIntersect::new(&a, &b).execute().unwrap().is_empty());
    }
}
