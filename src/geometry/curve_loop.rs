use crate::error::{GeometryError, Result};
use crate::math::arc_2d::arc_subdivision_count;
use crate::math::polygon_2d::dedup_ring;
use crate::math::{Point3, POINT_TOLERANCE};
use crate::tessellation::TessellationParams;

use super::curve::{Curve, CurvePrimitive, LineSegment};

/// A closed, planar chain of line segments and circular arcs.
///
/// Each primitive's end point coincides with the next primitive's start
/// point, and the last primitive ends where the first begins.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    primitives: Vec<CurvePrimitive>,
}

impl Loop {
    /// Creates a loop from primitives connected tip-to-tail.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::LoopNotClosed` if the chain is empty, has a
    /// gap between consecutive primitives, or does not return to its start.
    pub fn new(primitives: Vec<CurvePrimitive>) -> Result<Self> {
        let (Some(first), Some(last)) = (primitives.first(), primitives.last()) else {
            return Err(GeometryError::LoopNotClosed.into());
        };
        let scale = primitives
            .iter()
            .map(CurvePrimitive::length)
            .fold(1.0_f64, f64::max);
        let tol = POINT_TOLERANCE * scale;

        for pair in primitives.windows(2) {
            if (pair[0].end_point() - pair[1].start_point()).norm() > tol {
                return Err(GeometryError::LoopNotClosed.into());
            }
        }
        if (last.end_point() - first.start_point()).norm() > tol {
            return Err(GeometryError::LoopNotClosed.into());
        }
        Ok(Self { primitives })
    }

    /// Creates a closed polygon loop through `points`. The closing edge from
    /// the last point back to the first is added automatically.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if fewer than three distinct
    /// vertices remain after dropping repeats.
    pub fn polygon(points: &[Point3]) -> Result<Self> {
        let ring = dedup_ring(points);
        if ring.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "polygon needs at least 3 distinct vertices, got {}",
                ring.len()
            ))
            .into());
        }
        let n = ring.len();
        let primitives = (0..n)
            .map(|i| LineSegment::new(ring[i], ring[(i + 1) % n]).into())
            .collect();
        Ok(Self { primitives })
    }

    /// Returns the primitives in traversal order.
    #[must_use]
    pub fn primitives(&self) -> &[CurvePrimitive] {
        &self.primitives
    }

    /// Returns the start point of the first primitive.
    #[must_use]
    pub fn start_point(&self) -> Point3 {
        // `new`/`polygon` guarantee at least one primitive.
        self.primitives
            .first()
            .map_or_else(Point3::origin, Curve::start_point)
    }

    /// Signed enclosed area in the XY plane: positive for counter-clockwise
    /// loops. Arcs contribute their exact circular-segment area.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let mut area = 0.0;
        for primitive in &self.primitives {
            let a = primitive.start_point();
            let b = primitive.end_point();
            area += 0.5 * (a.x * b.y - b.x * a.y);
            if let CurvePrimitive::Arc(arc) = primitive {
                let sweep = arc.sweep();
                area += 0.5 * arc.radius() * arc.radius() * (sweep - sweep.sin());
            }
        }
        area
    }

    /// Unsigned enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns the loop traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            primitives: self.primitives.iter().rev().map(CurvePrimitive::reversed).collect(),
        }
    }

    /// Strokes the loop into a closed ring of points. The closing point is
    /// not repeated.
    ///
    /// Arcs are subdivided so the chord deviation stays within
    /// `params.tolerance`, clamped to `[min_segments, max_segments]` per arc.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_points(&self, params: &TessellationParams) -> Vec<Point3> {
        let mut points = Vec::with_capacity(self.primitives.len() * 2);
        for primitive in &self.primitives {
            points.push(primitive.start_point());
            if let CurvePrimitive::Arc(arc) = primitive {
                let n = arc_subdivision_count(arc.radius(), arc.sweep().abs(), params.tolerance)
                    .clamp(params.min_segments.max(1), params.max_segments.max(1));
                for j in 1..n {
                    points.push(arc.evaluate(j as f64 / n as f64));
                }
            }
        }
        points
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::Arc;
    use std::f64::consts::PI;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn half_disc() -> Loop {
        // Upper half of the unit disc, counter-clockwise.
        let arc = Arc::from_start_middle_end(&p(1.0, 0.0), &p(0.0, 1.0), &p(-1.0, 0.0)).unwrap();
        Loop::new(vec![
            arc.into(),
            LineSegment::new(p(-1.0, 0.0), p(1.0, 0.0)).into(),
        ])
        .unwrap()
    }

    #[test]
    fn polygon_square_area() {
        let square = Loop::polygon(&[p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]).unwrap();
        assert_eq!(square.primitives().len(), 4);
        assert!((square.signed_area() - 4.0).abs() < 1e-12);
        assert!((square.reversed().signed_area() + 4.0).abs() < 1e-12);
    }

    #[test]
    fn polygon_ignores_explicit_closing_point() {
        let tri = Loop::polygon(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(0.0, 0.0)]).unwrap();
        assert_eq!(tri.primitives().len(), 3);
    }

    #[test]
    fn polygon_too_few_points() {
        assert!(Loop::polygon(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0)]).is_err());
    }

    #[test]
    fn open_chain_is_rejected() {
        let err = Loop::new(vec![
            LineSegment::new(p(0.0, 0.0), p(1.0, 0.0)).into(),
            LineSegment::new(p(1.0, 0.0), p(1.0, 1.0)).into(),
        ]);
        assert!(matches!(
            err,
            Err(crate::error::SightlineError::Geometry(GeometryError::LoopNotClosed))
        ));
        assert!(Loop::new(Vec::new()).is_err());
    }

    #[test]
    fn gap_between_primitives_is_rejected() {
        let err = Loop::new(vec![
            LineSegment::new(p(0.0, 0.0), p(1.0, 0.0)).into(),
            LineSegment::new(p(1.5, 0.0), p(0.0, 0.0)).into(),
        ]);
        assert!(err.is_err());
    }

    #[test]
    fn arc_loop_exact_area() {
        let l = half_disc();
        assert!((l.signed_area() - PI / 2.0).abs() < 1e-9, "area={}", l.signed_area());
        assert!((l.reversed().signed_area() + PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn stroked_arc_loop_approximates_area() {
        let l = half_disc();
        let pts = l.to_points(&TessellationParams::default());
        assert!(pts.len() > 4);
        let approx = crate::math::polygon_2d::signed_area_2d(&pts);
        assert!((approx - PI / 2.0).abs() < 0.05, "approx={approx}");
    }
}
