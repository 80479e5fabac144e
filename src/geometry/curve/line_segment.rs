use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A straight segment between two points, parameterized on `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    start: Point3,
    end: Point3,
}

impl LineSegment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns the (non-normalized) vector from start to end.
    #[must_use]
    pub fn vector(&self) -> Vector3 {
        self.end - self.start
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Point at `fraction` of the way from start to end.
    ///
    /// Fractions outside `[0, 1]` extend the segment: `2.0` lies one full
    /// segment length beyond the end point.
    #[must_use]
    pub fn fraction_to_point(&self, fraction: f64) -> Point3 {
        self.start + self.vector() * fraction
    }

    /// Returns the segment traversed from end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}

impl Curve for LineSegment {
    fn evaluate(&self, t: f64) -> Point3 {
        self.fraction_to_point(t)
    }

    fn tangent(&self, _t: f64) -> Result<Vector3> {
        let v = self.vector();
        let len = v.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(v / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        false
    }
}
