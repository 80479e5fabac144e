use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A half-infinite ray defined by an origin point and a direction vector.
///
/// The parametric form is: `P(t) = origin + t * direction`, `t ≥ 0`, with
/// a unit-length direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
}

impl Ray {
    /// Creates a new ray from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Returns the origin point of the ray.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction vector of the ray.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Signed distance along the ray to the foot of the perpendicular from `point`.
    #[must_use]
    pub fn project_parameter(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    /// Projects `point` onto the line carrying this ray.
    ///
    /// Points behind the origin project to negative parameters; the result
    /// is not clamped to the ray.
    #[must_use]
    pub fn project_point(&self, point: &Point3) -> Point3 {
        self.evaluate(self.project_parameter(point))
    }
}

impl Curve for Ray {
    fn evaluate(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    fn tangent(&self, _t: f64) -> Result<Vector3> {
        Ok(self.direction)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, f64::INFINITY)
    }

    fn is_closed(&self) -> bool {
        false
    }
}
