use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{
    arc_point_at, arc_tangent_at, circle_through_points, sweep_through, tangent_arc,
};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A circular arc lying in a horizontal plane.
///
/// The arc sweeps from `start_angle` by `sweep` radians around `center`
/// (counter-clockwise when `sweep > 0`). The plane's elevation is the Z of
/// `center`. Parameter `t ∈ [0, 1]` maps linearly onto the sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point3,
    radius: f64,
    start_angle: f64,
    sweep: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle; its Z is the arc's elevation
    /// * `radius` - Radius (must be positive)
    /// * `start_angle` - Start angle in radians, measured from +X
    /// * `sweep` - Signed sweep in radians, `0 < |sweep| ≤ 2π`
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or the sweep is zero or
    /// exceeds a full turn.
    pub fn new(center: Point3, radius: f64, start_angle: f64, sweep: f64) -> Result<Self> {
        if radius.is_nan() || radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        if sweep.abs() < TOLERANCE || sweep.abs() > TAU + TOLERANCE {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "sweep",
                value: sweep,
                min: -TAU,
                max: TAU,
            }
            .into());
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            sweep,
        })
    }

    /// Creates the circular arc that starts at `start`, passes through
    /// `middle`, and ends at `end`.
    ///
    /// The arc lies at the elevation of `start`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the three points are collinear.
    pub fn from_start_middle_end(start: &Point3, middle: &Point3, end: &Point3) -> Result<Self> {
        let (cx, cy, radius) =
            circle_through_points(start.x, start.y, middle.x, middle.y, end.x, end.y).ok_or_else(
                || GeometryError::Degenerate("arc through collinear points".into()),
            )?;

        let angle_of = |p: &Point3| (p.y - cy).atan2(p.x - cx);
        let start_angle = angle_of(start);
        let sweep = sweep_through(start_angle, angle_of(middle), angle_of(end));
        Self::new(Point3::new(cx, cy, start.z), radius, start_angle, sweep)
    }

    /// Creates the arc that leaves `start` in the direction `tangent` and
    /// ends at `end`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `end` lies on the tangent line
    /// through `start`, or if `tangent` has no planar component.
    pub fn from_point_tangent_point(start: &Point3, tangent: &Vector3, end: &Point3) -> Result<Self> {
        let (cx, cy, radius, start_angle, sweep) =
            tangent_arc(start.x, start.y, tangent.x, tangent.y, end.x, end.y).ok_or_else(|| {
                GeometryError::Degenerate("end point lies on the start tangent line".into())
            })?;
        Self::new(Point3::new(cx, cy, start.z), radius, start_angle, sweep)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the signed sweep in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Center projected onto the XY plane.
    #[must_use]
    pub fn center_2d(&self) -> Point2 {
        Point2::new(self.center.x, self.center.y)
    }

    /// Arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    /// Returns the same arc traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            center: self.center,
            radius: self.radius,
            start_angle: self.start_angle + self.sweep,
            sweep: -self.sweep,
        }
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Point3 {
        let (x, y) = arc_point_at(
            self.center.x,
            self.center.y,
            self.radius,
            self.start_angle,
            self.sweep,
            t,
        );
        Point3::new(x, y, self.center.z)
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let (x, y) = arc_tangent_at(self.start_angle, self.sweep, t);
        Ok(Vector3::new(x, y, 0.0))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        (self.sweep.abs() - TAU).abs() < TOLERANCE
    }
}
