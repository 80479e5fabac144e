mod arc;
mod line_segment;
mod ray;

pub use arc::Arc;
pub use line_segment::LineSegment;
pub use ray::Ray;

use crate::error::Result;
use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The unit domain `[0, 1]` used by bounded primitives.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Trait for parametric curves.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    ///
    /// Bounded primitives accept parameters outside their domain and
    /// extrapolate along the underlying line or circle.
    fn evaluate(&self, t: f64) -> Point3;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is degenerate.
    fn tangent(&self, t: f64) -> Result<Vector3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;

    /// Point at the start of the domain.
    fn start_point(&self) -> Point3 {
        self.evaluate(self.domain().t_min)
    }

    /// Point at the end of the domain.
    fn end_point(&self) -> Point3 {
        self.evaluate(self.domain().t_max)
    }
}

/// A bounded curve that can appear in a [`Loop`](crate::geometry::Loop).
#[derive(Debug, Clone, PartialEq)]
pub enum CurvePrimitive {
    Segment(LineSegment),
    Arc(Arc),
}

impl CurvePrimitive {
    /// Returns the same curve traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Self::Segment(s) => Self::Segment(s.reversed()),
            Self::Arc(a) => Self::Arc(a.reversed()),
        }
    }

    /// Length of the primitive.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Segment(s) => s.length(),
            Self::Arc(a) => a.length(),
        }
    }
}

impl Curve for CurvePrimitive {
    fn evaluate(&self, t: f64) -> Point3 {
        match self {
            Self::Segment(s) => s.evaluate(t),
            Self::Arc(a) => a.evaluate(t),
        }
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        match self {
            Self::Segment(s) => s.tangent(t),
            Self::Arc(a) => a.tangent(t),
        }
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        match self {
            Self::Segment(_) => false,
            Self::Arc(a) => a.is_closed(),
        }
    }
}

impl From<LineSegment> for CurvePrimitive {
    fn from(segment: LineSegment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Arc> for CurvePrimitive {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}
