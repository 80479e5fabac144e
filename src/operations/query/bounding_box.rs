use std::f64::consts::FRAC_PI_2;

use crate::error::{OperationError, Result};
use crate::geometry::{Arc, Curve, CurvePrimitive, Region};
use crate::math::arc_2d::angle_to_arc_param;
use crate::math::Point3;
use crate::model::AxisAlignedBox;

/// Computes the axis-aligned bounding box of a region.
///
/// Arcs are bounded exactly: besides their end points, every axis extreme
/// (0, π/2, π, 3π/2) that falls within the sweep is included.
pub struct BoundingBox<'a> {
    region: &'a Region,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(region: &'a Region) -> Self {
        Self { region }
    }

    /// Executes the query, returning the box.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the region is empty.
    pub fn execute(&self) -> Result<AxisAlignedBox> {
        let points = self
            .region
            .loops()
            .flat_map(|l| l.primitives().iter())
            .flat_map(|primitive| match primitive {
                CurvePrimitive::Segment(s) => vec![*s.start(), *s.end()],
                CurvePrimitive::Arc(arc) => arc_extremes(arc),
            });
        AxisAlignedBox::from_points(points).ok_or_else(|| {
            OperationError::InvalidInput("bounding box of an empty region".into()).into()
        })
    }
}

fn arc_extremes(arc: &Arc) -> Vec<Point3> {
    let mut points = vec![arc.start_point(), arc.end_point()];
    for quadrant in 0..4 {
        let angle = f64::from(quadrant) * FRAC_PI_2;
        if let Some(t) = angle_to_arc_param(angle, arc.start_angle(), arc.sweep()) {
            points.push(arc.evaluate(t));
        }
    }
    points
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{LineSegment, Loop};

    #[test]
    fn half_disc_box_includes_apex() {
        let start = Point3::new(1.0, 0.0, 2.0);
        let mid = Point3::new(0.0, 1.0, 2.0);
        let end = Point3::new(-1.0, 0.0, 2.0);
        let region: Region = Loop::new(vec![
            Arc::from_start_middle_end(&start, &mid, &end).unwrap().into(),
            LineSegment::new(end, start).into(),
        ])
        .unwrap()
        .into();

        let bbox = BoundingBox::new(&region).execute().unwrap();
        assert!((bbox.low - Point3::new(-1.0, 0.0, 2.0)).norm() < 1e-9);
        assert!((bbox.high - Point3::new(1.0, 1.0, 2.0)).norm() < 1e-9);
    }

    #[test]
    fn empty_region_fails() {
        assert!(BoundingBox::new(&Region::empty()).execute().is_err());
    }
}
