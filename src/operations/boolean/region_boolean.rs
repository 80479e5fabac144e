use geo::BooleanOps;

use crate::error::Result;
use crate::geometry::Region;
use crate::tessellation::TessellationParams;

use super::convert::{from_multi_polygon, to_multi_polygon};

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Intersection,
    /// `a` minus `b`.
    Difference,
}

/// Combines two planar regions with a boolean operation in the XY plane.
///
/// Arcs are stroked with the configured tessellation parameters before the
/// combination, so the result consists of straight-edged loops. The result
/// lies at the elevation of the first operand (or the second, when the first
/// is empty).
pub struct RegionBoolean<'a> {
    a: &'a Region,
    b: &'a Region,
    op: BooleanOp,
    params: TessellationParams,
}

impl<'a> RegionBoolean<'a> {
    /// Creates a new `RegionBoolean` operation with default tessellation
    /// parameters.
    #[must_use]
    pub fn new(a: &'a Region, b: &'a Region, op: BooleanOp) -> Self {
        Self {
            a,
            b,
            op,
            params: TessellationParams::default(),
        }
    }

    /// Sets the tessellation parameters used to stroke arcs.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation. Disjoint operands yield an empty region for
    /// `Intersection`; this is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the tessellation parameters are invalid.
    pub fn execute(&self) -> Result<Region> {
        self.params.validate()?;

        let elevation = self
            .a
            .loops()
            .chain(self.b.loops())
            .next()
            .map_or(0.0, |l| l.start_point().z);

        let lhs = to_multi_polygon(self.a, &self.params);
        let rhs = to_multi_polygon(self.b, &self.params);
        let combined = match self.op {
            BooleanOp::Union => lhs.union(&rhs),
            BooleanOp::Intersection => lhs.intersection(&rhs),
            BooleanOp::Difference => lhs.difference(&rhs),
        };

        let region = from_multi_polygon(&combined, elevation)?;
        tracing::debug!(
            op = ?self.op,
            lhs_faces = self.a.faces().len(),
            rhs_faces = self.b.faces().len(),
            result_faces = region.faces().len(),
            "region boolean"
        );
        Ok(region)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Arc, LineSegment, Loop};
    use crate::math::Point3;
    use std::f64::consts::PI;

    fn square(x0: f64, y0: f64, size: f64) -> Region {
        Loop::polygon(&[
            Point3::new(x0, y0, 1.0),
            Point3::new(x0 + size, y0, 1.0),
            Point3::new(x0 + size, y0 + size, 1.0),
            Point3::new(x0, y0 + size, 1.0),
        ])
        .unwrap()
        .into()
    }

    #[test]
    fn overlapping_squares() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);

        let inter = RegionBoolean::new(&a, &b, BooleanOp::Intersection).execute().unwrap();
        assert!((inter.area() - 1.0).abs() < 1e-9, "area={}", inter.area());

        let union = RegionBoolean::new(&a, &b, BooleanOp::Union).execute().unwrap();
        assert!((union.area() - 7.0).abs() < 1e-9, "area={}", union.area());

        let diff = RegionBoolean::new(&a, &b, BooleanOp::Difference).execute().unwrap();
        assert!((diff.area() - 3.0).abs() < 1e-9, "area={}", diff.area());
        assert!(diff.loops().all(|l| (l.start_point().z - 1.0).abs() < 1e-12));
    }

    #[test]
    fn disjoint_intersection_is_empty() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(5.0, 5.0, 1.0);
        let inter = RegionBoolean::new(&a, &b, BooleanOp::Intersection).execute().unwrap();
        assert!(inter.is_empty());
    }

    #[test]
    fn difference_with_contained_operand_leaves_hole() {
        let a = square(0.0, 0.0, 4.0);
        let b = square(1.0, 1.0, 2.0);
        let diff = RegionBoolean::new(&a, &b, BooleanOp::Difference).execute().unwrap();
        assert_eq!(diff.faces().len(), 1);
        assert_eq!(diff.faces()[0].holes().len(), 1);
        assert!((diff.area() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn difference_with_empty_region_is_identity() {
        let a = square(0.0, 0.0, 3.0);
        let diff = RegionBoolean::new(&a, &Region::empty(), BooleanOp::Difference)
            .execute()
            .unwrap();
        assert!((diff.area() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn arcs_are_stroked_within_tolerance() {
        let start = Point3::new(1.0, 0.0, 0.0);
        let mid = Point3::new(0.0, 1.0, 0.0);
        let end = Point3::new(-1.0, 0.0, 0.0);
        let half_disc: Region = Loop::new(vec![
            Arc::from_start_middle_end(&start, &mid, &end).unwrap().into(),
            LineSegment::new(end, start).into(),
        ])
        .unwrap()
        .into();
        let params = TessellationParams {
            tolerance: 1e-4,
            ..TessellationParams::default()
        };
        let cover = square(-2.0, -2.0, 4.0);
        let inter = RegionBoolean::new(&half_disc, &cover, BooleanOp::Intersection)
            .with_params(params)
            .execute()
            .unwrap();
        assert!((inter.area() - PI / 2.0).abs() < 1e-3, "area={}", inter.area());
    }
}
