use crate::error::Result;
use crate::geometry::Loop;

use super::{Polyline, TessellationParams};

/// Tessellates a loop into a closed polyline.
pub struct TessellateLoop<'a> {
    curve_loop: &'a Loop,
    params: TessellationParams,
}

impl<'a> TessellateLoop<'a> {
    /// Creates a new `TessellateLoop` operation.
    #[must_use]
    pub fn new(curve_loop: &'a Loop, params: TessellationParams) -> Self {
        Self { curve_loop, params }
    }

    /// Executes the tessellation, returning a closed polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the tessellation parameters are invalid.
    pub fn execute(&self) -> Result<Polyline> {
        self.params.validate()?;
        Ok(Polyline {
            points: self.curve_loop.to_points(&self.params),
            closed: true,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Arc, LineSegment};
    use crate::math::Point3;

    #[test]
    fn polygon_loop_keeps_vertices() {
        let square = Loop::polygon(&[
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ])
        .unwrap();
        let line = TessellateLoop::new(&square, TessellationParams::default())
            .execute()
            .unwrap();
        assert!(line.closed);
        assert_eq!(line.points.len(), 4);
        assert!(line.points.iter().all(|p| (p.z - 1.0).abs() < 1e-12));
    }

    #[test]
    fn arc_respects_segment_bounds() {
        let a = Point3::new(10.0, 0.0, 0.0);
        let b = Point3::new(0.0, 10.0, 0.0);
        let c = Point3::new(-10.0, 0.0, 0.0);
        let arc = Arc::from_start_middle_end(&a, &b, &c).unwrap();
        let l = Loop::new(vec![arc.into(), LineSegment::new(c, a).into()]).unwrap();

        let params = TessellationParams {
            tolerance: 1e-6,
            min_segments: 4,
            max_segments: 16,
        };
        let line = TessellateLoop::new(&l, params).execute().unwrap();
        // 16 arc chords (start point + 15 interior) plus the segment start.
        assert_eq!(line.points.len(), 17);
    }

    #[test]
    fn invalid_params_fail() {
        let tri = Loop::polygon(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .unwrap();
        let params = TessellationParams {
            tolerance: -1.0,
            ..TessellationParams::default()
        };
        assert!(TessellateLoop::new(&tri, params).execute().is_err());
    }
}
