use crate::error::{ElementError, GeometryError, OperationError, Result};
use crate::geometry::{Arc, CurvePrimitive, LineSegment, Loop, Ray, Region};
use crate::math::vector_2d::{planar_delta, planar_distance, right_normal, rotate_xy};
use crate::math::{Point3, POINT_TOLERANCE, TOLERANCE};
use crate::model::Placement;
use crate::operations::boolean::{BooleanOp, RegionBoolean};
use crate::operations::query::CurveCurveIntersect;

use super::config::SightlineConfig;

/// Intermediate and final geometry of one sightline computation.
#[derive(Debug, Clone)]
pub struct SightlineAnalysis {
    radius: f64,
    distance: f64,
    half_angle: f64,
    tangent_points: [Point3; 2],
    field_of_view: Loop,
    obstruction_loop: Option<Loop>,
    blocked: Region,
    region: Region,
}

impl SightlineAnalysis {
    /// Radius of the circle standing in for the obstruction's footprint.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Planar distance from the light to the obstruction.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Angle θ between light→obstruction and each tangent ray.
    #[must_use]
    pub fn half_angle(&self) -> f64 {
        self.half_angle
    }

    /// Points where the rays rotated by `+θ` and `−θ` touch the footprint
    /// circle.
    #[must_use]
    pub fn tangent_points(&self) -> &[Point3; 2] {
        &self.tangent_points
    }

    /// The light's unobstructed field of view toward the target.
    #[must_use]
    pub fn field_of_view(&self) -> &Loop {
        &self.field_of_view
    }

    /// The quadrilateral shadowed by the obstruction, when both tangent rays
    /// reach the reference arc.
    #[must_use]
    pub fn obstruction_loop(&self) -> Option<&Loop> {
        self.obstruction_loop.as_ref()
    }

    /// Part of the field of view covered by the obstruction loop.
    #[must_use]
    pub fn blocked(&self) -> &Region {
        &self.blocked
    }

    /// The final sightline region.
    #[must_use]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Consumes the analysis, returning the final region.
    #[must_use]
    pub fn into_region(self) -> Region {
        self.region
    }

    /// Whether the obstruction removed anything from the field of view.
    #[must_use]
    pub fn is_obstructed(&self) -> bool {
        !self.blocked.is_empty()
    }
}

/// Computes the planar region a light can see toward a target, minus the part
/// hidden behind an obstruction.
///
/// The obstruction's footprint is approximated by a circle. All geometry is
/// built in the horizontal plane at the light's elevation.
pub struct SightlineObstruction {
    light: Placement,
    obstruction: Placement,
    target: Option<Point3>,
    config: SightlineConfig,
}

impl SightlineObstruction {
    /// Creates a new `SightlineObstruction` operation with the default
    /// configuration.
    #[must_use]
    pub fn new(light: Placement, obstruction: Placement, target: Option<Point3>) -> Self {
        Self {
            light,
            obstruction,
            target,
            config: SightlineConfig::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SightlineConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the computation.
    ///
    /// # Errors
    ///
    /// - `ElementError::InvalidGeometry` if either placement has a non-finite
    ///   origin or an inverted box.
    /// - `OperationError::NoTargetSelected` if no target was given.
    /// - `OperationError::InvalidInput` if the target has a non-finite
    ///   coordinate.
    /// - `GeometryError::Degenerate` if the footprint radius is zero, the light
    ///   lies within the footprint circle, or the target coincides with the
    ///   light.
    /// - `ConfigError::Invalid` if the configuration is out of range.
    pub fn execute(&self) -> Result<SightlineAnalysis> {
        self.config.validate()?;
        check_placement("light", &self.light)?;
        check_placement("obstruction", &self.obstruction)?;
        let target = self.target.ok_or(OperationError::NoTargetSelected)?;
        if !target.coords.iter().all(|c| c.is_finite()) {
            return Err(OperationError::InvalidInput(format!(
                "target has non-finite coordinates: {target:?}"
            ))
            .into());
        }

        let light = self.light.origin;
        let elevation = light.z;
        let center = Point3::new(self.obstruction.origin.x, self.obstruction.origin.y, elevation);
        let target = Point3::new(target.x, target.y, elevation);

        let bbox = &self.obstruction.bbox;
        let radius = bbox.x_length().max(bbox.y_length()) / self.config.radius_divisor;
        if radius <= TOLERANCE {
            return Err(
                GeometryError::Degenerate("obstruction has no horizontal extent".into()).into(),
            );
        }

        let distance = planar_distance(&light, &center);
        if distance <= radius {
            return Err(GeometryError::Degenerate(format!(
                "light lies within the obstruction footprint (distance {distance}, radius {radius})"
            ))
            .into());
        }

        // Tangent rays from the light to the footprint circle.
        let half_angle = (radius / distance).asin();
        let to_center = planar_delta(&light, &center);
        let [upper, lower] = [half_angle, -half_angle].map(|angle| {
            Ray::new(light, rotate_xy(&to_center, angle)).map(|ray| ray.project_point(&center))
        });
        let tangent_points = [upper?, lower?];

        let field_of_view = self.field_of_view(&light, &target)?;
        let fov_region = Region::from(field_of_view.clone());

        let mut obstruction_loop = None;
        let mut blocked = Region::empty();
        let mut region = fov_region.clone();

        if let Some(quad) = self.obstruction_quad(&light, &target, &tangent_points)? {
            let quad_region = Region::from(quad.clone());
            blocked = RegionBoolean::new(&fov_region, &quad_region, BooleanOp::Intersection)
                .with_params(self.config.tessellation)
                .execute()?;
            if !blocked.is_empty() {
                region = RegionBoolean::new(&fov_region, &quad_region, BooleanOp::Difference)
                    .with_params(self.config.tessellation)
                    .execute()?;
            }
            obstruction_loop = Some(quad);
        }

        tracing::debug!(
            radius,
            distance,
            half_angle,
            quad = obstruction_loop.is_some(),
            obstructed = !blocked.is_empty(),
            area = region.area(),
            "sightline computed"
        );

        Ok(SightlineAnalysis {
            radius,
            distance,
            half_angle,
            tangent_points,
            field_of_view,
            obstruction_loop,
            blocked,
            region,
        })
    }

    /// Wedge of half-angle φ around light→target, closed by the arc through
    /// the target.
    fn field_of_view(&self, light: &Point3, target: &Point3) -> Result<Loop> {
        let to_target = planar_delta(light, target);
        if to_target.norm() < POINT_TOLERANCE {
            return Err(
                GeometryError::Degenerate("target coincides with the light".into()).into(),
            );
        }

        let phi = self.config.light_half_angle;
        let left = Ray::new(*light, rotate_xy(&to_target, phi))?.project_point(target);
        let right = Ray::new(*light, rotate_xy(&to_target, -phi))?.project_point(target);

        Loop::new(vec![
            LineSegment::new(*light, left).into(),
            Arc::from_start_middle_end(&left, target, &right)?.into(),
            LineSegment::new(right, *light).into(),
        ])
    }

    /// Builds the quadrilateral shadowed by the obstruction.
    ///
    /// The extended tangent segments are cut against the reference arc: a
    /// half circle over light→target, bulging to the right of that direction.
    /// Returns `None` if either segment misses the arc, or if a far corner
    /// would not lie beyond its tangent point (the quad would fold over).
    fn obstruction_quad(
        &self,
        light: &Point3,
        target: &Point3,
        tangent_points: &[Point3; 2],
    ) -> Result<Option<Loop>> {
        let to_target = planar_delta(light, target);
        let reference: CurvePrimitive =
            Arc::from_point_tangent_point(light, &right_normal(&to_target), target)?.into();

        // The light is the start of both curves; skip that shared point.
        let min_offset = POINT_TOLERANCE * planar_distance(light, target).max(1.0);

        let mut far_corners = [*light; 2];
        for (corner, tangent_point) in far_corners.iter_mut().zip(tangent_points) {
            let far = LineSegment::new(*light, *tangent_point)
                .fraction_to_point(self.config.tangent_extension);
            let extended: CurvePrimitive = LineSegment::new(*light, far).into();
            let hit = CurveCurveIntersect::new(&extended, &reference)
                .execute()?
                .into_iter()
                .filter(|hit| planar_distance(light, &hit.point) > min_offset)
                .min_by(|a, b| a.t1.total_cmp(&b.t1));
            let Some(hit) = hit else {
                tracing::trace!(?tangent_point, "tangent segment misses the reference arc");
                return Ok(None);
            };

            *corner = LineSegment::new(*light, hit.point)
                .fraction_to_point(self.config.obstruction_extension);
            if planar_distance(light, corner) <= planar_distance(light, tangent_point) {
                tracing::trace!(
                    ?corner,
                    ?tangent_point,
                    "far corner falls short of the tangent point"
                );
                return Ok(None);
            }
        }

        Loop::polygon(&[
            tangent_points[0],
            tangent_points[1],
            far_corners[1],
            far_corners[0],
        ])
        .map(Some)
    }
}

fn check_placement(element: &str, placement: &Placement) -> Result<()> {
    if placement.is_valid() {
        Ok(())
    } else {
        Err(ElementError::InvalidGeometry {
            element: element.into(),
            reason: "non-finite origin or inverted bounding box".into(),
        }
        .into())
    }
}
