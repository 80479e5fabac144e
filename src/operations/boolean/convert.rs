//! Conversion between [`Region`] and `geo` multi-polygons.

use geo::{Coord, LineString, MultiPolygon, Polygon};

use crate::error::Result;
use crate::geometry::{Loop, Region, RegionFace};
use crate::math::Point3;
use crate::tessellation::TessellationParams;

/// Strokes every face of `region` into a `geo` polygon.
pub(super) fn to_multi_polygon(region: &Region, params: &TessellationParams) -> MultiPolygon<f64> {
    let polygons = region
        .faces()
        .iter()
        .map(|face| {
            let exterior = to_line_string(face.boundary(), params);
            let interiors = face
                .holes()
                .iter()
                .map(|hole| to_line_string(hole, params))
                .collect();
            Polygon::new(exterior, interiors)
        })
        .collect::<Vec<_>>();
    MultiPolygon::new(polygons)
}

fn to_line_string(curve_loop: &Loop, params: &TessellationParams) -> LineString<f64> {
    curve_loop
        .to_points(params)
        .into_iter()
        .map(|p| Coord { x: p.x, y: p.y })
        .collect::<Vec<_>>()
        .into()
}

/// Rebuilds a region at `elevation` from a `geo` multi-polygon.
///
/// Rings that collapse below three distinct vertices are dropped.
pub(super) fn from_multi_polygon(polygons: &MultiPolygon<f64>, elevation: f64) -> Result<Region> {
    let mut faces = Vec::with_capacity(polygons.0.len());
    for polygon in &polygons.0 {
        let Some(boundary) = ring_to_loop(polygon.exterior(), elevation)? else {
            continue;
        };
        let mut holes = Vec::with_capacity(polygon.interiors().len());
        for interior in polygon.interiors() {
            if let Some(hole) = ring_to_loop(interior, elevation)? {
                holes.push(hole);
            }
        }
        faces.push(RegionFace::new(boundary, holes));
    }
    Ok(Region::from_faces(faces))
}

fn ring_to_loop(ring: &LineString<f64>, elevation: f64) -> Result<Option<Loop>> {
    let points: Vec<Point3> = ring
        .coords()
        .map(|c| Point3::new(c.x, c.y, elevation))
        .collect();
    let distinct = crate::math::polygon_2d::dedup_ring(&points);
    if distinct.len() < 3 {
        return Ok(None);
    }
    Loop::polygon(&distinct).map(Some)
}
