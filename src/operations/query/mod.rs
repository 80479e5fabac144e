mod bounding_box;
mod intersect;

pub use bounding_box::BoundingBox;
pub use intersect::{CurveCurveIntersect, IntersectionResult};
