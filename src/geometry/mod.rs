pub mod curve;
mod curve_loop;
mod region;

pub use curve::{Arc, Curve, CurveDomain, CurvePrimitive, LineSegment, Ray};
pub use curve_loop::Loop;
pub use region::{Region, RegionFace};
