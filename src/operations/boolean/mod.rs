mod convert;
mod region_boolean;

pub use region_boolean::{BooleanOp, RegionBoolean};
