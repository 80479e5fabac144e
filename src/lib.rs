pub mod error;
pub mod geometry;
pub mod incident;
pub mod math;
pub mod model;
pub mod operations;
pub mod tessellation;

pub use error::{Result, SightlineError};
