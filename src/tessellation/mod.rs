mod tessellate_loop;
mod tessellate_region;

pub use tessellate_loop::TessellateLoop;
pub use tessellate_region::TessellateRegion;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TessellationError};
use crate::math::{Point3, Vector3};

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true geometry.
    pub tolerance: f64,
    /// Minimum number of segments for curves.
    pub min_segments: usize,
    /// Maximum number of segments for curves.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 4,
            max_segments: 256,
        }
    }
}

impl TessellationParams {
    /// Checks that the parameters describe a usable tessellation.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` for a non-positive
    /// tolerance, a zero segment bound, or `min_segments > max_segments`.
    pub fn validate(&self) -> Result<()> {
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            ))
            .into());
        }
        if self.min_segments == 0 || self.min_segments > self.max_segments {
            return Err(TessellationError::InvalidParameters(format!(
                "segment bounds must satisfy 0 < min ({}) <= max ({})",
                self.min_segments, self.max_segments
            ))
            .into());
        }
        Ok(())
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

/// A triangle mesh approximation of a planar region.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Sum of triangle areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.indices
            .iter()
            .map(|tri| {
                let v0 = self.vertices[tri[0] as usize];
                let v1 = self.vertices[tri[1] as usize];
                let v2 = self.vertices[tri[2] as usize];
                (v1 - v0).cross(&(v2 - v0)).norm() * 0.5
            })
            .sum()
    }
}
