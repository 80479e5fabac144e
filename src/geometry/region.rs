use super::curve_loop::Loop;

/// One connected piece of a [`Region`]: an outer boundary with optional holes.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionFace {
    boundary: Loop,
    holes: Vec<Loop>,
}

impl RegionFace {
    /// Creates a face from its outer boundary and hole loops.
    #[must_use]
    pub fn new(boundary: Loop, holes: Vec<Loop>) -> Self {
        Self { boundary, holes }
    }

    /// Returns the outer boundary loop.
    #[must_use]
    pub fn boundary(&self) -> &Loop {
        &self.boundary
    }

    /// Returns the hole loops.
    #[must_use]
    pub fn holes(&self) -> &[Loop] {
        &self.holes
    }

    /// Area of the boundary minus the area of its holes. Orientation of the
    /// individual loops does not matter.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.boundary.area() - self.holes.iter().map(Loop::area).sum::<f64>()
    }
}

/// A planar area made of zero or more disjoint faces.
///
/// Regions are produced by boolean combination of loops; an empty region is
/// a valid result (e.g. the intersection of two disjoint loops).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    faces: Vec<RegionFace>,
}

impl Region {
    /// Creates an empty region.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a region from faces.
    #[must_use]
    pub fn from_faces(faces: Vec<RegionFace>) -> Self {
        Self { faces }
    }

    /// Returns the faces of the region.
    #[must_use]
    pub fn faces(&self) -> &[RegionFace] {
        &self.faces
    }

    /// Returns whether the region has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Total enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.faces.iter().map(RegionFace::area).sum()
    }

    /// Iterates over every loop in the region: each face's boundary followed
    /// by its holes.
    pub fn loops(&self) -> impl Iterator<Item = &Loop> {
        self.faces
            .iter()
            .flat_map(|f| std::iter::once(&f.boundary).chain(f.holes.iter()))
    }
}

impl From<Loop> for Region {
    fn from(boundary: Loop) -> Self {
        Self {
            faces: vec![RegionFace::new(boundary, Vec::new())],
        }
    }
}
