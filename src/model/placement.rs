use crate::math::{Point3, Vector3};

/// An axis-aligned box given by its low and high corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignedBox {
    /// Minimum corner.
    pub low: Point3,
    /// Maximum corner.
    pub high: Point3,
}

impl AxisAlignedBox {
    /// Creates a box from its corners. The corners are stored as given; use
    /// [`is_valid`](Self::is_valid) to check them.
    #[must_use]
    pub fn new(low: Point3, high: Point3) -> Self {
        Self { low, high }
    }

    /// Creates a box centered on `center` with the given full extents.
    #[must_use]
    pub fn centered(center: Point3, extents: Vector3) -> Self {
        let half = extents * 0.5;
        Self {
            low: center - half,
            high: center + half,
        }
    }

    /// Smallest box containing every point, or `None` for no points.
    pub fn from_points<I: IntoIterator<Item = Point3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = Self::new(first, first);
        for p in iter {
            bbox.extend(&p);
        }
        Some(bbox)
    }

    /// Grows the box to contain `p`.
    pub fn extend(&mut self, p: &Point3) {
        self.low = self.low.inf(p);
        self.high = self.high.sup(p);
    }

    #[must_use]
    pub fn x_length(&self) -> f64 {
        self.high.x - self.low.x
    }

    #[must_use]
    pub fn y_length(&self) -> f64 {
        self.high.y - self.low.y
    }

    #[must_use]
    pub fn z_length(&self) -> f64 {
        self.high.z - self.low.z
    }

    /// Returns `true` if every coordinate is finite and `high` is not below
    /// `low` on any axis.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let finite = self.low.iter().chain(self.high.iter()).all(|c| c.is_finite());
        finite && self.x_length() >= 0.0 && self.y_length() >= 0.0 && self.z_length() >= 0.0
    }
}

/// Where an element sits in the model: an origin and its bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Element origin.
    pub origin: Point3,
    /// Axis-aligned bounding box of the element's geometry.
    pub bbox: AxisAlignedBox,
}

impl Placement {
    #[must_use]
    pub fn new(origin: Point3, bbox: AxisAlignedBox) -> Self {
        Self { origin, bbox }
    }

    /// Placement whose box is centered on its origin with the given extents.
    #[must_use]
    pub fn boxed(origin: Point3, extents: Vector3) -> Self {
        Self::new(origin, AxisAlignedBox::centered(origin, extents))
    }

    /// Returns `true` if the origin is finite and the box is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.origin.iter().all(|c| c.is_finite()) && self.bbox.is_valid()
    }
}
