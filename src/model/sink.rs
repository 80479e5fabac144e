use crate::geometry::Region;

/// Receives computed regions for rendering or persistence.
pub trait GeometrySink {
    /// Takes ownership of a computed region.
    fn accept(&mut self, region: Region);
}

impl GeometrySink for Vec<Region> {
    fn accept(&mut self, region: Region) {
        self.push(region);
    }
}
