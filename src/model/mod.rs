//! Model elements seen by the sightline operations: placements, the store
//! they are fetched from, and the sink results are handed to.

mod placement;
mod sink;
mod store;

pub use placement::{AxisAlignedBox, Placement};
pub use sink::GeometrySink;
pub use store::{ElementId, ElementStore, InMemoryElementStore};
