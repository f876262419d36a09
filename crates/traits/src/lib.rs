pub mod area;
pub mod font;
pub mod resource;

pub use area::{Area, ContentUnit, Placement, UnitRole};
pub use font::{FontDescriptor, FontError, FontMetrics, FontType};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
