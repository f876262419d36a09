pub mod breaks;
pub mod geometry;
pub mod ids;

pub use breaks::BreakKind;
pub use geometry::Span;
pub use ids::{NodeId, ResourceUri};
