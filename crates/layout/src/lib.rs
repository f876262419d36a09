use folio_types::NodeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Node {node} has a content unit of extent {extent:.2} which exceeds the maximum area capacity of {max:.2}.")]
    Unplaceable { node: NodeId, extent: f32, max: f32 },
    #[error("Node {node} is misconfigured: {reason}")]
    MalformedNode { node: NodeId, reason: String },
    #[error("A fresh area on page {page} accepted no content; layout cannot make progress.")]
    NoProgress { page: usize },
    #[error("Document exceeded the limit of {0} pages.")]
    PageLimitExceeded(usize),
    #[error("Invalid layout configuration: {0}")]
    InvalidConfiguration(String),
}

impl LayoutError {
    /// The node the error originated in, when it is known.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            LayoutError::Unplaceable { node, .. } | LayoutError::MalformedNode { node, .. } => Some(*node),
            _ => None,
        }
    }
}

pub mod area;
pub mod builder;
pub mod config;
pub mod engine;
pub mod fonts;
pub mod interface;
pub mod node_kind;
pub mod nodes;
pub mod params;
pub mod tree;

pub use self::area::{FlowArea, PlacedUnit};
pub use self::builder::{NodeSpec, TreeBuilder};
pub use self::config::LayoutConfig;
pub use self::engine::{LayoutEngine, PageOutput, Paginator};
pub use self::fonts::{FontRegistry, LazyFont, MetricsFile};
pub use self::interface::{LayoutContext, LayoutEnvironment, LayoutNode, LayoutStatus, Marker};
pub use self::node_kind::NodeKind;
pub use self::nodes::{ContainerNode, FoNode, PageBreakNode, TextMeasure, TextNode};
pub use self::params::LayoutParams;
pub use self::tree::FoTree;

// Re-export boundary types used in node signatures to prevent version mismatches
pub use folio_traits::{Area, ContentUnit, Placement, UnitRole};
pub use folio_types::{BreakKind, Span};

#[cfg(test)]
mod test_utils;
