//! Contains the implementations of the `LayoutNode` trait for each node category.

pub mod container;
pub mod page_break;
pub mod text;

pub use container::ContainerNode;
pub use page_break::PageBreakNode;
pub use text::{FORCED_BREAK_CHAR, TextMeasure, TextNode};

use crate::LayoutError;
use crate::interface::{LayoutContext, LayoutNode, LayoutStatus, Marker};
use crate::node_kind::NodeKind;
use crate::params::LayoutParams;
use folio_types::NodeId;

/// State every node carries regardless of its category.
#[derive(Debug, Clone)]
pub struct NodeBase {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) params: LayoutParams,
    pub(crate) marker: Marker,
}

impl NodeBase {
    pub(crate) fn new(id: NodeId, parent: Option<NodeId>, params: LayoutParams) -> Self {
        Self {
            id,
            parent,
            params,
            marker: Marker::Start,
        }
    }
}

/// A node of the formatting-object tree.
///
/// Layout dispatches statically over the closed set of categories.
#[derive(Debug)]
pub enum FoNode {
    Container(ContainerNode),
    Text(TextNode),
    PageBreak(PageBreakNode),
}

impl FoNode {
    fn base(&self) -> &NodeBase {
        match self {
            FoNode::Container(n) => &n.base,
            FoNode::Text(n) => &n.base,
            FoNode::PageBreak(n) => &n.base,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            FoNode::Container(n) => n.kind(),
            FoNode::Text(_) => NodeKind::Text,
            FoNode::PageBreak(_) => NodeKind::PageBreak,
        }
    }

    /// The enclosing node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.base().parent
    }

    pub fn params(&self) -> &LayoutParams {
        &self.base().params
    }

    /// Child nodes in layout order. Leaves have none.
    pub fn children(&self) -> &[FoNode] {
        match self {
            FoNode::Container(n) => n.children(),
            FoNode::Text(_) | FoNode::PageBreak(_) => &[],
        }
    }
}

impl LayoutNode for FoNode {
    fn id(&self) -> NodeId {
        self.base().id
    }

    fn marker(&self) -> Marker {
        self.base().marker
    }

    fn content_len(&self) -> usize {
        match self {
            FoNode::Container(n) => n.content_len(),
            FoNode::Text(n) => n.content_len(),
            FoNode::PageBreak(n) => n.content_len(),
        }
    }

    fn layout(&mut self, ctx: &mut LayoutContext) -> Result<LayoutStatus, LayoutError> {
        match self {
            FoNode::Container(n) => n.layout(ctx),
            FoNode::Text(n) => n.layout(ctx),
            FoNode::PageBreak(n) => n.layout(ctx),
        }
    }

    fn reset_marker(&mut self) {
        match self {
            FoNode::Container(n) => n.reset_marker(),
            FoNode::Text(n) => n.reset_marker(),
            FoNode::PageBreak(n) => n.reset_marker(),
        }
    }
}
