use crate::LayoutError;
use crate::interface::{LayoutContext, LayoutNode, LayoutStatus, Marker};
use crate::nodes::FoNode;
use folio_types::NodeId;
use std::collections::HashMap;

/// An assembled formatting-object tree.
///
/// Nodes own their children; parent links are kept here as an id lookup so
/// no node holds a reference to its ancestors.
#[derive(Debug)]
pub struct FoTree {
    root: FoNode,
    parents: HashMap<NodeId, Option<NodeId>>,
}

impl FoTree {
    pub(crate) fn new(root: FoNode, parents: HashMap<NodeId, Option<NodeId>>) -> Self {
        Self { root, parents }
    }

    pub fn root(&self) -> &FoNode {
        &self.root
    }

    /// Lays the tree out into the context's area, resuming from the
    /// markers left by the previous call.
    pub fn layout(&mut self, ctx: &mut LayoutContext) -> Result<LayoutStatus, LayoutError> {
        self.root.layout(ctx)
    }

    /// Rewinds every node for a fresh pass.
    pub fn reset_markers(&mut self) {
        self.root.reset_marker();
    }

    pub fn is_complete(&self) -> bool {
        self.root.is_done()
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(&id).copied().flatten()
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent_of(id), move |parent| self.parent_of(*parent))
    }

    /// Finds a node by id. Ids are assigned in document order, so each
    /// subtree covers a contiguous id range and the search descends along a
    /// single path.
    pub fn find(&self, id: NodeId) -> Option<&FoNode> {
        let mut node = &self.root;
        loop {
            if node.id() == id {
                return Some(node);
            }
            let children = node.children();
            let next = children.partition_point(|child| child.id() <= id);
            if next == 0 {
                return None;
            }
            node = &children[next - 1];
        }
    }

    /// All nodes in document order.
    pub fn nodes(&self) -> Vec<&FoNode> {
        let mut out = Vec::with_capacity(self.parents.len());
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    /// Snapshot of every node's marker, in document order.
    pub fn markers(&self) -> Vec<(NodeId, Marker)> {
        self.nodes().into_iter().map(|n| (n.id(), n.marker())).collect()
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
