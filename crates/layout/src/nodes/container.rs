use super::{FoNode, NodeBase};
use crate::LayoutError;
use crate::interface::{LayoutContext, LayoutNode, LayoutStatus, Marker};
use crate::node_kind::NodeKind;
use folio_types::{BreakKind, NodeId};

/// A node that owns children and lays them out in order.
///
/// The marker is the index of the next child to attempt. A child that was
/// interrupted keeps its own marker, so re-entering it resumes inside it.
#[derive(Debug)]
pub struct ContainerNode {
    pub(crate) base: NodeBase,
    kind: NodeKind,
    children: Vec<FoNode>,
    break_before: Option<BreakKind>,
    break_after: Option<BreakKind>,
}

impl ContainerNode {
    pub(crate) fn new(
        base: NodeBase,
        kind: NodeKind,
        children: Vec<FoNode>,
        break_before: Option<BreakKind>,
        break_after: Option<BreakKind>,
    ) -> Self {
        Self {
            base,
            kind,
            children,
            break_before,
            break_after,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn children(&self) -> &[FoNode] {
        &self.children
    }

    pub fn break_before(&self) -> Option<BreakKind> {
        self.break_before
    }

    pub fn break_after(&self) -> Option<BreakKind> {
        self.break_after
    }

    /// Status for a child break. The container resumes at the first child
    /// that still has content: the breaking child itself, unless it has
    /// finished with a trailing break.
    fn propagate_break(&mut self, index: usize, kind: BreakKind) -> LayoutStatus {
        let child_finished = self.children[index].marker() == Marker::BreakAfter;
        let len = self.children.len();

        if !child_finished {
            self.base.marker = Marker::At(index);
            return LayoutStatus::ForcedBreak(kind);
        }
        if index + 1 < len {
            self.base.marker = Marker::At(index + 1);
            return LayoutStatus::ForcedBreak(kind);
        }

        // The last child's trailing break is also this container's end.
        self.base.marker = Marker::BreakAfter;
        let merged = match self.break_after {
            Some(outer) => kind.combine(outer),
            None => kind,
        };
        LayoutStatus::ForcedBreak(merged)
    }
}

impl LayoutNode for ContainerNode {
    fn id(&self) -> NodeId {
        self.base.id
    }

    fn marker(&self) -> Marker {
        self.base.marker
    }

    fn content_len(&self) -> usize {
        self.children.len()
    }

    fn layout(&mut self, ctx: &mut LayoutContext) -> Result<LayoutStatus, LayoutError> {
        let len = self.children.len();

        let start_index = match self.base.marker {
            Marker::BreakAfter => {
                self.base.marker = Marker::At(len);
                return Ok(LayoutStatus::Complete);
            }
            Marker::Start => {
                if let Some(kind) = self.break_before {
                    log::trace!("{} {} breaks before its content ({})", self.kind.as_str(), self.base.id, kind.as_str());
                    if len == 0 {
                        // At(0) would already read as done.
                        self.base.marker = Marker::BreakAfter;
                        let merged = match self.break_after {
                            Some(outer) => kind.combine(outer),
                            None => kind,
                        };
                        return Ok(LayoutStatus::ForcedBreak(merged));
                    }
                    self.base.marker = Marker::At(0);
                    return Ok(LayoutStatus::ForcedBreak(kind));
                }
                0
            }
            Marker::At(index) => index,
        };

        for index in start_index..len {
            let status = self.children[index].layout(ctx)?;
            match status {
                LayoutStatus::Complete => {}
                LayoutStatus::AreaExhaustedEmpty if index == start_index => {
                    return Ok(LayoutStatus::AreaExhaustedEmpty);
                }
                LayoutStatus::AreaExhaustedEmpty | LayoutStatus::AreaExhaustedPartial => {
                    log::trace!("{} {} suspended at child {}", self.kind.as_str(), self.base.id, index);
                    self.base.marker = Marker::At(index);
                    return Ok(LayoutStatus::AreaExhaustedPartial);
                }
                LayoutStatus::ForcedBreak(kind) => {
                    return Ok(self.propagate_break(index, kind));
                }
            }
        }

        if let Some(kind) = self.break_after {
            log::trace!("{} {} breaks after its content ({})", self.kind.as_str(), self.base.id, kind.as_str());
            self.base.marker = Marker::BreakAfter;
            return Ok(LayoutStatus::ForcedBreak(kind));
        }

        self.base.marker = Marker::At(len);
        Ok(LayoutStatus::Complete)
    }

    fn reset_marker(&mut self) {
        self.base.marker = Marker::Start;
        for child in &mut self.children {
            child.reset_marker();
        }
    }
}
