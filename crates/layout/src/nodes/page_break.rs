use super::NodeBase;
use crate::LayoutError;
use crate::interface::{LayoutContext, LayoutNode, LayoutStatus, Marker};
use folio_types::{BreakKind, NodeId};

/// An explicit page break. Its only content unit is the break itself.
#[derive(Debug)]
pub struct PageBreakNode {
    pub(crate) base: NodeBase,
    kind: BreakKind,
}

impl PageBreakNode {
    pub(crate) fn new(base: NodeBase, kind: BreakKind) -> Self {
        Self { base, kind }
    }

    pub fn break_kind(&self) -> BreakKind {
        self.kind
    }
}

impl LayoutNode for PageBreakNode {
    fn id(&self) -> NodeId {
        self.base.id
    }

    fn marker(&self) -> Marker {
        self.base.marker
    }

    fn content_len(&self) -> usize {
        1
    }

    fn layout(&mut self, _ctx: &mut LayoutContext) -> Result<LayoutStatus, LayoutError> {
        match self.base.marker {
            Marker::Start | Marker::At(0) => {
                self.base.marker = Marker::BreakAfter;
                Ok(LayoutStatus::ForcedBreak(self.kind))
            }
            // Already broken, so we are finished
            Marker::BreakAfter | Marker::At(_) => {
                self.base.marker = Marker::At(1);
                Ok(LayoutStatus::Complete)
            }
        }
    }

    fn reset_marker(&mut self) {
        self.base.marker = Marker::Start;
    }
}
