/// Represents the specific role of a formatting node.
///
/// Containers share one layout algorithm; the kind only records what the
/// container stands for, for diagnostics and for consumers of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Block,
    ListItem,
    ListLabel,
    ListBody,
    TableCell,
    Text,
    PageBreak,
}

impl NodeKind {
    /// Returns a string representation, primarily for debugging or error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Block => "Block",
            NodeKind::ListItem => "ListItem",
            NodeKind::ListLabel => "ListLabel",
            NodeKind::ListBody => "ListBody",
            NodeKind::TableCell => "TableCell",
            NodeKind::Text => "Text",
            NodeKind::PageBreak => "PageBreak",
        }
    }
}
