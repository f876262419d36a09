use crate::LayoutError;
use crate::node_kind::NodeKind;
use crate::nodes::{ContainerNode, FoNode, NodeBase, PageBreakNode, TextMeasure, TextNode};
use crate::params::LayoutParams;
use crate::tree::FoTree;
use folio_types::{BreakKind, NodeId};
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum SpecContent {
    Children(Vec<NodeSpec>),
    Text { text: String, measure: TextMeasure },
    Break(BreakKind),
}

/// Assembly-time description of a node.
///
/// The context setters live here rather than on the built node: they are
/// applied while the tree is described and frozen by `TreeBuilder`.
#[derive(Debug, Clone)]
pub struct NodeSpec {
    kind: NodeKind,
    params: LayoutParams,
    content: SpecContent,
    break_before: Option<BreakKind>,
    break_after: Option<BreakKind>,
}

impl NodeSpec {
    fn container(kind: NodeKind, children: Vec<NodeSpec>) -> Self {
        Self {
            kind,
            params: LayoutParams::new(),
            content: SpecContent::Children(children),
            break_before: None,
            break_after: None,
        }
    }

    pub fn root(children: Vec<NodeSpec>) -> Self {
        Self::container(NodeKind::Root, children)
    }

    pub fn block(children: Vec<NodeSpec>) -> Self {
        Self::container(NodeKind::Block, children)
    }

    pub fn text(text: impl Into<String>, measure: TextMeasure) -> Self {
        Self {
            kind: NodeKind::Text,
            params: LayoutParams::new(),
            content: SpecContent::Text {
                text: text.into(),
                measure,
            },
            break_before: None,
            break_after: None,
        }
    }

    pub fn page_break(kind: BreakKind) -> Self {
        Self {
            kind: NodeKind::PageBreak,
            params: LayoutParams::new(),
            content: SpecContent::Break(kind),
            break_before: None,
            break_after: None,
        }
    }

    /// A list item: the label is as wide as the distance between starts
    /// minus the label separation, the body starts at the distance between
    /// starts.
    pub fn list_item(
        label: Vec<NodeSpec>,
        body: Vec<NodeSpec>,
        distance_between_starts: f32,
        label_separation: f32,
    ) -> Self {
        let mut label = Self::container(NodeKind::ListLabel, label);
        label.set_in_label();
        label.set_distance_between_starts(distance_between_starts);
        label.set_label_separation(label_separation);

        let mut body = Self::container(NodeKind::ListBody, body);
        body.set_in_list_body();
        body.set_distance_between_starts(distance_between_starts);
        body.set_body_indent(distance_between_starts);

        Self::container(NodeKind::ListItem, vec![label, body])
    }

    /// A table cell with its column geometry forced onto its content.
    pub fn table_cell(children: Vec<NodeSpec>, start_offset: f32, width: f32) -> Self {
        let mut cell = Self::container(NodeKind::TableCell, children);
        cell.set_in_table_cell();
        cell.force_start_offset(start_offset);
        cell.force_width(width);
        cell
    }

    pub fn with_break_before(mut self, kind: BreakKind) -> Self {
        self.break_before = Some(kind);
        self
    }

    pub fn with_break_after(mut self, kind: BreakKind) -> Self {
        self.break_after = Some(kind);
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn set_in_label(&mut self) {
        self.params.set_in_label();
    }

    pub fn set_in_list_body(&mut self) {
        self.params.set_in_list_body();
    }

    pub fn set_in_table_cell(&mut self) {
        self.params.set_in_table_cell();
    }

    pub fn set_distance_between_starts(&mut self, distance: f32) {
        self.params.set_distance_between_starts(distance);
    }

    pub fn set_label_separation(&mut self, separation: f32) {
        self.params.set_label_separation(separation);
    }

    pub fn set_body_indent(&mut self, indent: f32) {
        self.params.set_body_indent(indent);
    }

    pub fn force_start_offset(&mut self, offset: f32) {
        self.params.force_start_offset(offset);
    }

    pub fn force_width(&mut self, width: f32) {
        self.params.force_width(width);
    }
}

/// Turns a `NodeSpec` into an `FoTree`: assigns ids depth-first, records
/// parent links and resolves inherited parameters top-down.
#[derive(Debug)]
pub struct TreeBuilder {
    next_id: NodeId,
    parents: HashMap<NodeId, Option<NodeId>>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            next_id: NodeId::new(0),
            parents: HashMap::new(),
        }
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(spec: NodeSpec) -> Result<FoTree, LayoutError> {
        let mut builder = Self::new();
        let root = builder.build_node(spec, None, &LayoutParams::new())?;
        log::debug!("Assembled formatting tree with {} nodes", builder.parents.len());
        Ok(FoTree::new(root, builder.parents))
    }

    fn build_node(
        &mut self,
        spec: NodeSpec,
        parent: Option<NodeId>,
        parent_params: &LayoutParams,
    ) -> Result<FoNode, LayoutError> {
        let id = self.next_id;
        self.next_id = id.next();
        self.parents.insert(id, parent);

        let params = spec.params.inherit(parent_params);
        let base = NodeBase::new(id, parent, params);

        match spec.content {
            SpecContent::Children(children) => {
                let mut nodes = Vec::with_capacity(children.len());
                for child in children {
                    nodes.push(self.build_node(child, Some(id), &params)?);
                }
                Ok(FoNode::Container(ContainerNode::new(
                    base,
                    spec.kind,
                    nodes,
                    spec.break_before,
                    spec.break_after,
                )))
            }
            SpecContent::Text { text, measure } => {
                Self::reject_breaks(id, &spec.kind, spec.break_before, spec.break_after)?;
                match &measure {
                    TextMeasure::Uniform(extent) if !(*extent >= 0.0) => {
                        return Err(LayoutError::MalformedNode {
                            node: id,
                            reason: format!("uniform extent {extent} is not a non-negative number"),
                        });
                    }
                    TextMeasure::Font { size, .. } if !(size.is_finite() && *size > 0.0) => {
                        return Err(LayoutError::MalformedNode {
                            node: id,
                            reason: format!("font size {size} is not a positive number"),
                        });
                    }
                    _ => {}
                }
                Ok(FoNode::Text(TextNode::new(base, &text, measure)))
            }
            SpecContent::Break(kind) => {
                Self::reject_breaks(id, &spec.kind, spec.break_before, spec.break_after)?;
                Ok(FoNode::PageBreak(PageBreakNode::new(base, kind)))
            }
        }
    }

    fn reject_breaks(
        id: NodeId,
        kind: &NodeKind,
        before: Option<BreakKind>,
        after: Option<BreakKind>,
    ) -> Result<(), LayoutError> {
        if before.is_some() || after.is_some() {
            return Err(LayoutError::MalformedNode {
                node: id,
                reason: format!("{} nodes cannot carry break-before or break-after", kind.as_str()),
            });
        }
        Ok(())
    }
}
