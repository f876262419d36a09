//! Per-node placement parameters.
//!
//! Parameters are set on a `NodeSpec` while the tree is assembled, resolved
//! against the parent's parameters by the `TreeBuilder`, and then frozen on
//! the node. Layout code only ever reads them.

use crate::LayoutError;
use folio_traits::UnitRole;
use folio_types::{NodeId, Span};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutParams {
    in_label: bool,
    in_list_body: bool,
    in_table_cell: bool,
    body_indent: Option<f32>,
    distance_between_starts: Option<f32>,
    label_separation: Option<f32>,
    forced_start_offset: Option<f32>,
    forced_width: Option<f32>,
}

impl LayoutParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_in_label(&mut self) {
        self.in_label = true;
    }

    pub fn set_in_list_body(&mut self) {
        self.in_list_body = true;
    }

    pub fn set_in_table_cell(&mut self) {
        self.in_table_cell = true;
    }

    pub fn set_distance_between_starts(&mut self, distance: f32) {
        self.distance_between_starts = Some(distance);
    }

    pub fn set_label_separation(&mut self, separation: f32) {
        self.label_separation = Some(separation);
    }

    pub fn set_body_indent(&mut self, indent: f32) {
        self.body_indent = Some(indent);
    }

    pub fn force_start_offset(&mut self, offset: f32) {
        self.forced_start_offset = Some(offset);
    }

    pub fn force_width(&mut self, width: f32) {
        self.forced_width = Some(width);
    }

    pub fn in_label(&self) -> bool {
        self.in_label
    }

    pub fn in_list_body(&self) -> bool {
        self.in_list_body
    }

    pub fn in_table_cell(&self) -> bool {
        self.in_table_cell
    }

    pub fn body_indent(&self) -> Option<f32> {
        self.body_indent
    }

    pub fn distance_between_starts(&self) -> Option<f32> {
        self.distance_between_starts
    }

    pub fn label_separation(&self) -> Option<f32> {
        self.label_separation
    }

    pub fn forced_start_offset(&self) -> Option<f32> {
        self.forced_start_offset
    }

    pub fn forced_width(&self) -> Option<f32> {
        self.forced_width
    }

    /// Resolves these explicitly-set parameters against the parent's
    /// resolved parameters. Flags accumulate downwards; numeric values are
    /// inherited unless set on this node.
    pub fn inherit(&self, parent: &LayoutParams) -> LayoutParams {
        LayoutParams {
            in_label: self.in_label || parent.in_label,
            in_list_body: self.in_list_body || parent.in_list_body,
            in_table_cell: self.in_table_cell || parent.in_table_cell,
            body_indent: self.body_indent.or(parent.body_indent),
            distance_between_starts: self.distance_between_starts.or(parent.distance_between_starts),
            label_separation: self.label_separation.or(parent.label_separation),
            forced_start_offset: self.forced_start_offset.or(parent.forced_start_offset),
            forced_width: self.forced_width.or(parent.forced_width),
        }
    }

    pub fn role(&self) -> UnitRole {
        if self.in_label {
            UnitRole::Label
        } else if self.in_list_body {
            UnitRole::ListBody
        } else if self.in_table_cell {
            UnitRole::TableCell
        } else {
            UnitRole::Flow
        }
    }

    /// The inline span content of `node` occupies.
    ///
    /// Forced geometry wins. Otherwise list bodies start at the body indent
    /// and labels are as wide as the distance between starts minus the
    /// label separation.
    pub fn inline_span(&self, node: NodeId) -> Result<Span, LayoutError> {
        let start = match self.forced_start_offset {
            Some(offset) => offset,
            None if self.in_list_body => self.body_indent.unwrap_or(0.0),
            None => 0.0,
        };

        let width = match (self.forced_width, self.distance_between_starts) {
            (Some(w), _) => Some(w),
            (None, Some(distance)) if self.in_label => {
                Some(distance - self.label_separation.unwrap_or(0.0))
            }
            _ => None,
        };

        if start < 0.0 {
            return Err(LayoutError::MalformedNode {
                node,
                reason: format!("negative start offset {start:.2}"),
            });
        }
        if let Some(w) = width
            && w < 0.0
        {
            return Err(LayoutError::MalformedNode {
                node,
                reason: format!("negative content width {w:.2}"),
            });
        }

        Ok(Span::new(start, width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_accumulate_and_numbers_inherit() {
        let mut parent = LayoutParams::new();
        parent.set_in_list_body();
        parent.set_body_indent(36.0);

        let mut child = LayoutParams::new();
        child.set_in_table_cell();
        child.set_body_indent(12.0);

        let resolved = child.inherit(&parent);
        assert!(resolved.in_list_body());
        assert!(resolved.in_table_cell());
        assert!(!resolved.in_label());
        assert_eq!(resolved.body_indent(), Some(12.0));
    }

    #[test]
    fn test_label_span_width() {
        let mut params = LayoutParams::new();
        params.set_in_label();
        params.set_distance_between_starts(24.0);
        params.set_label_separation(6.0);

        let span = params.inline_span(NodeId::new(3)).unwrap();
        assert_eq!(span, Span::new(0.0, Some(18.0)));
        assert_eq!(params.role(), UnitRole::Label);
    }

    #[test]
    fn test_list_body_starts_at_body_indent() {
        let mut params = LayoutParams::new();
        params.set_in_list_body();
        params.set_body_indent(24.0);

        assert_eq!(params.inline_span(NodeId::new(0)).unwrap(), Span::new(24.0, None));
        assert_eq!(params.role(), UnitRole::ListBody);
    }

    #[test]
    fn test_forced_geometry_wins() {
        let mut params = LayoutParams::new();
        params.set_in_list_body();
        params.set_body_indent(24.0);
        params.force_start_offset(100.0);
        params.force_width(50.0);

        assert_eq!(params.inline_span(NodeId::new(0)).unwrap(), Span::new(100.0, Some(50.0)));
    }

    #[test]
    fn test_label_wider_than_distance_is_malformed() {
        let mut params = LayoutParams::new();
        params.set_in_label();
        params.set_distance_between_starts(10.0);
        params.set_label_separation(20.0);

        let err = params.inline_span(NodeId::new(7)).unwrap_err();
        assert_eq!(err.node(), Some(NodeId::new(7)));
    }
}
