use super::NodeBase;
use crate::LayoutError;
use crate::fonts::LazyFont;
use crate::interface::{LayoutContext, LayoutNode, LayoutStatus, Marker};
use folio_traits::{ContentUnit, FontMetrics};
use folio_types::{BreakKind, NodeId};
use std::sync::Arc;

/// Embedded in text content, this character requests a page break at its
/// position. It occupies one offset but is never placed.
pub const FORCED_BREAK_CHAR: char = '\u{000C}';

const EPSILON: f32 = 0.01;

/// How a text leaf turns characters into extents.
#[derive(Debug, Clone)]
pub enum TextMeasure {
    /// Every character has the same extent.
    Uniform(f32),
    /// Advance widths from a font at `size` points.
    Font { font: Arc<LazyFont>, size: f32 },
}

impl TextMeasure {
    /// Extent of `ch` when it follows `prev` on the same run.
    pub fn extent(&self, prev: Option<char>, ch: char) -> f32 {
        match self {
            TextMeasure::Uniform(extent) => *extent,
            TextMeasure::Font { font, size } => {
                let kern = prev.map_or(0.0, |p| font.kerning(p, ch, *size));
                (font.width(ch, *size) + kern).max(0.0)
            }
        }
    }

    fn glyph(&self, ch: char) -> char {
        match self {
            TextMeasure::Uniform(_) => ch,
            TextMeasure::Font { font, .. } => font.map_char(ch),
        }
    }
}

/// A leaf holding a run of characters. The marker is a character offset.
#[derive(Debug)]
pub struct TextNode {
    pub(crate) base: NodeBase,
    chars: Vec<char>,
    measure: TextMeasure,
}

impl TextNode {
    pub(crate) fn new(base: NodeBase, text: &str, measure: TextMeasure) -> Self {
        Self {
            base,
            chars: text.chars().collect(),
            measure,
        }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn measure(&self) -> &TextMeasure {
        &self.measure
    }
}

impl LayoutNode for TextNode {
    fn id(&self) -> NodeId {
        self.base.id
    }

    fn marker(&self) -> Marker {
        self.base.marker
    }

    fn content_len(&self) -> usize {
        self.chars.len()
    }

    fn layout(&mut self, ctx: &mut LayoutContext) -> Result<LayoutStatus, LayoutError> {
        let len = self.chars.len();
        let start = self.base.marker.position().unwrap_or(len);
        if start >= len {
            self.base.marker = Marker::At(len);
            return Ok(LayoutStatus::Complete);
        }

        let span = self.base.params.inline_span(self.base.id)?;
        let role = self.base.params.role();
        let max_extent = ctx.max_extent();

        let mut offset = start;
        while offset < len {
            let ch = self.chars[offset];
            if ch == FORCED_BREAK_CHAR {
                offset += 1;
                self.base.marker = if offset == len {
                    Marker::BreakAfter
                } else {
                    Marker::At(offset)
                };
                return Ok(LayoutStatus::ForcedBreak(BreakKind::Page));
            }
            if ctx.is_exhausted() {
                break;
            }

            let prev = offset.checked_sub(1).map(|i| self.chars[i]);
            let unit = ContentUnit {
                node: self.base.id,
                index: offset,
                extent: self.measure.extent(prev, ch),
                span,
                role,
                glyph: Some(self.measure.glyph(ch)),
            };
            if unit.extent > max_extent + EPSILON {
                return Err(LayoutError::Unplaceable {
                    node: self.base.id,
                    extent: unit.extent,
                    max: max_extent,
                });
            }
            if !ctx.try_place(&unit).is_placed() {
                break;
            }
            offset += 1;
        }

        if offset == len {
            self.base.marker = Marker::At(len);
            Ok(LayoutStatus::Complete)
        } else if offset == start {
            Ok(LayoutStatus::AreaExhaustedEmpty)
        } else {
            self.base.marker = Marker::At(offset);
            Ok(LayoutStatus::AreaExhaustedPartial)
        }
    }

    fn reset_marker(&mut self) {
        self.base.marker = Marker::Start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::FlowArea;
    use crate::interface::LayoutEnvironment;
    use crate::params::LayoutParams;

    fn leaf(text: &str) -> TextNode {
        TextNode::new(
            NodeBase::new(NodeId::new(1), None, LayoutParams::new()),
            text,
            TextMeasure::Uniform(1.0),
        )
    }

    fn run(node: &mut TextNode, capacity: f32) -> (LayoutStatus, String) {
        let mut area = FlowArea::new(capacity);
        let status = {
            let mut ctx = LayoutContext::new(&mut area, LayoutEnvironment::default());
            node.layout(&mut ctx).unwrap()
        };
        (status, area.text())
    }

    #[test]
    fn test_leaf_places_prefix_then_resumes() {
        let mut node = leaf("hello");

        assert_eq!(run(&mut node, 3.0), (LayoutStatus::AreaExhaustedPartial, "hel".to_string()));
        assert_eq!(node.marker(), Marker::At(3));

        assert_eq!(run(&mut node, 10.0), (LayoutStatus::Complete, "lo".to_string()));
        assert!(node.is_done());
    }

    #[test]
    fn test_leaf_in_full_area_leaves_marker_untouched() {
        let mut node = leaf("abc");

        assert_eq!(run(&mut node, 0.0).0, LayoutStatus::AreaExhaustedEmpty);
        assert_eq!(node.marker(), Marker::Start);
    }

    #[test]
    fn test_empty_text_completes_immediately() {
        let mut node = leaf("");
        assert_eq!(run(&mut node, 0.0).0, LayoutStatus::Complete);
        assert_eq!(node.marker(), Marker::At(0));
    }

    #[test]
    fn test_embedded_break_resumes_past_break_point() {
        let mut node = leaf("ab\u{000C}cd");

        assert_eq!(run(&mut node, 10.0), (LayoutStatus::ForcedBreak(BreakKind::Page), "ab".to_string()));
        assert_eq!(node.marker(), Marker::At(3));

        assert_eq!(run(&mut node, 10.0), (LayoutStatus::Complete, "cd".to_string()));
        assert_eq!(node.marker(), Marker::At(5));
    }

    #[test]
    fn test_trailing_break_marks_break_after() {
        let mut node = leaf("ab\u{000C}");

        assert_eq!(run(&mut node, 10.0).0, LayoutStatus::ForcedBreak(BreakKind::Page));
        assert_eq!(node.marker(), Marker::BreakAfter);
        assert!(!node.is_done());

        assert_eq!(run(&mut node, 10.0), (LayoutStatus::Complete, String::new()));
        assert!(node.is_done());
    }

    #[test]
    fn test_unit_larger_than_any_area_is_an_error() {
        let mut node = TextNode::new(
            NodeBase::new(NodeId::new(9), None, LayoutParams::new()),
            "x",
            TextMeasure::Uniform(20.0),
        );
        let mut area = FlowArea::new(10.0);
        let mut ctx = LayoutContext::new(&mut area, LayoutEnvironment::default());

        let err = node.layout(&mut ctx).unwrap_err();
        assert_eq!(err.node(), Some(NodeId::new(9)));
        assert!(matches!(err, LayoutError::Unplaceable { .. }));
    }

    #[test]
    fn test_malformed_label_params_fail_layout() {
        let mut params = LayoutParams::new();
        params.set_in_label();
        params.set_distance_between_starts(5.0);
        params.set_label_separation(8.0);
        let mut node = TextNode::new(NodeBase::new(NodeId::new(4), None, params), "1.", TextMeasure::Uniform(1.0));
        let mut area = FlowArea::new(10.0);
        let mut ctx = LayoutContext::new(&mut area, LayoutEnvironment::default());

        assert!(matches!(node.layout(&mut ctx), Err(LayoutError::MalformedNode { .. })));
    }
}
