use crate::LayoutError;
use folio_traits::{Area, ContentUnit, Placement};
use folio_types::{BreakKind, NodeId};
use std::fmt::Debug;

// --- Resumption State ---

/// How far a node has got with placing its own content.
///
/// For containers the position is the index of the next child to attempt;
/// for leaves it is an offset into the leaf's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Marker {
    /// Nothing placed yet in this pass.
    #[default]
    Start,
    /// Resume at this child index or content offset.
    At(usize),
    /// All content is placed and an explicit break follows it.
    BreakAfter,
}

impl Marker {
    /// The index or offset layout resumes from. `BreakAfter` has none.
    pub fn position(self) -> Option<usize> {
        match self {
            Marker::Start => Some(0),
            Marker::At(n) => Some(n),
            Marker::BreakAfter => None,
        }
    }

    pub fn is_done(self, len: usize) -> bool {
        self == Marker::At(len)
    }

    /// Total progress order for a node with `len` units:
    /// `Start < At(0) < .. < At(len - 1) < BreakAfter < At(len)`.
    pub fn rank(self, len: usize) -> usize {
        match self {
            Marker::Start => 0,
            Marker::At(n) => 2 * n + 1,
            Marker::BreakAfter => 2 * len,
        }
    }
}

/// Outcome of a single layout call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStatus {
    /// Everything from the previous marker to the end fit.
    Complete,
    /// Nothing could be placed; the marker is unchanged.
    AreaExhaustedEmpty,
    /// Some content was placed; the marker points at the first unplaced unit.
    AreaExhaustedPartial,
    /// An explicit break is pending; the marker is past the break point.
    ForcedBreak(BreakKind),
}

impl LayoutStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, LayoutStatus::Complete)
    }

    pub fn is_area_exhausted(&self) -> bool {
        matches!(
            self,
            LayoutStatus::AreaExhaustedEmpty | LayoutStatus::AreaExhaustedPartial
        )
    }

    pub fn break_kind(&self) -> Option<BreakKind> {
        match self {
            LayoutStatus::ForcedBreak(kind) => Some(*kind),
            _ => None,
        }
    }
}

// --- Context and Environment ---

/// Read-only data about where the current area sits in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutEnvironment {
    pub page_number: usize,
    /// Index of the area on its page, starting at 0.
    pub area_index: usize,
}

/// Everything a node may touch during one layout call. The area is
/// borrowed for the duration of the call only.
pub struct LayoutContext<'a> {
    pub env: LayoutEnvironment,
    area: &'a mut dyn Area,
}

impl<'a> LayoutContext<'a> {
    pub fn new(area: &'a mut dyn Area, env: LayoutEnvironment) -> Self {
        Self { env, area }
    }

    pub fn is_exhausted(&self) -> bool {
        self.area.is_exhausted()
    }

    pub fn try_place(&mut self, unit: &ContentUnit) -> Placement {
        self.area.try_place(unit)
    }

    pub fn max_extent(&self) -> f32 {
        self.area.max_extent()
    }
}

/// The suspend/resume contract every formatting node implements.
///
/// `layout` places a prefix of the node's remaining content into the
/// context's area and leaves the node's marker at the exact point the next
/// call resumes from. Nodes hold no other hidden progress state.
pub trait LayoutNode: Debug {
    fn id(&self) -> NodeId;

    fn marker(&self) -> Marker;

    /// Number of resumable units: children for containers, content offsets
    /// for leaves.
    fn content_len(&self) -> usize;

    fn layout(&mut self, ctx: &mut LayoutContext) -> Result<LayoutStatus, LayoutError>;

    /// Rewinds this node and all of its descendants to `Marker::Start`.
    /// Only valid between passes.
    fn reset_marker(&mut self);

    fn is_done(&self) -> bool {
        self.marker().is_done(self.content_len())
    }
}
