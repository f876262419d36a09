//! The rendering-area boundary.
//!
//! The layout core never measures or draws anything itself. It hands one
//! `ContentUnit` at a time to an `Area` and reacts to whether the area
//! accepted it. Geometry, fonts and output encoding live behind this trait.

use folio_types::{NodeId, Span};

/// Structural position of a unit, derived from the context flags of the
/// node that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitRole {
    #[default]
    Flow,
    Label,
    ListBody,
    TableCell,
}

/// One indivisible piece of content offered to an area.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentUnit {
    /// The node that produced this unit.
    pub node: NodeId,
    /// Offset of the unit inside its node's content.
    pub index: usize,
    /// Capacity the unit consumes along the area's fill direction.
    pub extent: f32,
    pub span: Span,
    pub role: UnitRole,
    /// The character this unit renders, if any.
    pub glyph: Option<char>,
}

/// Outcome of offering a unit to an area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    Placed { remaining: f32 },
    NoRoom { remaining: f32 },
}

impl Placement {
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }

    pub fn remaining(&self) -> f32 {
        match self {
            Placement::Placed { remaining } | Placement::NoRoom { remaining } => *remaining,
        }
    }
}

/// A bounded rendering target.
///
/// Areas are borrowed for a single layout call. Implementations must be
/// deterministic: the same sequence of units offered to two fresh areas of
/// the same shape must be accepted identically.
pub trait Area {
    /// Whether the area can accept no further content at all.
    fn is_exhausted(&self) -> bool;

    /// Attempts to place one unit, reporting the capacity left afterwards.
    fn try_place(&mut self, unit: &ContentUnit) -> Placement;

    /// The capacity of a fresh area of this shape. A unit larger than this
    /// can never be placed, whatever area is supplied next.
    fn max_extent(&self) -> f32;
}
