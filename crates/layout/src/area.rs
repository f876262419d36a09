use folio_traits::{Area, ContentUnit, Placement};

const EPSILON: f32 = 0.01;

/// A unit that was accepted by an area, with its position along the fill
/// direction.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedUnit {
    pub unit: ContentUnit,
    pub offset: f32,
}

/// An area with a fixed capacity that fills in one direction and records
/// every unit it accepts.
#[derive(Debug, Clone)]
pub struct FlowArea {
    capacity: f32,
    used: f32,
    units: Vec<PlacedUnit>,
}

impl FlowArea {
    pub fn new(capacity: f32) -> Self {
        Self {
            capacity: capacity.max(0.0),
            used: 0.0,
            units: Vec::new(),
        }
    }

    /// An area that never runs out of room.
    pub fn unbounded() -> Self {
        Self::new(f32::INFINITY)
    }

    pub fn capacity(&self) -> f32 {
        self.capacity
    }

    pub fn used(&self) -> f32 {
        self.used
    }

    pub fn remaining(&self) -> f32 {
        (self.capacity - self.used).max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[PlacedUnit] {
        &self.units
    }

    pub fn into_units(self) -> Vec<PlacedUnit> {
        self.units
    }

    /// The glyphs placed so far, in placement order.
    pub fn text(&self) -> String {
        self.units.iter().filter_map(|p| p.unit.glyph).collect()
    }
}

impl Area for FlowArea {
    fn is_exhausted(&self) -> bool {
        self.remaining() < EPSILON
    }

    fn try_place(&mut self, unit: &ContentUnit) -> Placement {
        if unit.extent > self.remaining() + EPSILON {
            return Placement::NoRoom {
                remaining: self.remaining(),
            };
        }
        self.units.push(PlacedUnit {
            unit: unit.clone(),
            offset: self.used,
        });
        self.used += unit.extent;
        Placement::Placed {
            remaining: self.remaining(),
        }
    }

    fn max_extent(&self) -> f32 {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_traits::UnitRole;
    use folio_types::{NodeId, Span};

    fn unit(extent: f32, glyph: char) -> ContentUnit {
        ContentUnit {
            node: NodeId::new(0),
            index: 0,
            extent,
            span: Span::full(),
            role: UnitRole::Flow,
            glyph: Some(glyph),
        }
    }

    #[test]
    fn test_accepts_until_full() {
        let mut area = FlowArea::new(3.0);

        assert_eq!(area.try_place(&unit(2.0, 'a')), Placement::Placed { remaining: 1.0 });
        assert!(!area.is_exhausted());
        assert_eq!(area.try_place(&unit(2.0, 'b')), Placement::NoRoom { remaining: 1.0 });
        assert_eq!(area.try_place(&unit(1.0, 'c')), Placement::Placed { remaining: 0.0 });
        assert!(area.is_exhausted());

        assert_eq!(area.text(), "ac");
        assert_eq!(area.units()[1].offset, 2.0);
    }

    #[test]
    fn test_unbounded_area_never_exhausts() {
        let mut area = FlowArea::unbounded();
        for _ in 0..1000 {
            assert!(area.try_place(&unit(50.0, 'x')).is_placed());
        }
        assert!(!area.is_exhausted());
        assert_eq!(area.units().len(), 1000);
    }
}
