/// Inline placement of a content unit relative to the start edge of its area.
///
/// `width` is `None` when the unit may use the full inline extent of the area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Span {
    pub start: f32,
    pub width: Option<f32>,
}

impl Span {
    pub fn new(start: f32, width: Option<f32>) -> Self {
        Self { start, width }
    }

    /// A span starting at the area's start edge with no width restriction.
    pub fn full() -> Self {
        Self::default()
    }

    pub fn end(&self) -> Option<f32> {
        self.width.map(|w| self.start + w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_end() {
        assert_eq!(Span::full().end(), None);
        assert_eq!(Span::new(18.0, Some(36.0)).end(), Some(54.0));
    }
}
