use serde::{Deserialize, Serialize};

/// The kind of an explicit page break, matching the `break-before` and
/// `break-after` values of formatting objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreakKind {
    /// Next page, any parity.
    #[default]
    Page,
    /// Next even-numbered page.
    EvenPage,
    /// Next odd-numbered page.
    OddPage,
}

impl BreakKind {
    /// Whether content may start on `page_number` after this break.
    pub fn accepts(self, page_number: usize) -> bool {
        match self {
            BreakKind::Page => true,
            BreakKind::EvenPage => page_number % 2 == 0,
            BreakKind::OddPage => page_number % 2 == 1,
        }
    }

    /// Merges two breaks that fall on the same position. A parity
    /// requirement always survives; between two parities the outer one wins.
    pub fn combine(self, outer: BreakKind) -> BreakKind {
        match outer {
            BreakKind::Page => self,
            parity => parity,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BreakKind::Page => "page",
            BreakKind::EvenPage => "even-page",
            BreakKind::OddPage => "odd-page",
        }
    }
}
