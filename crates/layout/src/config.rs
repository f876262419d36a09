use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// Page geometry and limits for the pagination driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Capacity of each flow area along the fill direction, in points.
    ///
    /// Defaults to `500.0`.
    pub area_extent: f32,
    /// Number of flow areas (columns) filled in order before the page is
    /// finished.
    ///
    /// Defaults to `1`.
    pub areas_per_page: usize,
    /// Number given to the first page. Its parity decides which forced
    /// even/odd breaks need a blank page.
    ///
    /// Defaults to `1`.
    pub first_page_number: usize,
    /// Upper bound on emitted pages, blank pages included.
    ///
    /// Defaults to `10000`.
    pub max_pages: usize,
    /// Whether page numbers skipped to satisfy an even/odd break produce
    /// blank pages. When off the numbers are skipped silently.
    ///
    /// Defaults to `true`.
    pub emit_blank_pages: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            area_extent: 500.0,
            areas_per_page: 1,
            first_page_number: 1,
            max_pages: 10_000,
            emit_blank_pages: true,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.area_extent.is_finite() || self.area_extent <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "area extent must be a positive number, got {}",
                self.area_extent
            )));
        }
        if self.areas_per_page == 0 {
            return Err(LayoutError::InvalidConfiguration(
                "a page needs at least one area".to_string(),
            ));
        }
        if self.max_pages == 0 {
            return Err(LayoutError::InvalidConfiguration(
                "page limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
