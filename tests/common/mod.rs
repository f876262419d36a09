pub mod fixtures;

use folio::{FolioConfig, FolioError, FormatterBuilder, LayoutConfig, PageOutput};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A configuration where text without a font measures one point per
/// character, so page contents are easy to predict.
pub fn config(area_extent: f32) -> FolioConfig {
    FolioConfig {
        layout: LayoutConfig {
            area_extent,
            ..Default::default()
        },
        uniform_extent: 1.0,
        ..Default::default()
    }
}

/// Formats a JSON document value with `config`.
pub fn format_with(config: FolioConfig, document: &Value) -> Result<Vec<PageOutput>, FolioError> {
    init_logger();
    let formatter = FormatterBuilder::new().with_config(config).build()?;
    formatter.format_json(&serde_json::to_string(document)?)
}

/// Page text per page; blank pages show as `None`.
pub fn texts(pages: &[PageOutput]) -> Vec<Option<String>> {
    pages.iter().map(|p| (!p.is_blank).then(|| p.text())).collect()
}

pub fn numbers(pages: &[PageOutput]) -> Vec<usize> {
    pages.iter().map(|p| p.number).collect()
}
