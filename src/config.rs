use crate::error::FolioError;
use folio_layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Settings for a `Formatter`, read from JSON with camelCase keys.
///
/// The page geometry keys (`areaExtent`, `areasPerPage`, ...) sit at the top
/// level next to the formatter's own keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FolioConfig {
    #[serde(flatten)]
    pub layout: LayoutConfig,
    /// Extent of every character of text that names no font.
    pub uniform_extent: f32,
    /// Font size for text that names a font but no size.
    pub default_font_size: f32,
    /// Directory font resources are resolved against. Defaults to the
    /// directory of the document file, or the working directory.
    pub resource_root: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            uniform_extent: 6.0,
            default_font_size: 12.0,
            resource_root: None,
        }
    }
}

impl FolioConfig {
    pub fn from_json(source: &str) -> Result<Self, FolioError> {
        let config: FolioConfig =
            serde_json::from_str(source).map_err(|e| FolioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FolioError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            FolioError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read configuration from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        self.layout
            .validate()
            .map_err(|e| FolioError::Config(e.to_string()))?;
        if !self.uniform_extent.is_finite() || self.uniform_extent < 0.0 {
            return Err(FolioError::Config(format!(
                "uniformExtent must be a non-negative number, got {}",
                self.uniform_extent
            )));
        }
        if !self.default_font_size.is_finite() || self.default_font_size <= 0.0 {
            return Err(FolioError::Config(format!(
                "defaultFontSize must be positive, got {}",
                self.default_font_size
            )));
        }
        Ok(())
    }
}
