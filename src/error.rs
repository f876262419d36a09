use folio_layout::LayoutError;
use thiserror::Error;

/// Errors from loading, assembling or paginating a document.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Document is invalid: {0}")]
    Document(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        FolioError::Document(e.to_string())
    }
}

impl FolioError {
    /// The node a layout failure originated in, when known.
    pub fn node(&self) -> Option<folio_types::NodeId> {
        match self {
            FolioError::Layout(e) => e.node(),
            _ => None,
        }
    }
}
