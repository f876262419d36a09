//! Resumable pagination of formatting-object trees.
//!
//! Documents are described in JSON, assembled into a tree of formatting
//! nodes and laid out page by page. Each node remembers how far it got, so a
//! page driver can hand it a fresh area and continue exactly where the
//! previous area ran out.

pub mod config;
pub mod document;
pub mod error;
pub mod formatter;

pub use config::FolioConfig;
pub use document::{Document, DocumentNode, FontDecl};
pub use error::FolioError;
pub use formatter::{Formatter, FormatterBuilder};

pub use folio_layout::{
    BreakKind, FoTree, LayoutConfig, LayoutEngine, LayoutError, LayoutStatus, Marker, NodeSpec, PageOutput,
    PlacedUnit, TextMeasure, TreeBuilder, UnitRole,
};
pub use folio_resource::{FilesystemResourceProvider, InMemoryResourceProvider};
