//! Resource providers for folio.
//!
//! - [`FilesystemResourceProvider`]: font metrics and font files from a directory
//! - [`InMemoryResourceProvider`]: re-exported from folio-traits

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use folio_traits::InMemoryResourceProvider;
