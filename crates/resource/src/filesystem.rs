//! Loads resources relative to a base directory, usually the directory that
//! holds the document or its font metrics.
//!
//! Paths are confined to the base directory: absolute paths and any path
//! containing a `..` component are rejected before touching the disk.

use folio_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FilesystemResourceProvider {
    root: PathBuf,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn confine(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full = self.confine(path).ok_or_else(|| {
            log::warn!("Rejected resource path outside of {}: {}", self.root.display(), path);
            ResourceError::NotFound(format!("{path} (outside resource root)"))
        })?;

        match std::fs::read(&full) {
            Ok(bytes) => {
                log::debug!("Loaded {} bytes from {}", bytes.len(), full.display());
                Ok(Arc::new(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ResourceError::NotFound(path.to_string())),
            Err(e) => Err(ResourceError::LoadFailed {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn exists(&self, path: &str) -> bool {
        self.confine(path).is_some_and(|p| p.is_file())
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
