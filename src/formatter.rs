use crate::config::FolioConfig;
use crate::document::{Document, FontDecl};
use crate::error::FolioError;
use folio_layout::{FoTree, FontRegistry, LayoutConfig, LayoutEngine, PageOutput, TreeBuilder};
use folio_resource::FilesystemResourceProvider;
use folio_traits::ResourceProvider;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating a `Formatter`.
#[derive(Debug, Default)]
pub struct FormatterBuilder {
    config: FolioConfig,
    provider: Option<Arc<dyn ResourceProvider>>,
    fonts: Vec<(String, FontDecl)>,
}

impl FormatterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: FolioConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads settings from a JSON configuration file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, FolioError> {
        self.config = FolioConfig::from_file(path)?;
        Ok(self)
    }

    /// Replaces only the page geometry, keeping the other settings.
    pub fn with_layout_config(mut self, layout: LayoutConfig) -> Self {
        self.config.layout = layout;
        self
    }

    /// Where fonts load their metrics from. Overrides `resource_root`.
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_resource_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.resource_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Declares a font available to every document, in addition to the
    /// fonts a document declares itself.
    pub fn with_font(mut self, family: &str, decl: FontDecl) -> Self {
        self.fonts.push((family.to_string(), decl));
        self
    }

    pub fn build(self) -> Result<Formatter, FolioError> {
        self.config.validate()?;
        let engine = LayoutEngine::new(self.config.layout)?;

        let provider = match self.provider {
            Some(provider) => provider,
            None => {
                let root = self.config.resource_root.clone().unwrap_or_else(|| PathBuf::from("."));
                log::debug!("Resolving font resources under {}", root.display());
                Arc::new(FilesystemResourceProvider::new(root))
            }
        };

        let mut fonts = FontRegistry::new();
        for (family, decl) in &self.fonts {
            fonts.register(family, decl.to_lazy_font(Arc::clone(&provider)));
        }

        Ok(Formatter {
            engine,
            config: self.config,
            provider,
            fonts,
        })
    }
}

/// Assembles documents into formatting trees and paginates them.
#[derive(Debug)]
pub struct Formatter {
    engine: LayoutEngine,
    config: FolioConfig,
    provider: Arc<dyn ResourceProvider>,
    fonts: FontRegistry,
}

impl Formatter {
    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Fonts declared on the builder.
    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Builds the formatting tree for `document` without laying it out.
    pub fn assemble(&self, document: &Document) -> Result<FoTree, FolioError> {
        let mut fonts = self.fonts.clone();
        document.register_fonts(&mut fonts, &self.provider);
        let spec = document.to_spec(&fonts, &self.config)?;
        Ok(TreeBuilder::build(spec)?)
    }

    pub fn format(&self, document: &Document) -> Result<Vec<PageOutput>, FolioError> {
        let mut tree = self.assemble(document)?;
        let pages = self.engine.paginate_all(&mut tree)?;
        log::info!("Formatted {} pages ({} nodes)", pages.len(), tree.len());
        Ok(pages)
    }

    pub fn format_json(&self, source: &str) -> Result<Vec<PageOutput>, FolioError> {
        self.format(&Document::from_json(source)?)
    }

    pub fn format_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<PageOutput>, FolioError> {
        self.format(&Document::from_file(path)?)
    }
}
