//! JSON description of a formatting-object tree.
//!
//! ```json
//! {
//!   "fonts": { "Helvetica": { "metrics": "fonts/helvetica.json", "kerning": true } },
//!   "content": [
//!     { "type": "Block", "breakBefore": "odd-page", "children": [
//!       { "type": "Text", "content": "Hello", "font": "Helvetica", "size": 10 }
//!     ]},
//!     { "type": "PageBreak", "kind": "even-page" }
//!   ]
//! }
//! ```

use crate::config::FolioConfig;
use crate::error::FolioError;
use folio_layout::{BreakKind, FontRegistry, LazyFont, NodeSpec, TextMeasure};
use folio_traits::ResourceProvider;
use folio_types::ResourceUri;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// A font the document refers to by family name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDecl {
    /// Resource path of the JSON metrics file.
    pub metrics: String,
    /// Resource path of the embeddable font program, if any.
    #[serde(default)]
    pub embed: Option<String>,
    #[serde(default)]
    pub kerning: bool,
}

impl FontDecl {
    pub fn to_lazy_font(&self, provider: Arc<dyn ResourceProvider>) -> LazyFont {
        LazyFont::new(
            self.metrics.as_str(),
            self.embed.as_deref().map(ResourceUri::from),
            self.kerning,
            provider,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum DocumentNode {
    Block {
        #[serde(default)]
        children: Vec<DocumentNode>,
        #[serde(default)]
        break_before: Option<BreakKind>,
        #[serde(default)]
        break_after: Option<BreakKind>,
    },
    Text {
        content: String,
        /// Family name declared under `fonts`. Without it every character
        /// has the configured uniform extent.
        #[serde(default)]
        font: Option<String>,
        #[serde(default)]
        size: Option<f32>,
    },
    PageBreak {
        #[serde(default)]
        kind: BreakKind,
    },
    ListItem {
        #[serde(default)]
        label: Vec<DocumentNode>,
        #[serde(default)]
        body: Vec<DocumentNode>,
        distance_between_starts: f32,
        #[serde(default)]
        label_separation: f32,
    },
    TableCell {
        #[serde(default)]
        children: Vec<DocumentNode>,
        start: f32,
        width: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub fonts: BTreeMap<String, FontDecl>,
    #[serde(default)]
    pub content: Vec<DocumentNode>,
}

impl Document {
    pub fn from_json(source: &str) -> Result<Self, FolioError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FolioError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            FolioError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read document from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }

    /// Adds the document's font declarations to `registry`.
    pub fn register_fonts(&self, registry: &mut FontRegistry, provider: &Arc<dyn ResourceProvider>) {
        for (family, decl) in &self.fonts {
            log::debug!("Registering font '{}' with metrics {}", family, decl.metrics);
            registry.register(family, decl.to_lazy_font(Arc::clone(provider)));
        }
    }

    /// Converts the document into an assembly description rooted at a
    /// single root node.
    pub fn to_spec(&self, fonts: &FontRegistry, config: &FolioConfig) -> Result<NodeSpec, FolioError> {
        let children = convert_all(&self.content, fonts, config)?;
        Ok(NodeSpec::root(children))
    }
}

fn convert_all(
    nodes: &[DocumentNode],
    fonts: &FontRegistry,
    config: &FolioConfig,
) -> Result<Vec<NodeSpec>, FolioError> {
    nodes.iter().map(|n| convert(n, fonts, config)).collect()
}

fn convert(node: &DocumentNode, fonts: &FontRegistry, config: &FolioConfig) -> Result<NodeSpec, FolioError> {
    let spec = match node {
        DocumentNode::Block {
            children,
            break_before,
            break_after,
        } => {
            let mut block = NodeSpec::block(convert_all(children, fonts, config)?);
            if let Some(kind) = break_before {
                block = block.with_break_before(*kind);
            }
            if let Some(kind) = break_after {
                block = block.with_break_after(*kind);
            }
            block
        }
        DocumentNode::Text { content, font, size } => {
            let measure = match font {
                Some(family) => {
                    let font = fonts
                        .get(family)
                        .ok_or_else(|| FolioError::Document(format!("Unknown font family '{family}'")))?;
                    TextMeasure::Font {
                        font,
                        size: size.unwrap_or(config.default_font_size),
                    }
                }
                None => TextMeasure::Uniform(config.uniform_extent),
            };
            NodeSpec::text(content.as_str(), measure)
        }
        DocumentNode::PageBreak { kind } => NodeSpec::page_break(*kind),
        DocumentNode::ListItem {
            label,
            body,
            distance_between_starts,
            label_separation,
        } => NodeSpec::list_item(
            convert_all(label, fonts, config)?,
            convert_all(body, fonts, config)?,
            *distance_between_starts,
            *label_separation,
        ),
        DocumentNode::TableCell { children, start, width } => {
            NodeSpec::table_cell(convert_all(children, fonts, config)?, *start, *width)
        }
    };
    Ok(spec)
}
