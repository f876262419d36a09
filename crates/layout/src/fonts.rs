//! Font metrics for text measurement.
//!
//! Metrics are described by a JSON metrics file (widths and kerning in
//! 1/1000 em). A `LazyFont` defers reading that file until the first real
//! use of any accessor and falls back to generic metrics when the file
//! cannot be read, so a missing font degrades output instead of aborting it.

use folio_traits::{FontDescriptor, FontError, FontMetrics, FontType, ResourceProvider};
use folio_types::ResourceUri;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

fn default_encoding() -> String {
    "WinAnsiEncoding".to_string()
}

fn default_width() -> i32 {
    500
}

fn embeddable_by_default() -> bool {
    true
}

/// Parsed contents of a font metrics file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsFile {
    pub font_name: String,
    #[serde(default = "default_encoding")]
    pub encoding: String,
    #[serde(default)]
    pub multi_byte: bool,
    #[serde(default)]
    pub ascender: i32,
    #[serde(default)]
    pub descender: i32,
    #[serde(default)]
    pub cap_height: i32,
    #[serde(default)]
    pub x_height: i32,
    /// Width of characters missing from `widths`.
    #[serde(default = "default_width")]
    pub default_width: i32,
    #[serde(default)]
    pub widths: HashMap<char, i32>,
    /// Kerning keyed by the two-character pair, e.g. `"AV": -70`.
    #[serde(default)]
    kerning: HashMap<String, i32>,
    #[serde(default)]
    pub char_map: HashMap<char, char>,
    #[serde(default)]
    pub flags: u32,
    #[serde(default)]
    pub font_bbox: [i32; 4],
    #[serde(default)]
    pub italic_angle: i32,
    #[serde(default)]
    pub stem_v: i32,
    #[serde(default)]
    font_type: Option<String>,
    #[serde(default = "embeddable_by_default")]
    pub embeddable: bool,
    #[serde(skip)]
    kerning_pairs: HashMap<(char, char), i32>,
}

impl MetricsFile {
    pub fn from_slice(uri: &str, bytes: &[u8]) -> Result<Self, FontError> {
        let mut metrics: MetricsFile =
            serde_json::from_slice(bytes).map_err(|e| FontError::InvalidMetrics {
                uri: uri.to_string(),
                message: e.to_string(),
            })?;

        for (pair, adjustment) in &metrics.kerning {
            let mut chars = pair.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(left), Some(right), None) => {
                    metrics.kerning_pairs.insert((left, right), *adjustment);
                }
                _ => {
                    return Err(FontError::InvalidMetrics {
                        uri: uri.to_string(),
                        message: format!("kerning key '{pair}' is not a character pair"),
                    });
                }
            }
        }
        Ok(metrics)
    }

    /// Generic metrics used when a font cannot be resolved.
    pub fn fallback() -> Self {
        Self {
            font_name: "Fallback".to_string(),
            encoding: default_encoding(),
            multi_byte: false,
            ascender: 750,
            descender: -250,
            cap_height: 700,
            x_height: 500,
            default_width: default_width(),
            widths: HashMap::new(),
            kerning: HashMap::new(),
            char_map: HashMap::new(),
            flags: 0,
            font_bbox: [0, -250, 1000, 750],
            italic_angle: 0,
            stem_v: 0,
            font_type: None,
            embeddable: false,
            kerning_pairs: HashMap::new(),
        }
    }

    fn scale(value: i32, size: f32) -> f32 {
        value as f32 * size / 1000.0
    }
}

impl FontMetrics for MetricsFile {
    fn font_name(&self) -> &str {
        &self.font_name
    }

    fn encoding(&self) -> &str {
        &self.encoding
    }

    fn map_char(&self, ch: char) -> char {
        self.char_map.get(&ch).copied().unwrap_or(ch)
    }

    fn is_multi_byte(&self) -> bool {
        self.multi_byte
    }

    fn ascender(&self, size: f32) -> f32 {
        Self::scale(self.ascender, size)
    }

    fn descender(&self, size: f32) -> f32 {
        Self::scale(self.descender, size)
    }

    fn cap_height(&self, size: f32) -> f32 {
        Self::scale(self.cap_height, size)
    }

    fn x_height(&self, size: f32) -> f32 {
        Self::scale(self.x_height, size)
    }

    fn width(&self, ch: char, size: f32) -> f32 {
        let width = self.widths.get(&ch).copied().unwrap_or(self.default_width);
        Self::scale(width, size)
    }

    fn has_kerning_info(&self) -> bool {
        !self.kerning_pairs.is_empty()
    }

    fn kerning(&self, left: char, right: char, size: f32) -> f32 {
        self.kerning_pairs
            .get(&(left, right))
            .map_or(0.0, |k| Self::scale(*k, size))
    }
}

impl FontDescriptor for MetricsFile {
    fn flags(&self) -> u32 {
        self.flags
    }

    fn font_bbox(&self) -> [i32; 4] {
        self.font_bbox
    }

    fn italic_angle(&self) -> i32 {
        self.italic_angle
    }

    fn stem_v(&self) -> i32 {
        self.stem_v
    }

    fn font_type(&self) -> FontType {
        self.font_type
            .as_deref()
            .map_or(FontType::Type1, FontType::from_name)
    }

    fn is_embeddable(&self) -> bool {
        self.embeddable
    }
}

#[derive(Debug)]
struct Resolved {
    metrics: MetricsFile,
    error: Option<FontError>,
}

/// A font whose metrics are read on first use and cached for its lifetime.
#[derive(Debug)]
pub struct LazyFont {
    metrics_uri: ResourceUri,
    embed_uri: Option<ResourceUri>,
    use_kerning: bool,
    provider: Arc<dyn ResourceProvider>,
    resolved: OnceLock<Resolved>,
}

impl LazyFont {
    pub fn new(
        metrics_uri: impl Into<ResourceUri>,
        embed_uri: Option<ResourceUri>,
        use_kerning: bool,
        provider: Arc<dyn ResourceProvider>,
    ) -> Self {
        Self {
            metrics_uri: metrics_uri.into(),
            embed_uri,
            use_kerning,
            provider,
            resolved: OnceLock::new(),
        }
    }

    pub fn metrics_uri(&self) -> &ResourceUri {
        &self.metrics_uri
    }

    pub fn embed_uri(&self) -> Option<&ResourceUri> {
        self.embed_uri.as_ref()
    }

    pub fn use_kerning(&self) -> bool {
        self.use_kerning
    }

    /// The metrics in effect: the loaded file, or the fallback.
    pub fn real_font(&self) -> &MetricsFile {
        &self.resolve().metrics
    }

    /// Why resolution failed, if it did. Resolves the font when needed.
    pub fn resolution_error(&self) -> Option<&FontError> {
        self.resolve().error.as_ref()
    }

    fn resolve(&self) -> &Resolved {
        self.resolved.get_or_init(|| self.load())
    }

    fn load(&self) -> Resolved {
        let uri = self.metrics_uri.as_str();
        let loaded = self
            .provider
            .load(uri)
            .map_err(FontError::from)
            .and_then(|bytes| MetricsFile::from_slice(uri, &bytes));

        match loaded {
            Ok(metrics) => {
                log::debug!("Metrics {} loaded for font '{}' via {}", uri, metrics.font_name, self.provider.name());
                Resolved { metrics, error: None }
            }
            Err(e) => {
                log::warn!("Failed to read font metrics file {uri}: {e}. Falling back to default metrics.");
                Resolved {
                    metrics: MetricsFile::fallback(),
                    error: Some(e),
                }
            }
        }
    }
}

impl FontMetrics for LazyFont {
    fn font_name(&self) -> &str {
        self.real_font().font_name()
    }

    fn encoding(&self) -> &str {
        self.real_font().encoding()
    }

    fn map_char(&self, ch: char) -> char {
        self.real_font().map_char(ch)
    }

    fn is_multi_byte(&self) -> bool {
        self.real_font().is_multi_byte()
    }

    fn ascender(&self, size: f32) -> f32 {
        self.real_font().ascender(size)
    }

    fn descender(&self, size: f32) -> f32 {
        self.real_font().descender(size)
    }

    fn cap_height(&self, size: f32) -> f32 {
        self.real_font().cap_height(size)
    }

    fn x_height(&self, size: f32) -> f32 {
        self.real_font().x_height(size)
    }

    fn width(&self, ch: char, size: f32) -> f32 {
        self.real_font().width(ch, size)
    }

    fn has_kerning_info(&self) -> bool {
        self.use_kerning && self.real_font().has_kerning_info()
    }

    fn kerning(&self, left: char, right: char, size: f32) -> f32 {
        if !self.use_kerning {
            return 0.0;
        }
        self.real_font().kerning(left, right, size)
    }
}

impl FontDescriptor for LazyFont {
    fn flags(&self) -> u32 {
        self.real_font().flags()
    }

    fn font_bbox(&self) -> [i32; 4] {
        self.real_font().font_bbox()
    }

    fn italic_angle(&self) -> i32 {
        self.real_font().italic_angle()
    }

    fn stem_v(&self) -> i32 {
        self.real_font().stem_v()
    }

    fn font_type(&self) -> FontType {
        self.real_font().font_type()
    }

    /// Embedding needs both an embeddable font and a file to embed.
    fn is_embeddable(&self) -> bool {
        self.embed_uri.is_some() && self.real_font().is_embeddable()
    }
}

/// Fonts available to a document, keyed by case-insensitive family name.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    fonts: HashMap<String, Arc<LazyFont>>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `font` under `family`, replacing an earlier registration.
    pub fn register(&mut self, family: &str, font: LazyFont) -> Arc<LazyFont> {
        let font = Arc::new(font);
        self.fonts.insert(family.to_lowercase(), Arc::clone(&font));
        font
    }

    pub fn get(&self, family: &str) -> Option<Arc<LazyFont>> {
        self.fonts.get(&family.to_lowercase()).cloned()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
