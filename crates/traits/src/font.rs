//! Font metrics boundary.
//!
//! Text leaves measure their content through these traits. All sizes are
//! font sizes in points; all returned lengths are in points.

use crate::resource::ResourceError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontError {
    #[error("Font resource unavailable: {0}")]
    Resource(#[from] ResourceError),

    #[error("Invalid font metrics in '{uri}': {message}")]
    InvalidMetrics { uri: String, message: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontType {
    Type0,
    #[default]
    Type1,
    MMType1,
    Type3,
    TrueType,
    Other,
}

impl FontType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Type0" => FontType::Type0,
            "Type1" => FontType::Type1,
            "MMType1" => FontType::MMType1,
            "Type3" => FontType::Type3,
            "TrueType" => FontType::TrueType,
            _ => FontType::Other,
        }
    }
}

/// Size-dependent measurements of a font.
pub trait FontMetrics {
    fn font_name(&self) -> &str;

    fn encoding(&self) -> &str;

    /// Maps a character into the font's encoding.
    fn map_char(&self, ch: char) -> char;

    fn is_multi_byte(&self) -> bool;

    fn ascender(&self, size: f32) -> f32;

    fn descender(&self, size: f32) -> f32;

    fn cap_height(&self, size: f32) -> f32;

    fn x_height(&self, size: f32) -> f32;

    /// Advance width of `ch` at `size`.
    fn width(&self, ch: char, size: f32) -> f32;

    fn has_kerning_info(&self) -> bool;

    /// Kerning adjustment between `left` and `right` at `size`, zero when
    /// the pair has no entry.
    fn kerning(&self, left: char, right: char, size: f32) -> f32;
}

/// Size-independent properties used when embedding a font, in 1/1000 em.
pub trait FontDescriptor {
    fn flags(&self) -> u32;

    fn font_bbox(&self) -> [i32; 4];

    fn italic_angle(&self) -> i32;

    fn stem_v(&self) -> i32;

    fn font_type(&self) -> FontType;

    fn is_embeddable(&self) -> bool;
}
