//! Culture - Locale Records
//!
//! A culture bundles a numeric id, language code, display name, text
//! direction, and optional custom font. The built-in catalog list lives
//! here; lookup indices are built by [`super::catalog`].

use serde::{Deserialize, Serialize};

/// Rendering direction of a culture's script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextDirection {
    /// Left-to-right scripts (Latin, CJK, Cyrillic, ...)
    #[serde(rename = "leftToRight")]
    LeftToRight,
    /// Right-to-left scripts (Hebrew, Arabic, ...)
    #[serde(rename = "rightToLeft")]
    RightToLeft,
}

impl TextDirection {
    /// Short form used in markup `dir` attributes
    pub fn short_code(self) -> &'static str {
        match self {
            TextDirection::LeftToRight => "ltr",
            TextDirection::RightToLeft => "rtl",
        }
    }
}

/// A single culture catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureRecord {
    /// Unique positive culture identifier
    pub culture_id: u32,
    /// Short language code (not unique across records)
    pub code: String,
    /// Display name
    pub name: String,
    /// Script direction
    pub text_direction: TextDirection,
    /// Font override, `None` when the default font applies
    #[serde(default)]
    pub custom_font: Option<String>,
}

impl CultureRecord {
    /// Create a record with no font override
    pub fn new(
        culture_id: u32,
        code: impl Into<String>,
        name: impl Into<String>,
        text_direction: TextDirection,
    ) -> Self {
        Self {
            culture_id,
            code: code.into(),
            name: name.into(),
            text_direction,
            custom_font: None,
        }
    }

    /// Attach a font override
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.custom_font = Some(font.into());
        self
    }
}

/// The built-in culture list.
///
/// Order matters: code lookups keep the last entry registered for a code,
/// so the generic "English" entry (id 69) wins over "American English"
/// (id 9) when resolving `"en"`.
pub fn builtin_cultures() -> Vec<CultureRecord> {
    use TextDirection::{LeftToRight, RightToLeft};

    vec![
        CultureRecord::new(7, "de", "German", LeftToRight),
        CultureRecord::new(9, "en", "American English", LeftToRight),
        CultureRecord::new(12, "he", "Hebrew", RightToLeft),
        CultureRecord::new(13, "hu", "Hungarian", LeftToRight),
        CultureRecord::new(16, "ja", "Japanese", LeftToRight).with_font("meyro"),
        CultureRecord::new(23, "ru", "Russian", LeftToRight),
        CultureRecord::new(20, "pl", "Polish", LeftToRight),
        CultureRecord::new(69, "en", "English", LeftToRight),
        CultureRecord::new(85, "es", "Spanish", LeftToRight),
        CultureRecord::new(161, "zh", "Simplified Chinese", LeftToRight),
        CultureRecord::new(162, "ar", "Modern Standard Arabic", RightToLeft),
    ]
}
