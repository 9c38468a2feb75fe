// WHY: Engine knobs live in plain structs with defaults so the library works
// without any file, while the CLI can overlay a TOML document

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How strictly a `digits SEP digits` token must look like a clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimePolicy {
    /// Hour 0-23, minutes exactly two digits 00-59, not part of a longer number run
    #[default]
    Clock,
    /// Any one or two digits on each side of the separator
    Lenient,
}

/// Markup used when rendering translated spans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Inserted before every highlighted occurrence
    pub open: String,
    /// Inserted after every highlighted occurrence
    pub close: String,
    /// Rendered instead of the text when nothing was translated
    pub sentinel: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            open: r#"<span class="highlight">"#.to_string(),
            close: "</span>".to_string(),
            sentinel: "Everything looks good to me!".to_string(),
        }
    }
}

/// Configuration for a [`crate::Translator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub time_policy: TimePolicy,
    /// Uppercase the whole replacement when the match is all caps. Off by
    /// default: an uppercase match only capitalizes the replacement.
    pub preserve_all_caps: bool,
    pub highlight: HighlightConfig,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            time_policy: TimePolicy::default(),
            preserve_all_caps: false,
            highlight: HighlightConfig::default(),
        }
    }
}

impl TranslatorConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}
