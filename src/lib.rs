pub mod config;
pub mod dictionary;
pub mod direction;
pub mod error;
pub mod highlight;
pub mod reader;
pub mod translator;

// Re-export main types for convenient access
pub use config::{HighlightConfig, TimePolicy, TranslatorConfig};
pub use dictionary::{Dictionary, DictionarySet, DictionaryStore};
pub use direction::Direction;
pub use error::{Result, TranslateError};
pub use highlight::{unique_spans, Highlighter};
pub use translator::{translate, translate_str, Rendered, TranslationResult, Translator};
