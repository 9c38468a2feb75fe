// WHY: Translation engine entry point. Rules are compiled once per
// Translator and shared read-only, so one instance serves any number of
// concurrent callers: Time -> Title -> Lexical, each appending spans

use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::LazyLock;
use tracing::{debug, info};

pub mod lexical;
pub mod pattern;
pub mod segments;
pub mod time;
pub mod titles;

use crate::config::TranslatorConfig;
use crate::dictionary::DictionaryStore;
use crate::direction::Direction;
use crate::error::{Result, TranslateError};
use crate::highlight::Highlighter;

use lexical::{compile_vocabulary, LexicalRule};
use segments::SegmentBuffer;
use time::TimeNormalizer;
use titles::{compile_titles, TitleRule};

/// Output of one translation call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
    /// Replacement texts in the order they were produced, duplicates included
    pub translated_spans: Vec<String>,
    /// Byte ranges of the replacements within `translated_text`, in text order
    #[serde(skip)]
    pub(crate) translated_ranges: Vec<Range<usize>>,
}

impl TranslationResult {
    /// Result built from text and spans alone, with no recorded positions
    pub fn new(translated_text: String, translated_spans: Vec<String>) -> Self {
        Self {
            translated_text,
            translated_spans,
            translated_ranges: Vec::new(),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.translated_spans.is_empty()
    }

    /// Where each replacement sits in the translated text. Empty for results
    /// that did not come from a translator (e.g. deserialized ones).
    pub fn translated_ranges(&self) -> &[Range<usize>] {
        &self.translated_ranges
    }
}

/// A translation rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    /// Highlighted text, or the sentinel message when nothing changed
    pub markup: String,
    pub result: TranslationResult,
}

/// Compiled rules for one direction
#[derive(Debug, Clone)]
struct Ruleset {
    titles: Vec<TitleRule>,
    vocabulary: Vec<LexicalRule>,
}

impl Ruleset {
    fn compile(store: &DictionaryStore, direction: Direction) -> Result<Self> {
        let titles = compile_titles(store.titles(direction))?;
        let vocabulary = compile_vocabulary(store.vocabulary(direction))?;
        debug!(
            %direction,
            titles = titles.len(),
            vocabulary = vocabulary.len(),
            "Compiled ruleset"
        );
        Ok(Self { titles, vocabulary })
    }
}

/// American/British translation engine
#[derive(Debug, Clone)]
pub struct Translator {
    config: TranslatorConfig,
    times: TimeNormalizer,
    american_to_british: Ruleset,
    british_to_american: Ruleset,
    highlighter: Highlighter,
}

impl Translator {
    /// Compile every rule in `store` for both directions
    pub fn new(store: &DictionaryStore, config: TranslatorConfig) -> Result<Self> {
        info!("Compiling translation rules");
        Ok(Self {
            times: TimeNormalizer::new(config.time_policy)?,
            american_to_british: Ruleset::compile(store, Direction::AmericanToBritish)?,
            british_to_american: Ruleset::compile(store, Direction::BritishToAmerican)?,
            highlighter: Highlighter::new(config.highlight.clone()),
            config,
        })
    }

    /// Translator over the built-in dictionaries with default configuration
    pub fn with_default_rules() -> Result<Self> {
        Self::new(DictionaryStore::builtin(), TranslatorConfig::default())
    }

    /// Process-wide shared instance, compiled on first use
    pub fn builtin() -> Result<&'static Translator> {
        static BUILTIN: LazyLock<Result<Translator>> =
            LazyLock::new(Translator::with_default_rules);
        BUILTIN
            .as_ref()
            .map_err(|e| TranslateError::Builtin(e.to_string()))
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    fn ruleset(&self, direction: Direction) -> &Ruleset {
        match direction {
            Direction::AmericanToBritish => &self.american_to_british,
            Direction::BritishToAmerican => &self.british_to_american,
        }
    }

    /// Translate `sentence`. Empty input is legal and yields no spans.
    pub fn translate(&self, sentence: &str, direction: Direction) -> TranslationResult {
        let rules = self.ruleset(direction);
        let mut buffer = SegmentBuffer::new(sentence);

        self.times.rewrite(direction, &mut buffer);
        for title in &rules.titles {
            title.apply(&mut buffer);
        }
        for rule in &rules.vocabulary {
            rule.apply(&mut buffer, self.config.preserve_all_caps);
        }

        let result = buffer.finish();
        debug!(
            %direction,
            chars = sentence.chars().count(),
            spans = result.translated_spans.len(),
            "Translated sentence"
        );
        result
    }

    /// Presentation path: blank input is rejected before translating, and an
    /// unchanged result renders as the sentinel message
    pub fn present(&self, input: &str, direction: Direction) -> Result<Rendered> {
        if input.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }
        let result = self.translate(input, direction);
        Ok(Rendered {
            markup: self.highlighter.render(&result),
            result,
        })
    }
}

/// Translate with the built-in dictionaries
pub fn translate(sentence: &str, direction: Direction) -> Result<TranslationResult> {
    Ok(Translator::builtin()?.translate(sentence, direction))
}

/// Translate with a direction given as text; unknown names fail with
/// [`TranslateError::InvalidDirection`]
pub fn translate_str(sentence: &str, direction: &str) -> Result<TranslationResult> {
    translate(sentence, direction.parse()?)
}
