// WHY: Canonical word lists plus the tables derived from them, built once and
// never mutated so any number of translations can read them concurrently

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::direction::Direction;
use crate::error::Result;

pub mod builtin;

/// Immutable key -> value table for one substitution category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    /// Build from pairs, normalizing keys to their lowercase canonical form
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(key, value)| (key.as_ref().to_lowercase(), value.into()))
            .collect();
        Self { entries }
    }

    fn from_static(pairs: &[(&str, &str)]) -> Self {
        Self::from_pairs(pairs.iter().copied())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Swap keys and values. Two keys sharing a value is a data defect; the
    /// later key wins and the collision is logged.
    pub fn reversed(&self) -> Self {
        let mut entries = BTreeMap::new();
        for (key, value) in &self.entries {
            let inverted_key = value.to_lowercase();
            if let Some(previous) = entries.insert(inverted_key.clone(), key.clone()) {
                warn!(
                    value = %inverted_key,
                    previous = %previous,
                    replacement = %key,
                    "Dictionary inversion collision"
                );
            }
        }
        Self { entries }
    }

    /// Add a capitalized copy of every entry next to the original. Keys are
    /// kept verbatim here since titles match case-sensitively.
    pub fn with_capitalized(&self) -> Self {
        let mut entries = self.entries.clone();
        for (key, value) in &self.entries {
            entries.insert(capitalize(key), capitalize(value));
        }
        Self { entries }
    }

    /// Union of two tables; entries from `other` override on equal keys
    pub fn merged(&self, other: &Dictionary) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { entries }
    }
}

/// Uppercase only the first character
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The four canonical tables, as written in a TOML dictionary file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionarySet {
    pub american_only: Dictionary,
    pub british_only: Dictionary,
    pub american_to_british_spelling: Dictionary,
    pub american_to_british_titles: Dictionary,
}

impl DictionarySet {
    /// Word lists compiled into the crate
    pub fn builtin() -> Self {
        Self {
            american_only: Dictionary::from_static(builtin::AMERICAN_ONLY),
            british_only: Dictionary::from_static(builtin::BRITISH_ONLY),
            american_to_british_spelling: Dictionary::from_static(
                builtin::AMERICAN_TO_BRITISH_SPELLING,
            ),
            american_to_british_titles: Dictionary::from_static(
                builtin::AMERICAN_TO_BRITISH_TITLES,
            ),
        }
    }

    /// Parse a TOML document with any subset of the four tables
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let parsed: DictionarySet = toml::from_str(source)?;
        // Round-trip through from_pairs so hand-written keys become canonical
        Ok(Self {
            american_only: Dictionary::from_pairs(parsed.american_only.entries),
            british_only: Dictionary::from_pairs(parsed.british_only.entries),
            american_to_british_spelling: Dictionary::from_pairs(
                parsed.american_to_british_spelling.entries,
            ),
            american_to_british_titles: Dictionary::from_pairs(
                parsed.american_to_british_titles.entries,
            ),
        })
    }

    /// Overlay another set on top of this one
    pub fn extended(&self, other: &DictionarySet) -> Self {
        Self {
            american_only: self.american_only.merged(&other.american_only),
            british_only: self.british_only.merged(&other.british_only),
            american_to_british_spelling: self
                .american_to_british_spelling
                .merged(&other.american_to_british_spelling),
            american_to_british_titles: self
                .american_to_british_titles
                .merged(&other.american_to_british_titles),
        }
    }
}

/// Canonical tables plus everything derived from them
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    canonical: DictionarySet,
    british_to_american_spelling: Dictionary,
    british_to_american_titles: Dictionary,
    american_to_british_vocabulary: Dictionary,
    british_to_american_vocabulary: Dictionary,
    american_to_british_titles_cased: Dictionary,
    british_to_american_titles_cased: Dictionary,
}

impl DictionaryStore {
    /// Derive every direction-specific table eagerly
    pub fn new(canonical: DictionarySet) -> Self {
        let british_to_american_spelling = canonical.american_to_british_spelling.reversed();
        let british_to_american_titles = canonical.american_to_british_titles.reversed();

        let american_to_british_vocabulary = canonical
            .american_to_british_spelling
            .merged(&canonical.american_only);
        let british_to_american_vocabulary =
            british_to_american_spelling.merged(&canonical.british_only);

        let american_to_british_titles_cased =
            canonical.american_to_british_titles.with_capitalized();
        let british_to_american_titles_cased = british_to_american_titles.with_capitalized();

        debug!(
            american_to_british = american_to_british_vocabulary.len(),
            british_to_american = british_to_american_vocabulary.len(),
            titles = american_to_british_titles_cased.len(),
            "Built dictionary store"
        );

        Self {
            canonical,
            british_to_american_spelling,
            british_to_american_titles,
            american_to_british_vocabulary,
            british_to_american_vocabulary,
            american_to_british_titles_cased,
            british_to_american_titles_cased,
        }
    }

    /// Store over the built-in word lists
    pub fn builtin() -> &'static DictionaryStore {
        static BUILTIN: LazyLock<DictionaryStore> =
            LazyLock::new(|| DictionaryStore::new(DictionarySet::builtin()));
        &BUILTIN
    }

    pub fn canonical(&self) -> &DictionarySet {
        &self.canonical
    }

    pub fn british_to_american_spelling(&self) -> &Dictionary {
        &self.british_to_american_spelling
    }

    pub fn british_to_american_titles(&self) -> &Dictionary {
        &self.british_to_american_titles
    }

    /// Spelling plus locale-only vocabulary for one direction
    pub fn vocabulary(&self, direction: Direction) -> &Dictionary {
        match direction {
            Direction::AmericanToBritish => &self.american_to_british_vocabulary,
            Direction::BritishToAmerican => &self.british_to_american_vocabulary,
        }
    }

    /// Lowercase and capitalized title forms for one direction
    pub fn titles(&self, direction: Direction) -> &Dictionary {
        match direction {
            Direction::AmericanToBritish => &self.american_to_british_titles_cased,
            Direction::BritishToAmerican => &self.british_to_american_titles_cased,
        }
    }
}
