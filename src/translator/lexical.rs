// WHY: Spelling and vocabulary substitution folds over the dictionary; phrases
// are tried before single words so a multi-word term converts as a whole

use super::pattern::{CaseSensitivity, MatchRule};
use super::segments::{SegmentBuffer, Substitution};
use crate::dictionary::{capitalize, Dictionary};
use crate::error::Result;

/// Capitalization observed on a matched span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// First character is not uppercase; replacement used as stored
    AsStored,
    /// First character uppercase
    Capitalized,
    /// Two or more letters, all uppercase
    Upper,
}

impl CaseStyle {
    pub fn detect(matched: &str) -> Self {
        let starts_upper = matched.chars().next().is_some_and(char::is_uppercase);
        if !starts_upper {
            return CaseStyle::AsStored;
        }

        let letters: Vec<char> = matched.chars().filter(|c| c.is_alphabetic()).collect();
        if letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase()) {
            CaseStyle::Upper
        } else {
            CaseStyle::Capitalized
        }
    }

    pub fn apply(self, replacement: &str, preserve_all_caps: bool) -> String {
        match self {
            CaseStyle::AsStored => replacement.to_string(),
            CaseStyle::Upper if preserve_all_caps => replacement.to_uppercase(),
            CaseStyle::Upper | CaseStyle::Capitalized => capitalize(replacement),
        }
    }
}

/// One vocabulary or spelling key with its target-locale value
#[derive(Debug, Clone)]
pub struct LexicalRule {
    rule: MatchRule,
    replacement: String,
    word_count: usize,
}

impl LexicalRule {
    pub fn new(key: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            rule: MatchRule::new(key, CaseSensitivity::Insensitive)?,
            replacement: replacement.to_string(),
            word_count: key.split(' ').count(),
        })
    }

    pub fn key(&self) -> &str {
        self.rule.key()
    }

    pub fn apply(&self, buffer: &mut SegmentBuffer, preserve_all_caps: bool) {
        buffer.substitute(|text, neighbors| {
            self.rule
                .find_all(text, neighbors)
                .into_iter()
                .map(|range| {
                    let style = CaseStyle::detect(&text[range.clone()]);
                    Substitution {
                        replacement: style.apply(&self.replacement, preserve_all_caps),
                        range,
                    }
                })
                .collect()
        });
    }
}

/// Compile a direction's vocabulary: most words first, then longest key,
/// otherwise dictionary order
pub fn compile_vocabulary(vocabulary: &Dictionary) -> Result<Vec<LexicalRule>> {
    let mut rules = vocabulary
        .iter()
        .map(|(key, value)| LexicalRule::new(key, value))
        .collect::<Result<Vec<_>>>()?;
    rules.sort_by(|a, b| {
        b.word_count
            .cmp(&a.word_count)
            .then_with(|| b.key().len().cmp(&a.key().len()))
    });
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pairs: &[(&str, &str)], text: &str) -> (String, Vec<String>) {
        let rules = compile_vocabulary(&Dictionary::from_pairs(pairs.iter().copied())).unwrap();
        let mut buffer = SegmentBuffer::new(text);
        for rule in &rules {
            rule.apply(&mut buffer, true);
        }
        let result = buffer.finish();
        (result.translated_text, result.translated_spans)
    }

    #[test]
    fn test_case_style_detection() {
        assert_eq!(CaseStyle::detect("color"), CaseStyle::AsStored);
        assert_eq!(CaseStyle::detect("Color"), CaseStyle::Capitalized);
        assert_eq!(CaseStyle::detect("COLOR"), CaseStyle::Upper);
        assert_eq!(CaseStyle::detect("PArking lot"), CaseStyle::Capitalized);
        assert_eq!(CaseStyle::detect("A"), CaseStyle::Capitalized);
    }

    #[test]
    fn test_case_style_apply() {
        assert_eq!(CaseStyle::AsStored.apply("colour", true), "colour");
        assert_eq!(CaseStyle::Capitalized.apply("colour", true), "Colour");
        assert_eq!(CaseStyle::Upper.apply("car park", true), "CAR PARK");
        assert_eq!(CaseStyle::Upper.apply("car park", false), "Car park");
        assert_eq!(CaseStyle::AsStored.apply("Tylenol", true), "Tylenol");
    }

    #[test]
    fn test_capitalization_preserved() {
        let pairs = [("color", "colour")];
        assert_eq!(run(&pairs, "color").0, "colour");
        assert_eq!(run(&pairs, "Color me").0, "Colour me");
        assert_eq!(run(&pairs, "COLOR ME").0, "COLOUR ME");
    }

    #[test]
    fn test_phrase_before_words() {
        let pairs = [("boot", "trunk"), ("car boot", "trunk"), ("car boot sale", "swap meet")];
        let (text, spans) = run(&pairs, "The car boot sale was called off.");
        assert_eq!(text, "The swap meet was called off.");
        assert_eq!(spans, vec!["swap meet"]);
    }

    #[test]
    fn test_replacement_not_retranslated() {
        let pairs = [("chippy", "fish-and-chip shop"), ("chip", "fry"), ("shop", "store")];
        let (text, spans) = run(&pairs, "I went to the chippy.");
        assert_eq!(text, "I went to the fish-and-chip shop.");
        assert_eq!(spans, vec!["fish-and-chip shop"]);
    }

    #[test]
    fn test_duplicate_spans_kept() {
        let pairs = [("color", "colour")];
        let (text, spans) = run(&pairs, "color and Color");
        assert_eq!(text, "colour and Colour");
        assert_eq!(spans, vec!["colour", "Colour"]);
    }

    #[test]
    fn test_rule_order() {
        let rules = compile_vocabulary(&Dictionary::from_pairs([
            ("a", "1"),
            ("bb cc", "2"),
            ("dddd", "3"),
            ("e f g", "4"),
        ]))
        .unwrap();
        let keys: Vec<&str> = rules.iter().map(LexicalRule::key).collect();
        assert_eq!(keys, vec!["e f g", "bb cc", "dddd", "a"]);
    }
}
