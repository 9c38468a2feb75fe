// WHY: Honorifics are matched case-sensitively against a table that already
// holds both the lowercase and capitalized forms

use super::pattern::{CaseSensitivity, MatchRule};
use super::segments::{SegmentBuffer, Substitution};
use crate::dictionary::Dictionary;
use crate::error::Result;

/// One title key with its target-locale form
#[derive(Debug, Clone)]
pub struct TitleRule {
    rule: MatchRule,
    replacement: String,
    /// Text the target form appends to the key (the American period)
    suffix: String,
}

impl TitleRule {
    pub fn new(key: &str, replacement: &str) -> Result<Self> {
        let suffix = replacement.strip_prefix(key).unwrap_or_default().to_string();
        Ok(Self {
            rule: MatchRule::new(key, CaseSensitivity::Sensitive)?,
            replacement: replacement.to_string(),
            suffix,
        })
    }

    pub fn key(&self) -> &str {
        self.rule.key()
    }

    /// Replace every standalone occurrence. A key already followed by the
    /// suffix its target form would add is left alone (`Mr.` stays `Mr.`).
    pub fn apply(&self, buffer: &mut SegmentBuffer) {
        buffer.substitute(|text, neighbors| {
            self.rule
                .find_all(text, neighbors)
                .into_iter()
                .filter(|range| {
                    self.suffix.is_empty()
                        || !neighbors
                            .text_after(text, range.end)
                            .starts_with(&self.suffix)
                })
                .map(|range| Substitution {
                    range,
                    replacement: self.replacement.clone(),
                })
                .collect()
        });
    }
}

/// Compile a direction's title table, longest keys first so `mrs` is tried
/// before `mr`
pub fn compile_titles(titles: &Dictionary) -> Result<Vec<TitleRule>> {
    let mut rules = titles
        .iter()
        .map(|(key, value)| TitleRule::new(key, value))
        .collect::<Result<Vec<_>>>()?;
    rules.sort_by(|a, b| b.key().len().cmp(&a.key().len()));
    Ok(rules)
}
