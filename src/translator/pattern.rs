// WHY: Dictionary keys are matched as literals with hand-checked boundaries;
// regex-automata has no look-around, so the hyphen and word-boundary
// conditions are verified against the neighbouring characters of each hit

use regex_automata::{meta::Regex, util::syntax, Input};
use std::ops::Range;

use crate::error::{Result, TranslateError};

/// Whether a rule distinguishes upper and lower case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

/// Text surrounding a searchable stretch that lies outside of it
#[derive(Debug, Clone, Copy, Default)]
pub struct Neighbors<'a> {
    /// Last character before the stretch
    pub before: Option<char>,
    /// Text immediately after the stretch
    pub after: &'a str,
}

impl<'a> Neighbors<'a> {
    /// Character preceding `start` in `text`, looking outside when needed
    pub fn char_before(&self, text: &str, start: usize) -> Option<char> {
        text[..start].chars().next_back().or(self.before)
    }

    /// Text following `end` in `text`, continuing outside when needed
    pub fn text_after<'t>(&self, text: &'t str, end: usize) -> &'t str
    where
        'a: 't,
    {
        if end < text.len() {
            &text[end..]
        } else {
            self.after
        }
    }
}

/// Regex-style word character (`\w`), Unicode aware
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when `range` of `text` stands alone: not glued to a preceding hyphen,
/// not continuing into a following word, and (for keys that begin with a word
/// character) not the tail of a longer word
pub fn is_standalone(text: &str, range: &Range<usize>, neighbors: &Neighbors<'_>) -> bool {
    let before = neighbors.char_before(text, range.start);
    if before == Some('-') {
        return false;
    }

    let starts_with_word = text[range.clone()].chars().next().is_some_and(is_word_char);
    if starts_with_word && before.is_some_and(is_word_char) {
        return false;
    }

    let after = neighbors.text_after(text, range.end).chars().next();
    !after.is_some_and(is_word_char)
}

/// Compiled matcher for one dictionary key
#[derive(Debug, Clone)]
pub struct MatchRule {
    key: String,
    regex: Regex,
}

impl MatchRule {
    /// Compile `key` as an escaped literal. Multi-word keys keep their literal
    /// spaces, so only the exact phrase matches.
    pub fn new(key: &str, case: CaseSensitivity) -> Result<Self> {
        let pattern = regex_syntax::escape(key);
        let regex = Regex::builder()
            .syntax(syntax::Config::new().case_insensitive(case == CaseSensitivity::Insensitive))
            .build(&pattern)
            .map_err(|e| TranslateError::pattern(key, e))?;

        Ok(Self {
            key: key.to_string(),
            regex,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// All standalone, non-overlapping matches in `text`, left to right.
    /// A rejected hit resumes the search one character later, so a valid
    /// match overlapping a rejected one is still found.
    pub fn find_all(&self, text: &str, neighbors: &Neighbors<'_>) -> Vec<Range<usize>> {
        let mut found = Vec::new();
        let mut at = 0;

        while at < text.len() {
            let input = Input::new(text).range(at..);
            let Some(hit) = self.regex.search(&input) else {
                break;
            };
            let range = hit.range();
            if range.is_empty() {
                break;
            }

            if is_standalone(text, &range, neighbors) {
                at = range.end;
                found.push(range);
            } else {
                at = next_char_boundary(text, range.start);
            }
        }

        found
    }
}

/// Byte offset of the character after the one starting at `pos`
pub fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |c| pos + c.len_utf8())
}
