// WHY: Times are rewritten before titles and vocabulary so the separator swap
// sees the original digits; the clock policy keeps dates and long decimals out

use regex_automata::{meta::Regex, Input};
use std::ops::Range;
use tracing::debug;

use super::pattern::{next_char_boundary, Neighbors};
use super::segments::{SegmentBuffer, Substitution};
use crate::config::TimePolicy;
use crate::direction::Direction;
use crate::error::{Result, TranslateError};

/// Swaps `H:MM` and `H.MM` according to direction
#[derive(Debug, Clone)]
pub struct TimeNormalizer {
    policy: TimePolicy,
    colon: Regex,
    dot: Regex,
}

impl TimeNormalizer {
    pub fn new(policy: TimePolicy) -> Result<Self> {
        let colon_pattern = r"[0-9]{1,2}:[0-9]{1,2}";
        let dot_pattern = r"[0-9]{1,2}\.[0-9]{1,2}";
        let colon =
            Regex::new(colon_pattern).map_err(|e| TranslateError::pattern(colon_pattern, e))?;
        let dot = Regex::new(dot_pattern).map_err(|e| TranslateError::pattern(dot_pattern, e))?;

        debug!(?policy, "Compiled time patterns");
        Ok(Self { policy, colon, dot })
    }

    /// Rewrite every accepted time token in the untouched source text
    pub fn rewrite(&self, direction: Direction, buffer: &mut SegmentBuffer) {
        let source = direction.source_separator();
        let target = direction.target_separator();
        let regex = match direction {
            Direction::AmericanToBritish => &self.colon,
            Direction::BritishToAmerican => &self.dot,
        };

        buffer.substitute(|text, neighbors| {
            self.find_times(regex, text, neighbors, source)
                .into_iter()
                .map(|range| {
                    let replacement = text[range.clone()].replacen(source, &target.to_string(), 1);
                    Substitution { range, replacement }
                })
                .collect()
        });
    }

    fn find_times(
        &self,
        regex: &Regex,
        text: &str,
        neighbors: &Neighbors<'_>,
        separator: char,
    ) -> Vec<Range<usize>> {
        let mut found = Vec::new();
        let mut at = 0;

        while at < text.len() {
            let Some(hit) = regex.search(&Input::new(text).range(at..)) else {
                break;
            };
            let range = hit.range();
            if self.accepts(text, &range, neighbors, separator) {
                at = range.end;
                found.push(range);
            } else {
                at = next_char_boundary(text, range.start);
            }
        }

        found
    }

    fn accepts(
        &self,
        text: &str,
        range: &Range<usize>,
        neighbors: &Neighbors<'_>,
        separator: char,
    ) -> bool {
        match self.policy {
            TimePolicy::Lenient => true,
            TimePolicy::Clock => is_clock_time(text, range, neighbors, separator),
        }
    }
}

/// Hour 0-23, two-digit minutes 00-59, and no digits or `sep digit` runs
/// glued to either side (rules out `10.15.2020`, `123:45`, `3.141`)
fn is_clock_time(
    text: &str,
    range: &Range<usize>,
    neighbors: &Neighbors<'_>,
    separator: char,
) -> bool {
    let Some((hour, minute)) = text[range.clone()].split_once(separator) else {
        return false;
    };
    if minute.len() != 2 {
        return false;
    }
    let valid_hour = hour.parse::<u8>().is_ok_and(|h| h <= 23);
    let valid_minute = minute.parse::<u8>().is_ok_and(|m| m <= 59);
    if !valid_hour || !valid_minute {
        return false;
    }

    let mut preceding = text[..range.start].chars().rev();
    let before = preceding.next().or(neighbors.before);
    let before_that = preceding.next();
    if before.is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }
    if matches!(before, Some('.' | ':')) && before_that.is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }

    let mut following = neighbors.text_after(text, range.end).chars();
    let after = following.next();
    let after_that = following.next();
    if after.is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }
    !(matches!(after, Some('.' | ':')) && after_that.is_some_and(|c| c.is_ascii_digit()))
}
