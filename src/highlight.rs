// WHY: Span collection and highlighting. Occurrences are located first and the
// markup emitted in a single pass, so inserted tags are never searched again

use std::collections::HashSet;
use std::ops::Range;

use crate::config::HighlightConfig;
use crate::translator::pattern::{is_standalone, Neighbors};
use crate::translator::TranslationResult;

/// Deduplicate spans by exact value, keeping first-seen order
pub fn unique_spans(spans: &[String]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(spans.len());
    spans
        .iter()
        .map(String::as_str)
        .filter(|span| !span.is_empty() && seen.insert(*span))
        .collect()
}

/// Wraps translated spans in configurable markers
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    /// Wrap every standalone occurrence of each unique span in `text`.
    /// Where occurrences overlap, the earliest (then longest) wins.
    pub fn highlight(&self, text: &str, spans: &[String]) -> String {
        self.wrap(text, standalone_occurrences(text, spans))
    }

    /// Display form of a result: highlighted text, or the sentinel message
    /// when nothing was translated. Recorded replacement positions are wrapped
    /// too, so a replacement glued to a word (`11.40PM`) is still marked.
    pub fn render(&self, result: &TranslationResult) -> String {
        if result.translated_spans.is_empty() {
            return self.config.sentinel.clone();
        }
        let text = &result.translated_text;
        let mut ranges = standalone_occurrences(text, &result.translated_spans);
        ranges.extend(
            result
                .translated_ranges()
                .iter()
                .filter(|range| !range.is_empty() && text.get((*range).clone()).is_some())
                .cloned(),
        );
        self.wrap(text, ranges)
    }

    fn wrap(&self, text: &str, mut ranges: Vec<Range<usize>>) -> String {
        ranges.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| b.end.cmp(&a.end)));

        let mut output = String::with_capacity(text.len() + ranges.len() * 32);
        let mut cursor = 0;
        for range in ranges {
            if range.start < cursor {
                continue;
            }
            output.push_str(&text[cursor..range.start]);
            output.push_str(&self.config.open);
            output.push_str(&text[range.clone()]);
            output.push_str(&self.config.close);
            cursor = range.end;
        }
        output.push_str(&text[cursor..]);
        output
    }
}

fn standalone_occurrences(text: &str, spans: &[String]) -> Vec<Range<usize>> {
    let neighbors = Neighbors::default();
    unique_spans(spans)
        .into_iter()
        .flat_map(|span| {
            text.match_indices(span)
                .map(|(start, matched)| start..start + matched.len())
                .filter(|range| is_standalone(text, range, &neighbors))
                .collect::<Vec<_>>()
        })
        .collect()
}
