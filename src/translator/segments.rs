// WHY: The text is carried as alternating source and translated pieces so each
// stage rewrites only untouched source text; inserted replacements are never
// matched again and every pass produces a fresh segment list

use std::ops::Range;

use super::pattern::Neighbors;
use super::TranslationResult;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Source(String),
    Translated(String),
}

impl Segment {
    fn text(&self) -> &str {
        match self {
            Segment::Source(text) | Segment::Translated(text) => text,
        }
    }
}

/// One replacement inside a source segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub range: Range<usize>,
    pub replacement: String,
}

/// Working copy of the sentence plus the spans produced so far
#[derive(Debug, Default)]
pub struct SegmentBuffer {
    segments: Vec<Segment>,
    spans: Vec<String>,
}

impl SegmentBuffer {
    pub fn new(text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Source(text.to_string())]
        };
        Self {
            segments,
            spans: Vec::new(),
        }
    }

    /// Run `find` over every source segment and splice in its substitutions.
    /// `find` must return ranges in ascending order; overlapping ones are dropped.
    pub fn substitute<F>(&mut self, mut find: F)
    where
        F: FnMut(&str, &Neighbors<'_>) -> Vec<Substitution>,
    {
        let previous = std::mem::take(&mut self.segments);
        let mut rebuilt = Vec::with_capacity(previous.len());

        for (index, segment) in previous.iter().enumerate() {
            let Segment::Source(text) = segment else {
                rebuilt.push(segment.clone());
                continue;
            };

            let neighbors = Neighbors {
                before: rebuilt.last().and_then(|s: &Segment| s.text().chars().next_back()),
                after: previous.get(index + 1).map_or("", Segment::text),
            };
            let substitutions = find(text, &neighbors);
            if substitutions.is_empty() {
                rebuilt.push(segment.clone());
                continue;
            }

            let mut cursor = 0;
            for Substitution { range, replacement } in substitutions {
                if range.start < cursor || range.end > text.len() {
                    continue;
                }
                if range.start > cursor {
                    rebuilt.push(Segment::Source(text[cursor..range.start].to_string()));
                }
                self.spans.push(replacement.clone());
                rebuilt.push(Segment::Translated(replacement));
                cursor = range.end;
            }
            if cursor < text.len() {
                rebuilt.push(Segment::Source(text[cursor..].to_string()));
            }
        }

        self.segments = rebuilt;
    }

    /// Current text with all substitutions applied
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Final text plus spans, with the byte range of every translated segment
    pub fn finish(self) -> TranslationResult {
        let mut translated_text = String::new();
        let mut translated_ranges = Vec::new();
        for segment in &self.segments {
            let start = translated_text.len();
            translated_text.push_str(segment.text());
            if matches!(segment, Segment::Translated(_)) && translated_text.len() > start {
                translated_ranges.push(start..translated_text.len());
            }
        }
        TranslationResult {
            translated_text,
            translated_spans: self.spans,
            translated_ranges,
        }
    }
}
