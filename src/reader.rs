use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::direction::Direction;
use crate::translator::{TranslationResult, Translator};

/// Configuration for batch file translation
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or return partial results
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for one batch read
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    /// Lines translated (blank lines are skipped)
    pub lines_translated: u64,
    pub spans_produced: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// One translated line of a batch input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedLine {
    /// 1-based line number in the source file
    pub line: u64,
    #[serde(flatten)]
    pub result: TranslationResult,
}

/// Streams a text file line by line and translates each non-blank line
pub struct AsyncLineReader<'t> {
    config: ReaderConfig,
    translator: &'t Translator,
}

impl<'t> AsyncLineReader<'t> {
    pub fn new(config: ReaderConfig, translator: &'t Translator) -> Self {
        Self { config, translator }
    }

    /// Translate every non-blank line of `file_path`. Open and decode errors
    /// abort under `fail_fast`; otherwise they are recorded in the stats and
    /// the lines translated so far are returned.
    pub async fn translate_file<P: AsRef<Path>>(
        &self,
        file_path: P,
        direction: Direction,
    ) -> Result<(Vec<TranslatedLine>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();
        let mut stats = ReadStats {
            file_path: path.display().to_string(),
            ..ReadStats::default()
        };

        debug!("Starting async translation of file: {}", path.display());

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open file {}: {}", path.display(), e);
                warn!("{}", error_msg);
                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                }
                stats.read_error = Some(error_msg);
                stats.duration_ms = start_time.elapsed().as_millis() as u64;
                return Ok((Vec::new(), stats));
            }
        };

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut translated = Vec::new();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    stats.bytes_read += line.len() as u64 + 1;
                    stats.lines_read += 1;
                    if line.trim().is_empty() {
                        continue;
                    }

                    let result = self.translator.translate(&line, direction);
                    stats.lines_translated += 1;
                    stats.spans_produced += result.translated_spans.len() as u64;
                    translated.push(TranslatedLine {
                        line: stats.lines_read,
                        result,
                    });
                }
                Ok(None) => break,
                Err(e) => {
                    let error_msg = format!(
                        "UTF-8 decoding error in {} at line {}: {}",
                        path.display(),
                        stats.lines_read + 1,
                        e
                    );
                    warn!("{}", error_msg);
                    if self.config.fail_fast {
                        return Err(anyhow::anyhow!(error_msg));
                    }
                    stats.read_error = Some(error_msg);
                    break;
                }
            }
        }

        stats.duration_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Translated {}: {} of {} lines, {} spans in {}ms",
            path.display(),
            stats.lines_translated,
            stats.lines_read,
            stats.spans_produced,
            stats.duration_ms
        );

        Ok((translated, stats))
    }
}
