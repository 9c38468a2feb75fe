// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;
use transatlantic::{Direction, Translator};

/// Test fixture helper for creating temporary directories with input files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Create a text file with given content
    pub fn create_text_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        self.create_raw_file(relative_path, content.as_bytes())
    }

    /// Create a file with arbitrary bytes (for invalid UTF-8 cases)
    pub fn create_raw_file<P: AsRef<Path>>(&self, relative_path: P, content: &[u8]) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }
}

/// Shared translator over the built-in dictionaries
pub fn translator() -> &'static Translator {
    static SHARED: OnceLock<Translator> = OnceLock::new();
    SHARED.get_or_init(|| Translator::with_default_rules().expect("Built-in rules should compile"))
}

/// Translated text only
pub fn to_british(text: &str) -> String {
    translator().translate(text, Direction::AmericanToBritish).translated_text
}

/// Translated text only
pub fn to_american(text: &str) -> String {
    translator().translate(text, Direction::BritishToAmerican).translated_text
}

/// Rendered markup for the presentation path
pub fn highlighted(text: &str, direction: Direction) -> String {
    translator()
        .present(text, direction)
        .expect("Non-blank input should render")
        .markup
}
