// Test helper functions

use shorts_creator::core::config::Config;
use shorts_creator::core::services::Services;
use std::sync::Arc;
use tempfile::TempDir;

/// Create test services whose runs land in a temporary directory
#[allow(dead_code)]
pub fn create_test_services() -> (Arc<Services>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    config.output.runs_dir = temp_dir.path().join("runs");

    let services = Services::new(config).expect("Default config should be valid");
    (Arc::new(services), temp_dir)
}

/// Whitespace-separated words of a text
#[allow(dead_code)]
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Assert that chunks, read in order, contain exactly the input's words
#[allow(dead_code)]
pub fn assert_lossless(input: &str, chunks: &[String]) {
    let joined = chunks.join(" ");
    assert_eq!(
        words(&joined),
        words(input),
        "Chunk words differ from input words"
    );
}
