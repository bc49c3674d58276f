//! Sentence-aware voice chunking.
//!
//! Splits prose into chunks bounded by a word-count window so each
//! chunk fits a single text-to-speech request. The pipeline is:
//!
//! - **sentence**: whitespace normalization and sentence splitting
//! - **packer**: greedy packing of sentences into chunks, with a
//!   fixed-window fallback for sentences longer than `max_words`
//! - **writer**: persisting chunks to numbered files
//!
//! Chunking is a pure function of `(text, ChunkingConfig)`. It does no
//! I/O and never fails once the configuration has been validated.
//!
//! # Example
//!
//! ```
//! use shorts_creator::core::chunker::{ChunkingConfig, TextChunker};
//!
//! let config = ChunkingConfig::new(1, 1).unwrap();
//! let chunker = TextChunker::new(config);
//!
//! assert_eq!(chunker.chunk_text("A. B. C."), vec!["A.", "B.", "C."]);
//! ```

pub mod packer;
pub mod sentence;
pub mod writer;

pub use packer::{chunk_text, split_oversized, TextChunker};
pub use sentence::{normalize_whitespace, split_sentences, word_count, Sentence};
pub use writer::{chunk_file_name, ChunkWriter};

use crate::core::error::{Result, ShortsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default lower bound of the word window
pub const DEFAULT_MIN_WORDS: usize = 120;

/// Default upper bound of the word window
pub const DEFAULT_MAX_WORDS: usize = 160;

/// Word-count window governing how sentences are packed.
///
/// Construct with [`ChunkingConfig::new`], which rejects windows where
/// either bound is zero or `max_words < min_words`. A value of this
/// type is therefore always valid input for the packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkingConfig {
    min_words: usize,
    max_words: usize,
}

impl ChunkingConfig {
    /// Create a validated word window.
    ///
    /// # Errors
    ///
    /// Returns [`ShortsError::ConfigError`] if either bound is zero or
    /// if `max_words < min_words`.
    pub fn new(min_words: usize, max_words: usize) -> Result<Self> {
        if min_words == 0 || max_words == 0 {
            return Err(ShortsError::ConfigError(format!(
                "Word bounds must be positive (min_words={min_words}, max_words={max_words})"
            )));
        }

        if max_words < min_words {
            return Err(ShortsError::ConfigError(format!(
                "max_words ({max_words}) must be >= min_words ({min_words})"
            )));
        }

        Ok(Self {
            min_words,
            max_words,
        })
    }

    /// Minimum words per chunk.
    pub fn min_words(&self) -> usize {
        self.min_words
    }

    /// Maximum words per chunk.
    pub fn max_words(&self) -> usize {
        self.max_words
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

/// How the packer treats `min_words` when the next sentence would
/// overflow `max_words`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackingPolicy {
    /// Flush on overflow regardless of `min_words`.
    ///
    /// A chunk may end up far below `min_words`, e.g. a short sentence
    /// that follows a full chunk.
    #[default]
    Greedy,

    /// Flush on overflow only once the chunk holds at least `min_words`
    /// words; until then keep absorbing sentences, even past
    /// `max_words`.
    FillMinimum,
}

impl PackingPolicy {
    /// Name used in config files, env vars and CLI flags
    pub fn as_str(&self) -> &'static str {
        match self {
            PackingPolicy::Greedy => "greedy",
            PackingPolicy::FillMinimum => "fill-minimum",
        }
    }
}

impl fmt::Display for PackingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackingPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(PackingPolicy::Greedy),
            "fill-minimum" | "fill_minimum" => Ok(PackingPolicy::FillMinimum),
            other => Err(format!(
                "unknown packing policy '{other}' (expected 'greedy' or 'fill-minimum')"
            )),
        }
    }
}
