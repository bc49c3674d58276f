//! Persisting chunks as numbered text files.

use crate::core::error::{Result, ShortsError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name for the chunk at `index` (1-based).
///
/// Indices are zero-padded to two digits: `voice_part_01.txt`,
/// ..., `voice_part_99.txt`, `voice_part_100.txt`.
pub fn chunk_file_name(prefix: &str, index: usize) -> String {
    format!("{prefix}_part_{index:02}.txt")
}

/// Writes chunk sequences to `<out_dir>/<prefix>_part_NN.txt`.
#[derive(Debug, Clone)]
pub struct ChunkWriter {
    out_dir: PathBuf,
    prefix: String,
}

impl ChunkWriter {
    /// Create a writer for the given directory and file prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ShortsError::Usage`] if the prefix is empty or contains
    /// a path separator.
    pub fn new(out_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();

        if prefix.trim().is_empty() {
            return Err(ShortsError::Usage(
                "Chunk file prefix cannot be empty".to_string(),
            ));
        }

        if prefix.contains('/') || prefix.contains('\\') {
            return Err(ShortsError::Usage(format!(
                "Chunk file prefix '{prefix}' must not contain path separators"
            )));
        }

        Ok(Self {
            out_dir: out_dir.into(),
            prefix,
        })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Path the chunk at `index` (1-based) is written to
    pub fn chunk_path(&self, index: usize) -> PathBuf {
        self.out_dir.join(chunk_file_name(&self.prefix, index))
    }

    /// Write every chunk, trimmed and followed by a newline.
    ///
    /// Creates the output directory if needed and returns the written
    /// paths in chunk order. I/O failures are returned unchanged.
    pub fn write_all<S: AsRef<str>>(&self, chunks: &[S]) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.out_dir)?;

        let mut paths = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            let path = self.chunk_path(i + 1);
            fs::write(&path, format!("{}\n", chunk.as_ref().trim()))?;
            paths.push(path);
        }

        tracing::debug!("Wrote {} chunk file(s) to {:?}", paths.len(), self.out_dir);
        Ok(paths)
    }
}
