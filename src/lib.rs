//! shorts-creator - Voiceover chunking and short-form video planning
//!
//! Splits narration into word-bounded chunks sized for text-to-speech
//! tools, dumps channel metadata from the YouTube Data API, and plans
//! offline runs of scripts, video prompts and voice chunks.
//!
//! # Architecture
//!
//! The codebase is organized into two modules:
//!
//! - **core**: Domain logic
//!   - config, error, xdg
//!   - chunker (sentence splitting, packing, chunk files)
//!   - template (placeholder filling)
//!   - youtube (API client, channel resolution, dumps)
//!   - planner (keywords, run layout, manifests)
//!   - services (unified service container)
//!
//! - **cli**: The `shorts` command line (depends on core)
//!
//! # Key Features
//!
//! - Lossless chunking: chunk words, read in order, are the input words
//! - Hard word ceiling, with oversized sentences split into windows
//! - Channel input as ID, handle, URL or free-text search
//! - Offline planning from a saved channel dump

// Core domain logic
pub mod core;

// Command line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::chunker::{chunk_text, ChunkingConfig, PackingPolicy, TextChunker};
pub use core::config::Config;
pub use core::error::{Result, ShortsError};
pub use core::services::Services;
