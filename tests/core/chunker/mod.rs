//! Chunker tests
//!
//! Properties of sentence packing over whole narrations, and chunk
//! files written to disk.
