//! Core domain logic (independent of the command line)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **xdg**: XDG directory handling
//! - **chunker**: Sentence splitting and word-bounded packing
//! - **template**: Placeholder templates for reports, scripts and prompts
//! - **youtube**: Channel resolution and metadata dumps
//! - **planner**: Offline run directories built from a dump
//! - **services**: Unified service container

pub mod chunker;
pub mod config;
pub mod error;
pub mod planner;
pub mod services;
pub mod template;
pub mod xdg;
pub mod youtube;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, ShortsError};
pub use services::Services;
