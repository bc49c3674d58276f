//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod channel;
pub mod chunk;
pub mod completions;
pub mod config;
pub mod plan;

// Re-export argument types for use in mod.rs
pub use channel::ChannelDumpArgs;
pub use chunk::ChunkArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use plan::PlanArgs;
