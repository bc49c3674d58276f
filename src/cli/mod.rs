//! CLI adapter for shorts-creator
//!
//! Provides the `shorts` command line over the core chunking, channel
//! dump and run planning services.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// shorts - Voiceover chunking and YouTube Shorts planning
///
/// Split narration into chunks sized for text-to-speech tools, dump a
/// channel's metadata, and plan a run of scripts and video prompts.
#[derive(Parser, Debug)]
#[command(name = "shorts")]
#[command(version)]
#[command(about = "Voiceover chunking and YouTube Shorts planning", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split text into word-bounded voiceover chunk files
    #[command(name = "chunk-text")]
    ChunkText(commands::ChunkArgs),

    /// Fetch channel metadata and uploads from the YouTube Data API
    #[command(name = "channel-dump")]
    ChannelDump(commands::ChannelDumpArgs),

    /// Plan an offline run from a saved channel dump
    #[command(name = "plan-run")]
    PlanRun(commands::PlanArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  shorts completions bash > ~/.local/share/bash-completion/completions/shorts
    ///   zsh:   shorts completions zsh > ~/.zfunc/_shorts
    ///   fish:  shorts completions fish > ~/.config/fish/completions/shorts.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    config.log_config();

    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::ChunkText(args) => commands::chunk::execute(args, &services, cli.format).await,
        Commands::ChannelDump(args) => {
            commands::channel::execute(args, &services, cli.format).await
        }
        Commands::PlanRun(args) => commands::plan::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
