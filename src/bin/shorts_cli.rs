//! shorts - Command-line interface for shorts-creator
//!
//! # Examples
//!
//! ```bash
//! # Split a narration into voiceover chunks
//! shorts chunk-text --input script.txt --out voice/
//!
//! # Dump a channel's metadata and uploads
//! YOUTUBE_API_KEY=... shorts channel-dump @somechannel --max 50 --out dump.json
//!
//! # Plan an offline run from the dump
//! shorts plan-run --input dump.json --shorts 3
//! ```
//!
//! Exit codes: 0 on success, 2 for invalid invocation or configuration,
//! 3 when no channel matches, 4 when a channel has no uploads playlist,
//! 1 for anything else.

use clap::Parser;
use shorts_creator::cli::output::print_error;
use shorts_creator::cli::{run, Cli};
use shorts_creator::ShortsError;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "shorts_creator=debug"
    } else {
        "shorts_creator=warn"
    };
    let filter = EnvFilter::try_from_env("SHORTS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // stdout carries command output
        .with_ansi(false);

    if std::env::var("SHORTS_LOG_FORMAT").is_ok_and(|f| f == "json") {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        let code = e
            .downcast_ref::<ShortsError>()
            .map(ShortsError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
