//! Plan command - build an offline run from a channel dump

use crate::cli::output::{colors, format_duration, print_output};
use crate::cli::OutputFormat;
use crate::core::planner::{average_duration, PlanOptions, ShortEntry};
use crate::core::services::Services;
use crate::core::youtube::ChannelDump;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the plan-run command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Channel dump JSON written by channel-dump
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Run directory [default: <runs_dir>/<channel-slug>/<timestamp>]
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Number of shorts to draft [default: from config, 5]
    #[arg(long, short = 'n')]
    pub shorts: Option<usize>,
}

/// Planned run response
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub run_dir: String,
    pub manifest_path: String,
    pub channel: String,
    pub shorts: Vec<ShortEntry>,
}

/// Execute the plan-run command
pub async fn execute(
    args: PlanArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(&args.input).map_err(|e| {
        format!(
            "Cannot read channel dump '{}': {e}. Create one with 'shorts channel-dump'.",
            args.input.display()
        )
    })?;
    let dump: ChannelDump = serde_json::from_str(&contents)?;

    let options = PlanOptions {
        run_dir: args.out,
        runs_dir: services.config.output.runs_dir.clone(),
        shorts: args.shorts.unwrap_or(services.config.plan.shorts_count),
        timestamp: None,
    };

    let summary = services.planner().plan(&dump, &options)?;

    let response = PlanResponse {
        run_dir: summary.run_dir.display().to_string(),
        manifest_path: summary.manifest_path.display().to_string(),
        channel: summary.manifest.channel.title.clone(),
        shorts: summary.manifest.shorts.clone(),
    };

    match format {
        OutputFormat::Human => {
            let average = average_duration(&dump.videos).unwrap_or_default();
            eprintln!(
                "{} {} short(s) for {} ({} videos, avg {})",
                colors::success("Planned"),
                colors::number(&response.shorts.len().to_string()),
                response.channel,
                colors::number(&dump.videos.len().to_string()),
                format_duration(average.round() as u64)
            );
            for short in &response.shorts {
                eprintln!(
                    "  {} {}",
                    colors::id(&short.id),
                    colors::dim(&short.title)
                );
            }
            println!("{}", response.run_dir);
        }
        OutputFormat::Json => print_output(&response, format),
    }

    Ok(())
}
