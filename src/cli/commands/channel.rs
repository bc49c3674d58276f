//! Channel dump command - fetch channel metadata and uploads

use crate::cli::output::{colors, to_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::youtube::dump_channel;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the channel-dump command
#[derive(Args, Debug)]
pub struct ChannelDumpArgs {
    /// Channel ID, @handle, channel URL or search text
    pub channel: String,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Maximum number of uploads to fetch (0 for all)
    #[arg(long)]
    pub max: Option<usize>,

    /// Also write the dump to this file (parent directories are created)
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the channel-dump command
///
/// The dump itself is the output in both formats; human format adds a
/// summary line on stderr.
pub async fn execute(
    args: ChannelDumpArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = services.youtube_client(args.api_key.as_deref().unwrap_or_default())?;

    let dump = dump_channel(&client, &args.channel, args.max).await?;
    let json = to_json(&dump, args.pretty)?;

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(out, &json)?;
        tracing::info!("Wrote channel dump to {:?}", out);
    }

    println!("{json}");

    if format == OutputFormat::Human {
        eprintln!(
            "{} {} ({}): {} video(s)",
            colors::success("Fetched"),
            dump.channel.display_title(),
            colors::id(dump.channel.id.as_deref().unwrap_or_default()),
            colors::number(&dump.video_count.to_string())
        );
    }

    Ok(())
}
