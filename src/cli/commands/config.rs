//! Config command - show current configuration

use crate::cli::output::{print_header, print_output};
use crate::cli::OutputFormat;
use crate::core::config::{OutputConfig, PlanConfig, VoiceConfig, YouTubeConfig};
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub voice: VoiceConfig,
    pub youtube: YouTubeConfig,
    pub output: OutputConfig,
    pub plan: PlanConfig,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;
    let xdg = XdgDirs::new();

    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        voice: config.voice.clone(),
        youtube: config.youtube.clone(),
        output: config.output.clone(),
        plan: config.plan.clone(),
    };

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  voice:");
            println!("    min_words: {}", response.voice.min_words);
            println!("    max_words: {}", response.voice.max_words);
            println!("    prefix: {}", response.voice.prefix);
            println!("    policy: {}", response.voice.policy);
            println!("    voice_id: {}", response.voice.voice_id);
            println!("    voice_api: {}", response.voice.voice_api);
            println!("  youtube:");
            println!("    api_base: {}", response.youtube.api_base);
            println!("    timeout_sec: {}", response.youtube.timeout_sec);
            println!("  output:");
            println!("    runs_dir: {}", response.output.runs_dir.display());
            println!("  plan:");
            println!("    shorts_count: {}", response.plan.shorts_count);
            match &response.plan.templates_dir {
                Some(dir) => println!("    templates_dir: {}", dir.display()),
                None => println!("    templates_dir: (built-in)"),
            }
        }
        OutputFormat::Json => print_output(&response, format),
    }

    Ok(())
}
