//! Chunk command - split narration into voiceover chunk files

use crate::cli::output::{colors, print_output, print_warning};
use crate::cli::OutputFormat;
use crate::core::chunker::{ChunkWriter, ChunkingConfig, PackingPolicy, TextChunker};
use crate::core::error::ShortsError;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the chunk-text command
#[derive(Args, Debug)]
pub struct ChunkArgs {
    /// UTF-8 text file to chunk
    #[arg(long, short = 'i', conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Text to chunk, given inline
    #[arg(long, short = 't')]
    pub text: Option<String>,

    /// Directory for the chunk files (created if missing)
    #[arg(long, short = 'o')]
    pub out: PathBuf,

    /// File name prefix [default: from config, "voice"]
    #[arg(long)]
    pub prefix: Option<String>,

    /// Target minimum words per chunk [default: from config, 120]
    #[arg(long)]
    pub min: Option<usize>,

    /// Maximum words per chunk [default: from config, 160]
    #[arg(long)]
    pub max: Option<usize>,

    /// Packing policy: greedy or fill-minimum [default: from config]
    #[arg(long)]
    pub policy: Option<PackingPolicy>,
}

/// Chunking result response
#[derive(Debug, Serialize)]
pub struct ChunkResponse {
    pub chunks: usize,
    pub files: Vec<String>,
}

/// Execute the chunk-text command
pub async fn execute(
    args: ChunkArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = match (&args.input, args.text) {
        (Some(path), _) => fs::read_to_string(path).map_err(|e| {
            ShortsError::IoError(std::io::Error::new(
                e.kind(),
                format!("cannot read '{}': {e}", path.display()),
            ))
        })?,
        (None, Some(text)) => text,
        (None, None) => {
            return Err(ShortsError::Usage("Provide --input or --text".to_string()).into());
        }
    };

    let voice = &services.config.voice;
    let config = ChunkingConfig::new(
        args.min.unwrap_or(voice.min_words),
        args.max.unwrap_or(voice.max_words),
    )?;
    let chunker = TextChunker::new(config).with_policy(args.policy.unwrap_or(voice.policy));

    let prefix = args.prefix.unwrap_or_else(|| voice.prefix.clone());
    let writer = ChunkWriter::new(args.out, prefix)?;

    let chunks = chunker.chunk_text(&text);
    if chunks.is_empty() && format == OutputFormat::Human {
        print_warning("Input contains no words; no chunk files written");
    }

    let paths = writer.write_all(&chunks)?;

    let response = ChunkResponse {
        chunks: chunks.len(),
        files: paths.iter().map(|p| p.display().to_string()).collect(),
    };

    match format {
        OutputFormat::Human => {
            for file in &response.files {
                println!("{}", colors::file_path(file));
            }
        }
        OutputFormat::Json => print_output(&response, format),
    }

    Ok(())
}
