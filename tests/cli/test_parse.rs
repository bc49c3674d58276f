//! Argument parsing for the `shorts` command line

use clap::Parser;
use shorts_creator::cli::{Cli, Commands, OutputFormat};
use shorts_creator::core::chunker::PackingPolicy;

#[test]
fn test_parse_chunk_text() {
    let cli = Cli::try_parse_from([
        "shorts",
        "chunk-text",
        "--text",
        "Hello.",
        "--out",
        "voice",
        "--min",
        "80",
        "--policy",
        "fill-minimum",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Human);
    match cli.command {
        Commands::ChunkText(args) => {
            assert_eq!(args.text.as_deref(), Some("Hello."));
            assert_eq!(args.min, Some(80));
            assert_eq!(args.max, None);
            assert_eq!(args.policy, Some(PackingPolicy::FillMinimum));
        }
        other => panic!("Unexpected command: {other:?}"),
    }
}

#[test]
fn test_chunk_text_requires_out() {
    assert!(Cli::try_parse_from(["shorts", "chunk-text", "--text", "Hello."]).is_err());
}

#[test]
fn test_chunk_text_input_conflicts_with_text() {
    let result = Cli::try_parse_from([
        "shorts", "chunk-text", "--input", "a.txt", "--text", "b", "--out", "o",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_policy_rejected() {
    let result = Cli::try_parse_from([
        "shorts", "chunk-text", "--text", "b", "--out", "o", "--policy", "lazy",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_global_format_after_subcommand() {
    let cli = Cli::try_parse_from([
        "shorts",
        "plan-run",
        "--input",
        "dump.json",
        "--shorts",
        "3",
        "--format",
        "json",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::PlanRun(args) => assert_eq!(args.shorts, Some(3)),
        other => panic!("Unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_channel_dump() {
    let cli = Cli::try_parse_from([
        "shorts",
        "channel-dump",
        "https://www.youtube.com/@atlasdev",
        "--api-key",
        "k",
        "--max",
        "25",
        "--pretty",
    ])
    .unwrap();

    match cli.command {
        Commands::ChannelDump(args) => {
            assert_eq!(args.channel, "https://www.youtube.com/@atlasdev");
            assert_eq!(args.api_key.as_deref(), Some("k"));
            assert_eq!(args.max, Some(25));
            assert!(args.pretty);
        }
        other => panic!("Unexpected command: {other:?}"),
    }
}
