//! Tests for chunk-text CLI command
//!
//! - Chunking inline text and input files
//! - Overriding the configured window and prefix
//! - Error cases (no input, inverted window, bad prefix)

use crate::common::{create_test_services, sample_narration};
use shorts_creator::cli::commands::chunk::{execute, ChunkArgs};
use shorts_creator::cli::OutputFormat;
use shorts_creator::core::chunker::PackingPolicy;
use shorts_creator::ShortsError;
use std::fs;
use tempfile::TempDir;

fn args(out: &std::path::Path) -> ChunkArgs {
    ChunkArgs {
        input: None,
        text: None,
        out: out.to_path_buf(),
        prefix: None,
        min: None,
        max: None,
        policy: None,
    }
}

fn exit_code(err: &(dyn std::error::Error + 'static)) -> Option<i32> {
    err.downcast_ref::<ShortsError>().map(ShortsError::exit_code)
}

#[tokio::test]
async fn test_chunk_inline_text_human() {
    let (services, _runs) = create_test_services();
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("voice");

    let mut chunk_args = args(&out);
    chunk_args.text = Some("Hello world. This is a test.".to_string());

    let result = execute(chunk_args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Chunking should succeed: {:?}", result.err());

    let content = fs::read_to_string(out.join("voice_part_01.txt")).unwrap();
    assert_eq!(content, "Hello world. This is a test.\n");
    assert!(!out.join("voice_part_02.txt").exists());
}

#[tokio::test]
async fn test_chunk_input_file_with_overrides_json() {
    let (services, _runs) = create_test_services();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("script.txt");
    fs::write(&input, sample_narration()).unwrap();

    let mut chunk_args = args(&temp.path().join("out"));
    chunk_args.input = Some(input);
    chunk_args.prefix = Some("take".to_string());
    chunk_args.min = Some(20);
    chunk_args.max = Some(40);
    chunk_args.policy = Some(PackingPolicy::FillMinimum);

    let result = execute(chunk_args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Chunking should succeed: {:?}", result.err());

    let written = fs::read_dir(temp.path().join("out")).unwrap().count();
    assert!(written > 1);
    assert!(temp.path().join("out/take_part_01.txt").is_file());
}

#[tokio::test]
async fn test_chunk_requires_input_or_text() {
    let (services, _runs) = create_test_services();
    let temp = TempDir::new().unwrap();

    let err = execute(args(temp.path()), &services, OutputFormat::Human)
        .await
        .unwrap_err();

    assert_eq!(exit_code(err.as_ref()), Some(2));
    assert!(err.to_string().contains("--input or --text"));
}

#[tokio::test]
async fn test_chunk_rejects_inverted_window() {
    let (services, _runs) = create_test_services();
    let temp = TempDir::new().unwrap();

    let mut chunk_args = args(temp.path());
    chunk_args.text = Some("Some text.".to_string());
    chunk_args.min = Some(200);
    chunk_args.max = Some(100);

    let err = execute(chunk_args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert_eq!(exit_code(err.as_ref()), Some(2));
}

#[tokio::test]
async fn test_chunk_rejects_prefix_with_separator() {
    let (services, _runs) = create_test_services();
    let temp = TempDir::new().unwrap();

    let mut chunk_args = args(temp.path());
    chunk_args.text = Some("Some text.".to_string());
    chunk_args.prefix = Some("../escape".to_string());

    let err = execute(chunk_args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert_eq!(exit_code(err.as_ref()), Some(2));
}

#[tokio::test]
async fn test_chunk_missing_input_file() {
    let (services, _runs) = create_test_services();
    let temp = TempDir::new().unwrap();

    let mut chunk_args = args(temp.path());
    chunk_args.input = Some(temp.path().join("missing.txt"));

    let err = execute(chunk_args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert_eq!(exit_code(err.as_ref()), Some(1));
}

#[tokio::test]
async fn test_chunk_empty_text_writes_nothing() {
    let (services, _runs) = create_test_services();
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("voice");

    let mut chunk_args = args(&out);
    chunk_args.text = Some("   ".to_string());

    execute(chunk_args, &services, OutputFormat::Json)
        .await
        .unwrap();

    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}
