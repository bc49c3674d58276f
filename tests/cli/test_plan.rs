//! Tests for plan-run CLI command
//!
//! - Planning into the configured runs directory
//! - Explicit output directory and shorts count
//! - Error cases (missing or malformed dump)

use crate::common::{create_test_services, sample_dump};
use shorts_creator::cli::commands::plan::{execute, PlanArgs};
use shorts_creator::cli::OutputFormat;
use shorts_creator::core::planner::RunManifest;
use std::fs;
use tempfile::TempDir;

fn write_dump(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("channel_dump.json");
    fs::write(&path, serde_json::to_string_pretty(&sample_dump()).unwrap()).unwrap();
    path
}

#[tokio::test]
async fn test_plan_into_runs_dir_human() {
    let (services, runs_temp) = create_test_services();
    let temp = TempDir::new().unwrap();

    let args = PlanArgs {
        input: write_dump(temp.path()),
        out: None,
        shorts: Some(2),
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Plan should succeed: {:?}", result.err());

    let channel_runs = runs_temp.path().join("runs").join("atlas-dev");
    let run_dirs: Vec<_> = fs::read_dir(&channel_runs).unwrap().collect();
    assert_eq!(run_dirs.len(), 1);

    let run_dir = run_dirs[0].as_ref().unwrap().path();
    assert!(run_dir.join("scripts/short_002.md").is_file());
    assert!(!run_dir.join("scripts/short_003.md").exists());
}

#[tokio::test]
async fn test_plan_explicit_out_uses_config_count_json() {
    let (services, _runs) = create_test_services();
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("run");

    let args = PlanArgs {
        input: write_dump(temp.path()),
        out: Some(out.clone()),
        shorts: None,
    };

    execute(args, &services, OutputFormat::Json).await.unwrap();

    let manifest: RunManifest = serde_json::from_str(
        &fs::read_to_string(out.join("manifests/run_manifest.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest.shorts_count, services.config.plan.shorts_count);
    assert_eq!(manifest.shorts.len(), 5);
}

#[tokio::test]
async fn test_plan_missing_dump() {
    let (services, _runs) = create_test_services();
    let temp = TempDir::new().unwrap();

    let args = PlanArgs {
        input: temp.path().join("missing.json"),
        out: None,
        shorts: None,
    };

    let err = execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("channel-dump"));
}

#[tokio::test]
async fn test_plan_malformed_dump() {
    let (services, _runs) = create_test_services();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("bad.json");
    fs::write(&input, "{not json").unwrap();

    let args = PlanArgs {
        input,
        out: Some(temp.path().join("run")),
        shorts: None,
    };

    assert!(execute(args, &services, OutputFormat::Human).await.is_err());
    assert!(!temp.path().join("run").exists());
}
