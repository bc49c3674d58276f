//! Planning runs from a channel dump

use crate::common::{sample_dump, words};
use shorts_creator::core::chunker::{ChunkingConfig, TextChunker};
use shorts_creator::core::planner::{
    PlanOptions, RunManifest, RunPlanner, VoiceOptions, STATUS_DRY_RUN,
};
use shorts_creator::core::template::{unresolved_placeholders, TemplateSet};
use shorts_creator::core::youtube::ChannelDump;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn options(runs_dir: &Path, shorts: usize) -> PlanOptions {
    PlanOptions {
        run_dir: None,
        runs_dir: runs_dir.to_path_buf(),
        shorts,
        timestamp: Some("2024-05-01_10-00-00".to_string()),
    }
}

#[test]
fn test_run_directory_layout() {
    let temp = TempDir::new().unwrap();
    let summary = RunPlanner::default()
        .plan(&sample_dump(), &options(temp.path(), 2))
        .unwrap();

    let run_dir = temp.path().join("atlas-dev").join("2024-05-01_10-00-00");
    assert_eq!(summary.run_dir, run_dir);
    for dir in ["analysis", "metadata", "scripts", "prompts", "voice", "manifests"] {
        assert!(run_dir.join(dir).is_dir(), "Missing {dir}/");
    }

    assert!(run_dir.join("metadata/channel_dump.json").is_file());
    assert!(run_dir.join("analysis/channel_profile.md").is_file());
    assert!(run_dir.join("scripts/short_001.md").is_file());
    assert!(run_dir.join("scripts/short_002.md").is_file());
    assert!(run_dir.join("prompts/short_002_veo.txt").is_file());
    assert!(run_dir.join("voice/short_001/voice_source.txt").is_file());
    assert!(run_dir.join("voice/short_001/voice_part_01.txt").is_file());
    assert_eq!(summary.manifest_path, run_dir.join("manifests/run_manifest.json"));
}

#[test]
fn test_explicit_run_dir_wins() {
    let temp = TempDir::new().unwrap();
    let mut opts = options(&temp.path().join("unused"), 1);
    opts.run_dir = Some(temp.path().join("my-run"));

    let summary = RunPlanner::default().plan(&sample_dump(), &opts).unwrap();

    assert_eq!(summary.run_dir, temp.path().join("my-run"));
    assert!(!temp.path().join("unused").exists());
}

#[test]
fn test_manifest_contents() {
    let temp = TempDir::new().unwrap();
    let summary = RunPlanner::default()
        .plan(&sample_dump(), &options(temp.path(), 3))
        .unwrap();

    let written: RunManifest =
        serde_json::from_str(&fs::read_to_string(&summary.manifest_path).unwrap()).unwrap();
    assert_eq!(written, summary.manifest);

    assert_eq!(written.channel.title, "Atlas Dev");
    assert_eq!(written.channel.id, "UCfakechannel000000000001");
    assert_eq!(written.channel.handle, "@atlasdev");
    assert_eq!(written.timestamp, "2024-05-01_10-00-00");
    assert_eq!(written.status, STATUS_DRY_RUN);
    assert_eq!(written.shorts_count, 3);
    assert_eq!(written.voice_settings.chunk_words, 120);
    assert_eq!(written.voice_settings.max_words, 160);
    assert_eq!(written.voice_settings.policy, "greedy");
    assert_eq!(written.voice_settings.voice_id, "voice-107");
    assert!(written.iterations.is_empty());
    assert!(written.publish_schedule.is_empty());

    let ids: Vec<&str> = written.shorts.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["short_001", "short_002", "short_003"]);
    for short in &written.shorts {
        assert!(!short.audio_generated);
        assert!(Path::new(&short.script_path).is_file());
        assert!(Path::new(&short.prompt_path).is_file());
        assert!(!short.voice_chunks.is_empty());
    }
}

#[test]
fn test_shorts_rotate_through_keywords() {
    // Ranked keywords: automation, pipelines, deploy, developers, ...
    let temp = TempDir::new().unwrap();
    let summary = RunPlanner::default()
        .plan(&sample_dump(), &options(temp.path(), 3))
        .unwrap();

    let titles: Vec<&str> = summary
        .manifest
        .shorts
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Automation workflow boost",
            "Pipelines workflow boost",
            "Deploy workflow boost"
        ]
    );
}

#[test]
fn test_zero_shorts_still_drafts_one() {
    let temp = TempDir::new().unwrap();
    let summary = RunPlanner::default()
        .plan(&sample_dump(), &options(temp.path(), 0))
        .unwrap();

    assert_eq!(summary.manifest.shorts_count, 1);
    assert_eq!(summary.manifest.shorts.len(), 1);
}

#[test]
fn test_documents_have_no_unfilled_placeholders() {
    let temp = TempDir::new().unwrap();
    let summary = RunPlanner::default()
        .plan(&sample_dump(), &options(temp.path(), 1))
        .unwrap();

    for doc in [
        "analysis/channel_profile.md",
        "scripts/short_001.md",
        "prompts/short_001_veo.txt",
    ] {
        let content = fs::read_to_string(summary.run_dir.join(doc)).unwrap();
        assert!(
            unresolved_placeholders(&content).is_empty(),
            "{doc} has unfilled placeholders"
        );
    }

    let profile =
        fs::read_to_string(summary.run_dir.join("analysis/channel_profile.md")).unwrap();
    assert!(profile.contains("Atlas Dev"));
    assert!(profile.contains("- automation"));
    assert!(profile.contains("fast-paced"));
    assert!(profile.contains("- Deploy pipelines with GitHub Actions"));
}

#[test]
fn test_voice_chunks_cover_voice_source() {
    let temp = TempDir::new().unwrap();
    let chunker = TextChunker::new(ChunkingConfig::new(5, 12).unwrap());
    let voice = VoiceOptions {
        prefix: "narration".to_string(),
        ..Default::default()
    };
    let planner = RunPlanner::new(TemplateSet::builtin(), chunker, voice);

    let summary = planner.plan(&sample_dump(), &options(temp.path(), 1)).unwrap();

    let voice_dir = summary.run_dir.join("voice/short_001");
    let source = fs::read_to_string(voice_dir.join("voice_source.txt")).unwrap();
    assert!(source.ends_with("Follow Atlas for more developer workflow boosts."));

    let chunks = &summary.manifest.shorts[0].voice_chunks;
    assert!(chunks.len() > 1);
    assert!(chunks[0].ends_with("narration_part_01.txt"));

    let mut spoken = String::new();
    for path in chunks {
        let chunk = fs::read_to_string(path).unwrap();
        assert!(words(&chunk).len() <= 12);
        spoken.push_str(&chunk);
        spoken.push(' ');
    }
    assert_eq!(words(&spoken), words(&source));
}

#[test]
fn test_template_overrides() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(
        templates.join("veo-prompt-template.txt"),
        "PROMPT: {{PROMPT_PARAGRAPH}}\n",
    )
    .unwrap();

    let planner = RunPlanner::new(
        TemplateSet::new(Some(templates)),
        TextChunker::default(),
        VoiceOptions::default(),
    );
    let summary = planner
        .plan(&sample_dump(), &options(&temp.path().join("runs"), 1))
        .unwrap();

    let prompt = fs::read_to_string(summary.run_dir.join("prompts/short_001_veo.txt")).unwrap();
    assert!(prompt.starts_with("PROMPT: Vertical 9:16 short"));
    assert!(prompt.contains("automation"));
}

#[test]
fn test_channel_dump_copy_round_trips() {
    let temp = TempDir::new().unwrap();
    let dump = sample_dump();
    let summary = RunPlanner::default()
        .plan(&dump, &options(temp.path(), 1))
        .unwrap();

    let copy: ChannelDump = serde_json::from_str(
        &fs::read_to_string(summary.run_dir.join("metadata/channel_dump.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(copy, dump);
}

#[test]
fn test_empty_dump_uses_fallbacks() {
    let temp = TempDir::new().unwrap();
    let summary = RunPlanner::default()
        .plan(&ChannelDump::default(), &options(temp.path(), 1))
        .unwrap();

    assert!(summary.run_dir.starts_with(temp.path().join("channel")));
    assert_eq!(summary.manifest.channel.title, "Channel");
    assert_eq!(summary.manifest.shorts[0].title, "Automation workflow boost");

    let profile =
        fs::read_to_string(summary.run_dir.join("analysis/channel_profile.md")).unwrap();
    assert!(profile.contains("- general technology"));
}
