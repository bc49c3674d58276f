//! Run manifest written to `manifests/run_manifest.json`.

use serde::{Deserialize, Serialize};

/// Status recorded for runs that generate text only
pub const STATUS_DRY_RUN: &str = "dry_run";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RunManifest {
    pub channel: ManifestChannel,
    pub timestamp: String,
    pub shorts_count: usize,
    pub shorts: Vec<ShortEntry>,
    pub voice_settings: VoiceSettings,
    pub status: String,
    pub performance_notes: String,
    pub iterations: Vec<serde_json::Value>,
    pub publish_schedule: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ManifestChannel {
    pub title: String,
    pub id: String,
    pub handle: String,
}

/// Files produced for one short
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShortEntry {
    pub id: String,
    pub title: String,
    pub script_path: String,
    pub prompt_path: String,
    pub voice_chunks: Vec<String>,
    pub audio_generated: bool,
}

/// Voice chunking and synthesis settings used for the run
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VoiceSettings {
    pub chunk_words: usize,
    pub max_words: usize,
    pub policy: String,
    pub voice_id: String,
    pub api: String,
}
