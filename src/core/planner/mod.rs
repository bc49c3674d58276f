//! Offline run planning for a channel dump.
//!
//! - **analysis**: keyword ranking, duration parsing, slugs
//! - **manifest**: the `run_manifest.json` document
//! - **run**: directory layout and document generation

pub mod analysis;
pub mod manifest;
pub mod run;

pub use analysis::{
    average_duration, extract_keywords, parse_duration, slugify, title_case, top_keywords,
    DEFAULT_KEYWORD_LIMIT,
};
pub use manifest::{ManifestChannel, RunManifest, ShortEntry, VoiceSettings, STATUS_DRY_RUN};
pub use run::{PlanOptions, RunLayout, RunPlanner, RunSummary, VoiceOptions, RUN_TIMESTAMP_FORMAT};
