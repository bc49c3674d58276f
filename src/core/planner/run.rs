//! Offline run planning: turns a channel dump into a run directory of
//! scripts, prompts, voice chunks and a manifest.

use super::analysis::{average_duration, slugify, title_case, top_keywords, DEFAULT_KEYWORD_LIMIT};
use super::manifest::{
    ManifestChannel, RunManifest, ShortEntry, VoiceSettings, STATUS_DRY_RUN,
};
use crate::core::chunker::{ChunkWriter, TextChunker};
use crate::core::error::Result;
use crate::core::template::{TemplateKind, TemplateSet};
use crate::core::youtube::ChannelDump;
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp format used for run directory names
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Angle used when a channel yields no keywords
const FALLBACK_ANGLE: &str = "automation";

/// Pacing threshold: channels averaging at most this many seconds are fast-paced
const FAST_PACED_MAX_SECS: f64 = 60.0;

/// Assumed average duration for a channel without videos
const DEFAULT_AVERAGE_SECS: f64 = 45.0;

/// Videos listed as evidence in the channel profile
const EVIDENCE_VIDEOS: usize = 5;

/// Maximum characters of a video title quoted as evidence
const EVIDENCE_TITLE_CHARS: usize = 80;

const AUDIENCE_PROFILE: &str = "Developers, technical founders, and automation-minded teams.";

const FORMATS_LIST: &str =
    "- 45-60s Shorts\n- Hook-first explainer\n- Checklist or step-by-step walkthrough";

const SHORTS_STRATEGY: &str =
    "Prioritize strong hooks, rapid value delivery, and a clear CTA to subscribe or comment.";

const ONSCREEN_TEXT: &str = "- Hook\n- 3-step breakdown\n- Quick win\n- CTA";

const CALL_TO_ACTION: &str = "Follow Atlas for more developer workflow boosts.";

/// Voice file naming and synthesis settings recorded in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceOptions {
    pub prefix: String,
    pub voice_id: String,
    pub api: String,
}

impl Default for VoiceOptions {
    fn default() -> Self {
        Self {
            prefix: "voice".to_string(),
            voice_id: "voice-107".to_string(),
            api: "voice-tool".to_string(),
        }
    }
}

/// Where and how large a run should be
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Explicit run directory; overrides `runs_dir`
    pub run_dir: Option<PathBuf>,
    /// Root for `<slug>/<timestamp>` run directories
    pub runs_dir: PathBuf,
    /// Number of shorts to draft (at least one is always drafted)
    pub shorts: usize,
    /// Fixed timestamp; defaults to the local time
    pub timestamp: Option<String>,
}

/// Result of a planned run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub manifest: RunManifest,
}

/// Subdirectories of a run
#[derive(Debug, Clone)]
pub struct RunLayout {
    pub root: PathBuf,
    pub analysis: PathBuf,
    pub metadata: PathBuf,
    pub scripts: PathBuf,
    pub prompts: PathBuf,
    pub voice: PathBuf,
    pub manifests: PathBuf,
}

impl RunLayout {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            analysis: root.join("analysis"),
            metadata: root.join("metadata"),
            scripts: root.join("scripts"),
            prompts: root.join("prompts"),
            voice: root.join("voice"),
            manifests: root.join("manifests"),
        }
    }

    pub fn create(&self) -> std::io::Result<()> {
        for dir in [
            &self.analysis,
            &self.metadata,
            &self.scripts,
            &self.prompts,
            &self.voice,
            &self.manifests,
        ] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

/// Text drafted for one short around a keyword angle
#[derive(Debug, Clone)]
struct ShortDraft {
    title: String,
    hook: String,
    script_body: String,
    prompt_paragraph: String,
}

impl ShortDraft {
    fn new(angle: &str) -> Self {
        let angle_title = title_case(angle);
        Self {
            title: format!("{angle_title} workflow boost"),
            hook: format!("{angle_title} in 60 seconds: the one trick you should steal"),
            script_body: format!(
                "Here is a rapid breakdown of {angle} you can use today. \
                 First, identify the core step that saves the most time. \
                 Second, automate it with a repeatable template or script. \
                 Third, verify the output with a quick sanity check. \
                 Finally, document the workflow so your team can reuse it."
            ),
            prompt_paragraph: format!(
                "Vertical 9:16 short showing a focused developer workstation scene where {angle} \
                 is explained with crisp motion graphics, fast jump cuts, and subtle neon lighting. \
                 The camera starts with a tight close-up on a laptop screen, then pans to a \
                 whiteboard as the three-step workflow appears as kinetic text overlays. The mood \
                 is energetic and precise, with clean UI highlights, soft blue rim lighting, and \
                 quick cuts matching the narration pacing. End on a bold CTA overlay to follow for \
                 more workflow boosts. Aspect ratio 9:16, duration 60 seconds."
            ),
        }
    }

    /// Narration handed to the voice chunker
    fn voice_text(&self) -> String {
        format!("{}\n{}", self.script_body, CALL_TO_ACTION)
    }
}

/// Builds run directories from channel dumps
#[derive(Debug, Clone, Default)]
pub struct RunPlanner {
    templates: TemplateSet,
    chunker: TextChunker,
    voice: VoiceOptions,
}

impl RunPlanner {
    pub fn new(templates: TemplateSet, chunker: TextChunker, voice: VoiceOptions) -> Self {
        Self {
            templates,
            chunker,
            voice,
        }
    }

    /// Create the run directory and every document in it.
    pub fn plan(&self, dump: &ChannelDump, options: &PlanOptions) -> Result<RunSummary> {
        let channel = &dump.channel;
        let title = channel.display_title().to_string();

        let timestamp = options.timestamp.clone().unwrap_or_else(|| {
            chrono::Local::now()
                .format(RUN_TIMESTAMP_FORMAT)
                .to_string()
        });

        let run_dir = match &options.run_dir {
            Some(dir) => dir.clone(),
            None => options.runs_dir.join(slugify(&title)).join(&timestamp),
        };

        let layout = RunLayout::new(&run_dir);
        layout.create()?;
        tracing::info!("Planning run in {:?}", run_dir);

        fs::write(
            layout.metadata.join("channel_dump.json"),
            serde_json::to_string_pretty(dump)?,
        )?;

        let keywords = top_keywords(
            &dump.videos,
            channel.description.as_deref(),
            DEFAULT_KEYWORD_LIMIT,
        );
        tracing::debug!("Channel keywords: {:?}", keywords);

        let report = self.render_report(dump, &keywords, &timestamp)?;
        fs::write(layout.analysis.join("channel_profile.md"), report)?;

        let shorts_count = options.shorts.max(1);
        let mut shorts = Vec::with_capacity(shorts_count);
        for index in 1..=shorts_count {
            shorts.push(self.plan_short(&layout, index, &keywords)?);
        }

        let config = self.chunker.config();
        let manifest = RunManifest {
            channel: ManifestChannel {
                title,
                id: channel.id.clone().unwrap_or_default(),
                handle: channel.custom_url.clone().unwrap_or_default(),
            },
            timestamp,
            shorts_count,
            shorts,
            voice_settings: VoiceSettings {
                chunk_words: config.min_words(),
                max_words: config.max_words(),
                policy: self.chunker.policy().to_string(),
                voice_id: self.voice.voice_id.clone(),
                api: self.voice.api.clone(),
            },
            status: STATUS_DRY_RUN.to_string(),
            performance_notes: String::new(),
            iterations: Vec::new(),
            publish_schedule: Vec::new(),
        };

        let manifest_path = layout.manifests.join("run_manifest.json");
        fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;

        tracing::info!(
            "Planned {} short(s) for '{}'",
            manifest.shorts_count,
            manifest.channel.title
        );

        Ok(RunSummary {
            run_dir,
            manifest_path,
            manifest,
        })
    }

    fn render_report(
        &self,
        dump: &ChannelDump,
        keywords: &[String],
        timestamp: &str,
    ) -> Result<String> {
        let channel = &dump.channel;
        let primary = keywords.first().map(String::as_str).unwrap_or(FALLBACK_ANGLE);

        let average = average_duration(&dump.videos).unwrap_or(DEFAULT_AVERAGE_SECS);
        let pacing = if average <= FAST_PACED_MAX_SECS {
            "fast-paced"
        } else {
            "mid-paced"
        };

        let themes = if keywords.is_empty() {
            "- general technology".to_string()
        } else {
            bullet_list(keywords.iter().map(String::as_str))
        };

        let evidence = bullet_list(dump.videos.iter().take(EVIDENCE_VIDEOS).map(|v| {
            let title = v.title.as_deref().unwrap_or_default();
            match title.char_indices().nth(EVIDENCE_TITLE_CHARS) {
                Some((cut, _)) => &title[..cut],
                None => title,
            }
        }));

        let mapping = [
            ("CHANNEL_TITLE", channel.display_title().to_string()),
            ("CHANNEL_ID", channel.id.clone().unwrap_or_default()),
            ("CHANNEL_HANDLE", channel.custom_url.clone().unwrap_or_default()),
            ("TIMESTAMP", timestamp.to_string()),
            (
                "NICHE_SUMMARY",
                format!("Short-form {primary} education for developers and tech builders."),
            ),
            (
                "STYLE_SUMMARY",
                format!("{pacing} explainers with tactical tips and quick demos."),
            ),
            ("THEMES_LIST", themes),
            ("AUDIENCE_PROFILE", AUDIENCE_PROFILE.to_string()),
            ("FORMATS_LIST", FORMATS_LIST.to_string()),
            ("EVIDENCE_SUMMARY", evidence),
            ("SHORTS_STRATEGY", SHORTS_STRATEGY.to_string()),
        ];

        self.templates.render(TemplateKind::ChannelReport, &mapping)
    }

    fn plan_short(&self, layout: &RunLayout, index: usize, keywords: &[String]) -> Result<ShortEntry> {
        let short_id = format!("short_{index:03}");
        let angle = if keywords.is_empty() {
            FALLBACK_ANGLE
        } else {
            keywords[(index - 1) % keywords.len()].as_str()
        };
        let draft = ShortDraft::new(angle);

        let script = self.templates.render(
            TemplateKind::ShortsScript,
            &[
                ("SHORT_ID", short_id.as_str()),
                ("TITLE", draft.title.as_str()),
                ("HOOK", draft.hook.as_str()),
                ("SCRIPT_BODY", draft.script_body.as_str()),
                ("ONSCREEN_TEXT", ONSCREEN_TEXT),
                ("CTA", CALL_TO_ACTION),
            ],
        )?;
        let script_path = layout.scripts.join(format!("{short_id}.md"));
        fs::write(&script_path, script)?;

        let prompt = self.templates.render(
            TemplateKind::VeoPrompt,
            &[("PROMPT_PARAGRAPH", draft.prompt_paragraph.as_str())],
        )?;
        let prompt_path = layout.prompts.join(format!("{short_id}_veo.txt"));
        fs::write(&prompt_path, prompt)?;

        let voice_dir = layout.voice.join(&short_id);
        fs::create_dir_all(&voice_dir)?;
        let voice_text = draft.voice_text();
        fs::write(voice_dir.join("voice_source.txt"), &voice_text)?;

        let chunks = self.chunker.chunk_text(&voice_text);
        let writer = ChunkWriter::new(&voice_dir, self.voice.prefix.as_str())?;
        let chunk_paths = writer.write_all(&chunks)?;

        Ok(ShortEntry {
            id: short_id,
            title: draft.title,
            script_path: script_path.display().to_string(),
            prompt_path: prompt_path.display().to_string(),
            voice_chunks: chunk_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            audio_generated: false,
        })
    }
}

fn bullet_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
