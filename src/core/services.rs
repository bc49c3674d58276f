//! Unified service container for shorts-creator
//!
//! Builds the chunker, templates, planner and API client from one
//! resolved configuration.

use crate::core::chunker::TextChunker;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::planner::{RunPlanner, VoiceOptions};
use crate::core::template::TemplateSet;
use crate::core::youtube::YouTubeClient;
use std::sync::Arc;
use std::time::Duration;

/// Unified services container
///
/// All commands use this same struct for service access.
#[derive(Debug, Clone)]
pub struct Services {
    /// Voice chunker built from the `[voice]` settings
    pub chunker: Arc<TextChunker>,

    /// Templates, with overrides from `[plan].templates_dir`
    pub templates: Arc<TemplateSet>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Result<Self> {
        let chunker = TextChunker::new(config.chunking()?).with_policy(config.voice.policy);
        let templates = TemplateSet::new(config.plan.templates_dir.clone());

        Ok(Self {
            chunker: Arc::new(chunker),
            templates: Arc::new(templates),
            config: Arc::new(config),
        })
    }

    /// Create a planner sharing this container's chunker and templates
    pub fn planner(&self) -> RunPlanner {
        RunPlanner::new(
            (*self.templates).clone(),
            (*self.chunker).clone(),
            VoiceOptions {
                prefix: self.config.voice.prefix.clone(),
                voice_id: self.config.voice.voice_id.clone(),
                api: self.config.voice.voice_api.clone(),
            },
        )
    }

    /// Create an API client
    ///
    /// Clients are created per-request since the API key comes from the
    /// command line or environment.
    pub fn youtube_client(&self, api_key: &str) -> Result<YouTubeClient> {
        YouTubeClient::new(
            &self.config.youtube.api_base,
            api_key,
            Duration::from_secs(self.config.youtube.timeout_sec),
        )
    }
}
