//! Configuration management for shorts-creator.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::chunker::{ChunkingConfig, PackingPolicy, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS};
use crate::core::error::{Result, ShortsError};
use crate::core::xdg::XdgDirs;
use crate::core::youtube::DEFAULT_API_BASE;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub voice: VoiceConfig,
    #[serde(default)]
    pub youtube: YouTubeConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub plan: PlanConfig,
}

/// Voice chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VoiceConfig {
    /// Target minimum words per chunk
    #[serde(default = "default_min_words")]
    pub min_words: usize,

    /// Hard maximum words per chunk
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// File name prefix for chunk files
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// How `min_words` is honoured when packing
    #[serde(default)]
    pub policy: PackingPolicy,

    /// Voice recorded in run manifests
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// Synthesis tool recorded in run manifests
    #[serde(default = "default_voice_api")]
    pub voice_api: String,
}

/// YouTube Data API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YouTubeConfig {
    /// API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,
}

/// Output locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Root directory for planned runs
    #[serde(default = "default_runs_dir")]
    pub runs_dir: PathBuf,
}

/// Run planning configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlanConfig {
    /// Shorts drafted per run
    #[serde(default = "default_shorts_count")]
    pub shorts_count: usize,

    /// Directory with template overrides
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
}

// Default value functions
fn default_min_words() -> usize {
    DEFAULT_MIN_WORDS
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

fn default_prefix() -> String {
    "voice".to_string()
}

fn default_voice_id() -> String {
    "voice-107".to_string()
}

fn default_voice_api() -> String {
    "voice-tool".to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_runs_dir() -> PathBuf {
    PathBuf::from("./runs")
}

fn default_shorts_count() -> usize {
    5
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            min_words: default_min_words(),
            max_words: default_max_words(),
            prefix: default_prefix(),
            policy: PackingPolicy::default(),
            voice_id: default_voice_id(),
            voice_api: default_voice_api(),
        }
    }
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_sec: default_timeout(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            runs_dir: default_runs_dir(),
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            shorts_count: default_shorts_count(),
            templates_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ShortsError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. SHORTS_CONFIG or SHORTS_CONFIG_FILE env var
    /// 2. XDG config file (~/.config/shorts-creator/config.toml)
    /// 3. ./shorts.toml in the working directory
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("SHORTS_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("shorts.toml").exists() {
                Self::from_file("shorts.toml")?
            } else {
                Self::default()
            }
        };

        // Runs land in the XDG data directory unless configured otherwise
        if env::var("SHORTS_RUNS_DIR").is_err() && config.output.runs_dir == default_runs_dir() {
            config.output.runs_dir = xdg.runs_dir();
        }

        config.merge_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// Unparseable numbers are ignored; an unknown packing policy is an
    /// error.
    pub fn merge_env(&mut self) -> Result<()> {
        if let Ok(min_words) = env::var("SHORTS_MIN_WORDS") {
            if let Ok(n) = min_words.parse() {
                self.voice.min_words = n;
            }
        }
        if let Ok(max_words) = env::var("SHORTS_MAX_WORDS") {
            if let Ok(n) = max_words.parse() {
                self.voice.max_words = n;
            }
        }
        if let Ok(prefix) = env::var("SHORTS_PREFIX") {
            self.voice.prefix = prefix;
        }
        if let Ok(policy) = env::var("SHORTS_POLICY") {
            self.voice.policy = policy
                .parse()
                .map_err(|e| ShortsError::ConfigError(format!("SHORTS_POLICY: {e}")))?;
        }

        if let Ok(api_base) = env::var("SHORTS_API_BASE") {
            self.youtube.api_base = api_base;
        }
        if let Ok(timeout) = env::var("SHORTS_API_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.youtube.timeout_sec = t;
            }
        }

        if let Ok(runs_dir) = env::var("SHORTS_RUNS_DIR") {
            self.output.runs_dir = PathBuf::from(runs_dir);
        }

        if let Ok(count) = env::var("SHORTS_COUNT") {
            if let Ok(n) = count.parse() {
                self.plan.shorts_count = n;
            }
        }
        if let Ok(dir) = env::var("SHORTS_TEMPLATES_DIR") {
            self.plan.templates_dir = Some(PathBuf::from(dir));
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.chunking()?;

        if self.voice.prefix.is_empty() {
            return Err(ShortsError::ConfigError(
                "Voice prefix must not be empty".to_string(),
            ));
        }

        if self.voice.prefix.contains(['/', '\\']) {
            return Err(ShortsError::ConfigError(format!(
                "Voice prefix '{}' must not contain path separators",
                self.voice.prefix
            )));
        }

        if self.youtube.api_base.is_empty() {
            return Err(ShortsError::ConfigError(
                "API base URL must not be empty".to_string(),
            ));
        }

        if self.youtube.timeout_sec == 0 {
            return Err(ShortsError::ConfigError(
                "API timeout must be non-zero".to_string(),
            ));
        }

        if self.plan.shorts_count == 0 {
            return Err(ShortsError::ConfigError(
                "Shorts count must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Validated word window from the voice settings
    pub fn chunking(&self) -> Result<ChunkingConfig> {
        ChunkingConfig::new(self.voice.min_words, self.voice.max_words)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  Voice chunks: {}-{} words ({})",
            self.voice.min_words,
            self.voice.max_words,
            self.voice.policy
        );
        tracing::info!("  Voice prefix: {}", self.voice.prefix);
        tracing::info!("  API base: {}", self.youtube.api_base);
        tracing::info!("  API timeout: {}s", self.youtube.timeout_sec);
        tracing::info!("  Runs dir: {:?}", self.output.runs_dir);
        tracing::info!("  Shorts per run: {}", self.plan.shorts_count);
        if let Some(dir) = &self.plan.templates_dir {
            tracing::info!("  Templates dir: {:?}", dir);
        }
    }
}
