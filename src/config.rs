use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::{DEFAULT_SYLLABLE_THRESHOLD, DEFAULT_WORD_THRESHOLD};

/// Application configuration, read from `~/.hemingway.toml`
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Analyzer thresholds
    pub analysis: AnalysisConfig,
    /// Voice capture staging
    pub capture: CaptureConfig,
    /// Logging
    pub telemetry: TelemetryConfig,
}

/// Thresholds used by the analyzer
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Syllable count at which a word is complex
    pub complex_word_syllables: usize,
    /// Word count above which a sentence is long
    pub long_sentence_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            complex_word_syllables: DEFAULT_SYLLABLE_THRESHOLD,
            long_sentence_words: DEFAULT_WORD_THRESHOLD,
        }
    }
}

/// Where and how captured audio is staged for transcription
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CaptureConfig {
    /// Sample rate of the audio handed to the capture (Hz)
    pub sample_rate: u32,
    /// Channels of the audio handed to the capture
    pub channels: u16,
    /// Directory for staged recordings (`~/` is expanded)
    pub staging_dir: String,
    /// Staged recordings older than this are removed (0 = no age limit)
    pub retention_minutes: u32,
    /// At most this many staged recordings are kept (0 = no limit)
    pub max_count: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            channels: 1,
            staging_dir: "~/.hemingway/recordings".to_owned(),
            retention_minutes: 60,
            max_count: 20,
        }
    }
}

/// Logging destination
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Log to `log_path` instead of stderr
    pub enabled: bool,
    /// Log file (`~/` is expanded)
    pub log_path: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: "~/.hemingway/hemingway.log".to_owned(),
        }
    }
}

const DEFAULT_CONFIG: &str = r#"[analysis]
complex_word_syllables = 3
long_sentence_words = 20

[capture]
sample_rate = 48000
channels = 1
staging_dir = "~/.hemingway/recordings"
retention_minutes = 60
max_count = 20

[telemetry]
enabled = false
log_path = "~/.hemingway/hemingway.log"
"#;

impl Config {
    /// Load config from ~/.hemingway.toml, writing defaults if it is missing
    ///
    /// # Errors
    /// Returns error if HOME is unset or the file cannot be written, read or parsed
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default(&config_path).context("failed to create default config")?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let config: Self = toml::from_str(&contents).context("failed to parse config TOML")?;

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("HOME environment variable not set")?;
        Ok(PathBuf::from(home).join(".hemingway.toml"))
    }

    fn create_default(path: &Path) -> Result<()> {
        fs::write(path, DEFAULT_CONFIG).context("failed to write default config")?;
        Ok(())
    }

    /// Expand ~ in paths to home directory
    ///
    /// # Errors
    /// Returns error if the path starts with `~/` and HOME is unset
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        if let Some(stripped) = path.strip_prefix("~/") {
            let home = std::env::var("HOME").context("HOME environment variable not set")?;
            Ok(PathBuf::from(home).join(stripped))
        } else {
            Ok(PathBuf::from(path))
        }
    }
}
