use super::cli::Args;
use super::keys::KeyConfig;
use crate::detector::http::DEFAULT_DETECTOR_URL;
use crate::detector::models::DEFAULT_MODEL_BASE_URL;
use crate::detector::CaptureConstraints;
use crate::recommend::LanguageFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Ticks faster than this would just queue up behind the detector
const MIN_POLL_INTERVAL_MS: u64 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// User-editable configuration stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_model_base_url")]
    pub model_base_url: String,
    /// Defaults to the user cache directory
    #[serde(default)]
    pub model_cache_dir: Option<PathBuf>,
    #[serde(default = "default_detector_url")]
    pub detector_url: String,
    /// Replay script used instead of the HTTP detector when set
    #[serde(default)]
    pub replay: Option<PathBuf>,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default)]
    pub default_filter: LanguageFilter,
    #[serde(default)]
    pub capture: CaptureConstraints,
    #[serde(default)]
    pub keys: KeyConfig,
}

fn default_model_base_url() -> String {
    DEFAULT_MODEL_BASE_URL.to_string()
}

fn default_detector_url() -> String {
    DEFAULT_DETECTOR_URL.to_string()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            model_base_url: default_model_base_url(),
            model_cache_dir: None,
            detector_url: default_detector_url(),
            replay: None,
            poll_interval_ms: default_poll_interval_ms(),
            default_filter: LanguageFilter::All,
            capture: CaptureConstraints::default(),
            keys: KeyConfig::default(),
        }
    }
}

impl UserConfig {
    /// Command line flags win over the file
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(url) = &args.detector_url {
            self.detector_url = url.clone();
        }
        if let Some(path) = &args.replay {
            self.replay = Some(path.clone());
        }
        if let Some(url) = &args.model_base_url {
            self.model_base_url = url.clone();
        }
        if let Some(ms) = args.interval_ms {
            self.poll_interval_ms = ms;
        }
        if let Some(filter) = args.filter {
            self.default_filter = filter;
        }
    }

    pub fn poll_interval(&self) -> Duration {
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            warn!(
                requested = self.poll_interval_ms,
                using = MIN_POLL_INTERVAL_MS,
                "Poll interval too short, clamping"
            );
        }
        Duration::from_millis(self.poll_interval_ms.max(MIN_POLL_INTERVAL_MS))
    }

    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

pub struct AppConfig; // Namespace only

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("moodtune")
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    /// Load an explicit config file, or the default one.
    ///
    /// A missing default file is created with the defaults; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<UserConfig, ConfigError> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let path = Self::get_config_path();
                if path.exists() {
                    Self::read(&path)
                } else {
                    let config = UserConfig::default();
                    if let Some(parent) = path.parent() {
                        let _ = fs::create_dir_all(parent);
                    }
                    if let Err(e) = fs::write(&path, config.to_toml()) {
                        warn!(path = %path.display(), error = %e, "Could not write default config");
                    }
                    Ok(config)
                }
            }
        }
    }

    pub fn read(path: &Path) -> Result<UserConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
