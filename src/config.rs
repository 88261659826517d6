use crate::history::{OverrideTable, Route, HISTORY_STORAGE_KEY, MAX_HISTORY_ENTRIES};
use bon::Builder;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DATA_DIR_ENV: &str = "NAVSTACK_HOME";
pub const SESSION_ID_ENV: &str = "NAVSTACK_SESSION_ID";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read the configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse the configuration file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Builder, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HistoryConfig {
    #[builder(default = MAX_HISTORY_ENTRIES)]
    pub max_entries: usize,
    #[builder(default = HISTORY_STORAGE_KEY.to_string())]
    pub storage_key: String,
    #[builder(default = Route::root())]
    pub fallback: Route,
    #[builder(default)]
    pub overrides: OverrideTable,
    #[builder(default = true)]
    pub enabled: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig::builder().build()
    }
}

impl HistoryConfig {
    /// Reads the configuration file; a missing or empty file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(HistoryConfig::default());
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(HistoryConfig::default());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    pub fn from_env() -> Option<Self> {
        Paths::resolve(env::var(DATA_DIR_ENV).ok(), home::home_dir())
    }

    fn resolve(data_dir: Option<String>, home_dir: Option<PathBuf>) -> Option<Self> {
        let data_dir = data_dir
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| home_dir.map(|h| h.join(".navstack")))?;
        Some(Paths { data_dir })
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    pub fn session_file(&self, session_id: &str) -> PathBuf {
        self.data_dir
            .join("sessions")
            .join(format!("{session_id}.json"))
    }
}

/// The session the stack belongs to. Every run is a fresh session unless one
/// is named explicitly.
pub fn session_id() -> String {
    session_id_or_new(env::var(SESSION_ID_ENV).ok())
}

fn session_id_or_new(requested: Option<String>) -> String {
    requested
        .filter(|id| {
            !id.is_empty()
                && id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
