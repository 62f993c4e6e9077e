//! Quiz configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Difficulty;

pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";
pub const DEFAULT_CONFIG_FILE: &str = "trivia-quiz.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for fetching and running a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Trivia endpoint, without query parameters.
    pub api_url: String,
    /// Number of questions to request.
    pub amount: u32,
    /// Question type requested from the API.
    pub question_type: String,
    /// Restrict questions to one difficulty.
    pub difficulty: Option<Difficulty>,
    /// Open Trivia DB category id.
    pub category: Option<u32>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// How long the correct/incorrect notice stays up.
    pub feedback_pause_ms: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            amount: 10,
            question_type: "multiple".to_string(),
            difficulty: None,
            category: None,
            timeout_secs: 10,
            feedback_pause_ms: 1500,
        }
    }
}

impl QuizConfig {
    pub fn feedback_pause(&self) -> Duration {
        Duration::from_millis(self.feedback_pause_ms)
    }

    /// Load from an explicit path, or from `trivia-quiz.toml` in the
    /// current directory when it exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) if p.exists() => p.to_path_buf(),
            Some(p) => return Err(ConfigError::NotFound(p.to_path_buf())),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !local.exists() {
                    return Ok(Self::default());
                }
                local
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}
