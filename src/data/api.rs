//! Open Trivia DB client.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::fallback::fallback_questions;
use super::loader::{LoadError, parse_questions};
use crate::config::QuizConfig;
use crate::models::QuizQuestion;

/// Errors that can occur when fetching questions from the trivia API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid API url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("trivia API not reachable: {0}")]
    Connect(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("trivia API error (HTTP {0})")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("trivia API returned no questions")]
    NoQuestions,
}

/// Where the questions of a session came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    Api,
    File,
    /// Built-in questions chosen up front, without calling the API.
    Offline,
    Fallback { reason: String },
}

pub struct TriviaClient {
    client: reqwest::Client,
    config: QuizConfig,
}

impl TriviaClient {
    pub fn new(config: QuizConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The full request URL, query parameters included.
    pub fn request_url(&self) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.config.api_url).map_err(|e| FetchError::InvalidUrl {
            url: self.config.api_url.clone(),
            reason: e.to_string(),
        })?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("amount", &self.config.amount.to_string());
            query.append_pair("type", &self.config.question_type);
            if let Some(difficulty) = self.config.difficulty {
                query.append_pair("difficulty", difficulty.as_query());
            }
            if let Some(category) = self.config.category {
                query.append_pair("category", &category.to_string());
            }
        }

        Ok(url)
    }

    #[instrument(skip(self), fields(url = %self.config.api_url))]
    pub async fn fetch_questions(&self) -> Result<Vec<QuizQuestion>, FetchError> {
        let url = self.request_url()?;
        debug!(%url, "requesting questions");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.config.timeout_secs)
            } else if e.is_connect() {
                FetchError::Connect(e.to_string())
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.config.timeout_secs)
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let questions = parse_questions(&body)?;
        if questions.is_empty() {
            return Err(FetchError::NoQuestions);
        }

        info!(count = questions.len(), "fetched questions");
        Ok(questions)
    }

    /// Fetch questions, switching to the built-in set on any failure.
    pub async fn load_or_fallback(&self) -> (Vec<QuizQuestion>, QuestionSource) {
        match self.fetch_questions().await {
            Ok(questions) => (questions, QuestionSource::Api),
            Err(e) => {
                warn!(error = %e, "falling back to built-in questions");
                (
                    fallback_questions(),
                    QuestionSource::Fallback {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }
}
