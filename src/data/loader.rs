use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::entities::{decode_all, decode_entities};
use crate::models::{Difficulty, QuizQuestion};

/// Errors that can occur while turning an API payload into questions.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed question data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API answered with a non-zero `response_code`.
    #[error("trivia API returned response code {0} ({reason})", reason = describe_response_code(.0))]
    ResponseCode(u64),

    #[error("question {question:?} has {found} incorrect answers, expected 3")]
    AnswerCount { question: String, found: usize },
}

fn describe_response_code(code: &u64) -> &'static str {
    match *code {
        1 => "not enough questions for the query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limited",
        _ => "unknown",
    }
}

#[derive(Deserialize)]
struct TriviaResponse {
    #[serde(default)]
    response_code: Option<u64>,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    difficulty: Difficulty,
    category: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl RawQuestion {
    fn into_question(self) -> Result<QuizQuestion, LoadError> {
        let question = decode_entities(&self.question);
        let incorrect = decode_all(&self.incorrect_answers);
        let incorrect_answers: [String; 3] =
            incorrect
                .try_into()
                .map_err(|rest: Vec<String>| LoadError::AnswerCount {
                    question: question.clone(),
                    found: rest.len(),
                })?;

        Ok(QuizQuestion {
            question,
            difficulty: self.difficulty,
            category: decode_entities(&self.category),
            correct_answer: decode_entities(&self.correct_answer),
            incorrect_answers,
        })
    }
}

/// Build decoded questions from a parsed API response.
///
/// A payload without `results` yields no questions. Every result must carry
/// all five fields.
pub fn extract_questions(json: Value) -> Result<Vec<QuizQuestion>, LoadError> {
    let response: TriviaResponse = serde_json::from_value(json)?;
    into_questions(response)
}

/// Parse a raw API response body and build decoded questions from it.
pub fn parse_questions(json: &str) -> Result<Vec<QuizQuestion>, LoadError> {
    let response: TriviaResponse = serde_json::from_str(json)?;
    into_questions(response)
}

/// Load questions from a file saved in the API response format.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuizQuestion>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_questions(&content)
}

fn into_questions(response: TriviaResponse) -> Result<Vec<QuizQuestion>, LoadError> {
    match response.response_code {
        Some(0) | None => {}
        Some(code) => return Err(LoadError::ResponseCode(code)),
    }

    response
        .results
        .into_iter()
        .map(RawQuestion::into_question)
        .collect()
}
