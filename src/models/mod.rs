use std::fmt;

mod answer_set;
mod question;

pub use answer_set::{AnswerSet, NUM_OPTIONS, letter_for};
pub use question::{Difficulty, QuizQuestion};

/// Which screen the quiz is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Question,
    Feedback,
    Result,
}

/// Result of answering a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub correct_letter: char,
    pub correct_text: String,
    pub is_correct: bool,
}

/// Final score of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub score: usize,
    pub total: usize,
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You scored {} out of {}.", self.score, self.total)
    }
}
