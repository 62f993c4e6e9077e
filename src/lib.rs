//! # trivia-quiz
//!
//! A terminal trivia quiz backed by the Open Trivia DB API, plus a small
//! student/course roster inverter.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_quiz::{Quiz, QuizConfig, QuizError, TriviaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let config = QuizConfig::default();
//!     let pause = config.feedback_pause();
//!
//!     // Falls back to the built-in questions if the API is unavailable
//!     let client = TriviaClient::new(config)?;
//!     let (questions, _source) = client.load_or_fallback().await;
//!
//!     if let Some(tally) = Quiz::new(questions).run(pause)? {
//!         println!("{tally}");
//!     }
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod data;
mod models;
pub mod roster;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use config::{ConfigError, QuizConfig};
pub use data::{
    FALLBACK_QUESTIONS, FetchError, LoadError, QuestionSource, TriviaClient, decode_all,
    decode_entities, extract_questions, fallback_questions, load_questions_from_json,
    parse_questions,
};
pub use models::{
    AnswerSet, AppState, Difficulty, NUM_OPTIONS, Outcome, QuizQuestion, Tally, letter_for,
};
pub use roster::{CourseRoster, Enrollment, Roster, RosterError, invert_roster};
pub use session::run_plain;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("failed to fetch questions: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Show `notice` on the welcome screen.
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.app.set_notice(notice);
        self
    }

    /// Load a quiz from a JSON file in the trivia API response format.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions))
    }

    /// Run the quiz full-screen.
    ///
    /// The correct/incorrect notice stays up for `pause`, or until a key is
    /// pressed. Returns the tally, or `None` when the player quit before
    /// the last question.
    pub fn run(mut self, pause: Duration) -> Result<Option<Tally>, QuizError> {
        let mut session = terminal::TerminalSession::enter()?;
        run_event_loop(session.terminal(), &mut self.app, pause)?;
        Ok(self.app.final_tally())
    }

    /// Run the quiz as plain prompts on stdin/stdout.
    pub fn run_plain(mut self, pause: Duration) -> Result<usize, QuizError> {
        let stdin = io::stdin();
        let score = run_plain(&mut self.app, stdin.lock(), io::stdout(), pause)?;
        Ok(score)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

const INPUT_POLL: Duration = Duration::from_millis(50);

fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    pause: Duration,
) -> Result<(), QuizError> {
    let mut feedback_since: Option<Instant> = None;

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if app.state == AppState::Feedback {
            let shown_at = *feedback_since.get_or_insert_with(Instant::now);
            if shown_at.elapsed() >= pause {
                feedback_since = None;
                app.advance();
                continue;
            }
        } else {
            feedback_since = None;
        }

        if !event::poll(INPUT_POLL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Question => handle_question_input(app, key),
        AppState::Feedback => {
            app.advance();
            false
        }
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

// Every character is an answer, so only Esc leaves mid-quiz.
fn handle_question_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => {
            app.submit_answer(&c.to_string());
            false
        }
        KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}
