use std::io;
use std::path::PathBuf;

use tracing::debug;
use trivia_quiz::{QuizError, Roster, roster};

pub fn execute(file: Option<PathBuf>) -> Result<(), QuizError> {
    let roster = match file {
        Some(path) => Roster::from_json_file(&path)?,
        None => Roster::sample(),
    };
    debug!(students = roster.enrollments().len(), "inverting roster");

    roster::write_report(&roster, io::stdout().lock())?;
    Ok(())
}
