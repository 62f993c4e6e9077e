//! Line-oriented quiz session over any reader and writer.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::app::App;
use crate::models::{AppState, letter_for};

/// Ask every question on `output`, reading one answer line per question
/// from `input`. Returns the final score.
///
/// The app's notice, if any, is printed once below the first cleared
/// screen. End of input is treated as an empty answer, which scores as
/// wrong.
pub fn run_plain<R: BufRead, W: Write>(
    app: &mut App,
    mut input: R,
    mut output: W,
    pause: Duration,
) -> io::Result<usize> {
    app.start_quiz();
    let mut notice_pending = app.notice().is_some();

    while app.state == AppState::Question {
        let (Some(question), Some(answer_set)) = (app.current_question(), app.current_answer_set())
        else {
            break;
        };

        queue!(output, Clear(ClearType::All), MoveTo(0, 0))?;
        if notice_pending {
            if let Some(notice) = app.notice() {
                writeln!(output, "{notice}")?;
            }
            notice_pending = false;
        }
        writeln!(output, "\nCategory: {}", question.category)?;
        writeln!(output, "Difficulty: {}", question.difficulty)?;
        writeln!(output, "\n{}", question.question)?;
        for (index, option) in answer_set.options().iter().enumerate() {
            writeln!(output, "{}) {}", letter_for(index), option)?;
        }
        write!(output, "\nEnter your answer: ")?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;

        if let Some(outcome) = app.submit_answer(&line) {
            if outcome.is_correct {
                writeln!(output, "Correct!")?;
            } else {
                writeln!(output, "Incorrect.")?;
                writeln!(
                    output,
                    "The correct answer is {}) {}",
                    outcome.correct_letter, outcome.correct_text
                )?;
            }
        }
        output.flush()?;

        if !pause.is_zero() {
            thread::sleep(pause);
        }
        app.advance();
    }

    if notice_pending {
        if let Some(notice) = app.notice() {
            writeln!(output, "{notice}")?;
        }
    }

    let tally = app.tally();
    writeln!(output, "\n{tally}")?;
    output.flush()?;
    Ok(tally.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback_questions;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Play a twin app with the same seed to learn every correct letter.
    fn correct_answers(seed: u64) -> String {
        let mut twin = App::with_rng(fallback_questions(), StdRng::seed_from_u64(seed));
        twin.start_quiz();
        let mut answers = String::new();
        while twin.state == AppState::Question {
            let letter = twin.current_answer_set().unwrap().correct_letter();
            answers.push(letter);
            answers.push('\n');
            twin.submit_answer(&letter.to_string());
            twin.advance();
        }
        answers
    }

    #[test]
    fn test_perfect_session() {
        let answers = correct_answers(21);
        let mut app = App::with_rng(fallback_questions(), StdRng::seed_from_u64(21));
        let mut output = Vec::new();

        let score = run_plain(&mut app, answers.as_bytes(), &mut output, Duration::ZERO).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(score, 10);
        assert_eq!(text.matches("Correct!").count(), 10);
        assert_eq!(text.matches("\x1b[2J").count(), 10);
        assert!(text.contains("You scored 10 out of 10."));
    }

    #[test]
    fn test_wrong_and_missing_answers() {
        let mut app = App::with_rng(fallback_questions(), StdRng::seed_from_u64(21));
        let mut output = Vec::new();

        let score = run_plain(&mut app, "z\n".as_bytes(), &mut output, Duration::ZERO).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(score, 0);
        assert_eq!(text.matches("Incorrect.").count(), 10);
        assert!(text.contains("The correct answer is "));
        assert!(text.contains("Category: General Knowledge"));
        assert!(text.contains("You scored 0 out of 10."));
    }

    #[test]
    fn test_notice_follows_first_clear() {
        let mut app = App::with_rng(fallback_questions(), StdRng::seed_from_u64(4));
        app.set_notice("Offline mode. Using default questions.");
        let mut output = Vec::new();

        run_plain(&mut app, io::empty(), &mut output, Duration::ZERO).unwrap();
        let text = String::from_utf8(output).unwrap();

        let first_clear = text.find("\x1b[2J").unwrap();
        let notice_at = text.find("Offline mode.").unwrap();
        let second_clear = first_clear + 1 + text[first_clear + 1..].find("\x1b[2J").unwrap();
        assert!(first_clear < notice_at && notice_at < second_clear);
        assert_eq!(text.matches("Offline mode.").count(), 1);
    }

    #[test]
    fn test_notice_without_questions() {
        let mut app = App::with_rng(Vec::new(), StdRng::seed_from_u64(0));
        app.set_notice("Offline mode.");
        let mut output = Vec::new();

        run_plain(&mut app, io::empty(), &mut output, Duration::ZERO).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("Offline mode."));
    }

    #[test]
    fn test_empty_question_list() {
        let mut app = App::with_rng(Vec::new(), StdRng::seed_from_u64(0));
        let mut output = Vec::new();

        let score = run_plain(&mut app, io::empty(), &mut output, Duration::ZERO).unwrap();
        assert_eq!(score, 0);
        assert!(String::from_utf8(output).unwrap().contains("You scored 0 out of 0."));
    }
}
