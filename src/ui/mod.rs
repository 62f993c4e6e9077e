mod feedback;
mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => welcome::render(frame, area, app),
        AppState::Question => quiz::render(frame, area, app),
        AppState::Feedback => feedback::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback_questions;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_question_screen_shows_details_and_options() {
        let mut app = App::with_rng(fallback_questions(), StdRng::seed_from_u64(8));
        app.start_quiz();

        let text = screen_text(&app);
        assert!(text.contains("Category: General Knowledge"));
        assert!(text.contains("Difficulty:"));
        assert!(text.contains("a) "));
        assert!(text.contains("d) "));
        assert!(text.contains("1/10"));
    }

    #[test]
    fn test_feedback_screen_names_correct_answer() {
        let mut app = App::with_rng(fallback_questions(), StdRng::seed_from_u64(8));
        app.start_quiz();
        let letter = app.current_answer_set().unwrap().correct_letter();
        app.submit_answer("?");

        let text = screen_text(&app);
        assert!(text.contains("Incorrect."));
        assert!(text.contains(&format!("The correct answer is {letter})")));
    }

    #[test]
    fn test_welcome_screen_shows_notice() {
        let mut app = App::with_rng(fallback_questions(), StdRng::seed_from_u64(8));
        app.set_notice("Using built-in questions");

        let text = screen_text(&app);
        assert!(text.contains("TRIVIA QUIZ"));
        assert!(text.contains("10 Questions"));
        assert!(text.contains("Using built-in questions"));
    }

    #[test]
    fn test_result_screen_shows_tally() {
        let mut app = App::with_rng(Vec::new(), StdRng::seed_from_u64(0));
        app.start_quiz();

        let text = screen_text(&app);
        assert!(text.contains("You scored 0 out of 0."));
    }
}
