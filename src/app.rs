use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::models::{AnswerSet, AppState, Outcome, QuizQuestion, Tally};

pub struct App {
    pub state: AppState,
    questions: Vec<QuizQuestion>,
    rng: StdRng,
    current_question_index: usize,
    answer_set: Option<AnswerSet>,
    outcomes: Vec<Outcome>,
    result_scroll: usize,
    notice: Option<String>,
}

impl App {
    pub fn with_questions(questions: Vec<QuizQuestion>) -> Self {
        Self::with_rng(questions, StdRng::from_entropy())
    }

    /// Build an app with a caller-provided random source, so shuffles can
    /// be reproduced.
    pub fn with_rng(questions: Vec<QuizQuestion>, rng: StdRng) -> Self {
        Self {
            state: AppState::Welcome,
            questions,
            rng,
            current_question_index: 0,
            answer_set: None,
            outcomes: Vec::new(),
            result_scroll: 0,
            notice: None,
        }
    }

    /// Message shown on the welcome screen, e.g. that the built-in
    /// questions are in use.
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_question_index)
    }

    pub fn current_answer_set(&self) -> Option<&AnswerSet> {
        self.answer_set.as_ref()
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.outcomes.last()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Shuffle the questions and show the first one.
    pub fn start_quiz(&mut self) {
        self.questions.shuffle(&mut self.rng);
        self.current_question_index = 0;
        self.outcomes.clear();
        self.result_scroll = 0;
        debug!(total = self.questions.len(), "quiz started");
        self.show_current_question();
    }

    /// Score the typed answer against the current question.
    ///
    /// Returns `None` when no question is being asked.
    pub fn submit_answer(&mut self, input: &str) -> Option<&Outcome> {
        if self.state != AppState::Question {
            return None;
        }
        let set = self.answer_set.as_ref()?;

        let outcome = Outcome {
            correct_letter: set.correct_letter(),
            correct_text: set.correct_text().to_string(),
            is_correct: set.is_correct(input),
        };
        debug!(
            question = self.current_question_number(),
            correct = outcome.is_correct,
            "answer submitted"
        );

        self.outcomes.push(outcome);
        self.state = AppState::Feedback;
        self.outcomes.last()
    }

    /// Move past the feedback screen to the next question or the result.
    pub fn advance(&mut self) {
        if self.state != AppState::Feedback {
            return;
        }
        self.current_question_index += 1;
        self.show_current_question();
    }

    pub fn calculate_score(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.is_correct)
            .count()
    }

    pub fn tally(&self) -> Tally {
        Tally {
            score: self.calculate_score(),
            total: self.total_questions(),
        }
    }

    /// The tally once every question has been answered.
    pub fn final_tally(&self) -> Option<Tally> {
        if self.state == AppState::Result {
            Some(self.tally())
        } else {
            None
        }
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.outcomes.len() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.current_question_index = 0;
        self.answer_set = None;
        self.outcomes.clear();
        self.result_scroll = 0;
    }

    fn show_current_question(&mut self) {
        match self.questions.get(self.current_question_index) {
            Some(question) => {
                self.answer_set = Some(AnswerSet::shuffled(question, &mut self.rng));
                self.state = AppState::Question;
            }
            None => {
                self.answer_set = None;
                self.state = AppState::Result;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback_questions;

    fn seeded_app(seed: u64) -> App {
        App::with_rng(fallback_questions(), StdRng::seed_from_u64(seed))
    }

    fn correct_input(app: &App) -> String {
        app.current_answer_set().unwrap().correct_letter().to_string()
    }

    #[test]
    fn test_all_correct_answers() {
        let mut app = seeded_app(3);
        app.start_quiz();

        while app.state == AppState::Question {
            let input = correct_input(&app).to_uppercase();
            assert!(app.submit_answer(&input).unwrap().is_correct);
            app.advance();
        }

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.calculate_score(), 10);
        assert_eq!(app.outcomes().len(), 10);
    }

    #[test]
    fn test_invalid_answers_score_zero() {
        let mut app = seeded_app(3);
        app.start_quiz();

        while app.state == AppState::Question {
            let outcome = app.submit_answer("x").unwrap();
            assert!(!outcome.is_correct);
            app.advance();
        }

        assert_eq!(app.calculate_score(), 0);
    }

    #[test]
    fn test_outcome_reports_correct_answer() {
        let mut app = seeded_app(11);
        app.start_quiz();

        let set = app.current_answer_set().unwrap().clone();
        let outcome = app.submit_answer("?").unwrap();
        assert_eq!(outcome.correct_letter, set.correct_letter());
        assert_eq!(outcome.correct_text, set.correct_text());
        assert_eq!(app.state, AppState::Feedback);
    }

    #[test]
    fn test_submit_outside_question_is_ignored() {
        let mut app = seeded_app(1);
        assert!(app.submit_answer("a").is_none());

        app.start_quiz();
        app.submit_answer("a");
        assert!(app.submit_answer("a").is_none());
        assert_eq!(app.outcomes().len(), 1);
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut first = seeded_app(5);
        let mut second = seeded_app(5);
        first.start_quiz();
        second.start_quiz();

        assert_eq!(first.questions(), second.questions());
        assert_eq!(first.current_answer_set(), second.current_answer_set());
    }

    #[test]
    fn test_shuffle_keeps_all_questions() {
        let mut app = seeded_app(9);
        app.start_quiz();

        let mut shuffled: Vec<&str> = app.questions().iter().map(|q| q.question.as_str()).collect();
        let original = fallback_questions();
        let mut expected: Vec<&str> = original.iter().map(|q| q.question.as_str()).collect();
        shuffled.sort();
        expected.sort();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_empty_quiz_goes_straight_to_result() {
        let mut app = App::with_rng(Vec::new(), StdRng::seed_from_u64(0));
        app.start_quiz();
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.calculate_score(), 0);
        assert_eq!(app.total_questions(), 0);
    }

    #[test]
    fn test_final_tally_only_when_finished() {
        let mut app = seeded_app(6);
        assert!(app.final_tally().is_none());

        app.start_quiz();
        let input = correct_input(&app);
        app.submit_answer(&input);
        app.advance();
        assert!(app.final_tally().is_none());

        while app.state == AppState::Question {
            app.submit_answer("x");
            app.advance();
        }
        let tally = app.final_tally().unwrap();
        assert_eq!(tally, Tally { score: 1, total: 10 });
        assert_eq!(tally.to_string(), "You scored 1 out of 10.");
    }

    #[test]
    fn test_restart() {
        let mut app = seeded_app(2);
        app.start_quiz();
        app.submit_answer("a");
        app.advance();
        app.restart();

        assert_eq!(app.state, AppState::Welcome);
        assert!(app.outcomes().is_empty());
        assert!(app.current_answer_set().is_none());
    }

    #[test]
    fn test_result_scroll_is_bounded() {
        let mut app = seeded_app(4);
        app.start_quiz();
        while app.state == AppState::Question {
            app.submit_answer("a");
            app.advance();
        }

        app.scroll_results_up();
        assert_eq!(app.result_scroll(), 0);
        for _ in 0..20 {
            app.scroll_results_down();
        }
        assert_eq!(app.result_scroll(), 9);
    }
}
