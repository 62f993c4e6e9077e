use rand::Rng;
use rand::seq::SliceRandom;

use super::QuizQuestion;

pub const NUM_OPTIONS: usize = 4;

const OPTION_LETTERS: [char; NUM_OPTIONS] = ['a', 'b', 'c', 'd'];

/// The four options shown for one question, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    options: [String; NUM_OPTIONS],
    correct_index: usize,
}

impl AnswerSet {
    /// Shuffle the three incorrect answers together with the correct one.
    pub fn shuffled<R: Rng + ?Sized>(question: &QuizQuestion, rng: &mut R) -> Self {
        let [first, second, third] = question.incorrect_answers.clone();
        let mut slots = [
            (first, false),
            (second, false),
            (third, false),
            (question.correct_answer.clone(), true),
        ];
        slots.shuffle(rng);

        // Exactly one slot is flagged, so the position is always found.
        let correct_index = slots.iter().position(|(_, correct)| *correct).unwrap_or(0);
        let options = slots.map(|(text, _)| text);

        Self {
            options,
            correct_index,
        }
    }

    pub fn options(&self) -> &[String; NUM_OPTIONS] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn correct_letter(&self) -> char {
        letter_for(self.correct_index)
    }

    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_index]
    }

    /// Case-insensitive check of a typed answer. Anything that is not
    /// exactly the correct letter counts as wrong.
    pub fn is_correct(&self, input: &str) -> bool {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_lowercase() == self.correct_letter(),
            _ => false,
        }
    }
}

/// Label for the option at `index` (`a` for 0 through `d` for 3).
pub fn letter_for(index: usize) -> char {
    OPTION_LETTERS[index % NUM_OPTIONS]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_question() -> QuizQuestion {
        QuizQuestion {
            question: "Sciophobia is the fear of what?".to_string(),
            difficulty: Difficulty::Hard,
            category: "General Knowledge".to_string(),
            correct_answer: "Shadows".to_string(),
            incorrect_answers: [
                "Eating".to_string(),
                "Bright lights".to_string(),
                "Transportation".to_string(),
            ],
        }
    }

    #[test]
    fn test_correct_answer_appears_once_and_letter_matches_lookup() {
        let question = sample_question();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = AnswerSet::shuffled(&question, &mut rng);

            let positions: Vec<usize> = set
                .options()
                .iter()
                .enumerate()
                .filter(|(_, option)| **option == question.correct_answer)
                .map(|(index, _)| index)
                .collect();
            assert_eq!(positions, vec![set.correct_index()]);

            let lookup = set
                .options()
                .iter()
                .position(|option| *option == question.correct_answer)
                .unwrap();
            assert_eq!(set.correct_letter(), letter_for(lookup));
            assert_eq!(set.correct_text(), "Shadows");
        }
    }

    #[test]
    fn test_shuffle_keeps_every_option() {
        let question = sample_question();
        let mut rng = StdRng::seed_from_u64(42);
        let set = AnswerSet::shuffled(&question, &mut rng);

        let mut options = set.options().to_vec();
        options.sort();
        assert_eq!(
            options,
            vec!["Bright lights", "Eating", "Shadows", "Transportation"]
        );
    }

    #[test]
    fn test_every_position_is_reachable() {
        let question = sample_question();
        let mut seen = [false; NUM_OPTIONS];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            seen[AnswerSet::shuffled(&question, &mut rng).correct_index()] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn test_is_correct_is_case_insensitive() {
        let question = sample_question();
        let mut rng = StdRng::seed_from_u64(1);
        let set = AnswerSet::shuffled(&question, &mut rng);
        let letter = set.correct_letter();

        assert!(set.is_correct(&letter.to_string()));
        assert!(set.is_correct(&letter.to_ascii_uppercase().to_string()));
        assert!(set.is_correct(&format!(" {letter}\n")));
    }

    #[test]
    fn test_invalid_input_counts_as_wrong() {
        let question = sample_question();
        let mut rng = StdRng::seed_from_u64(1);
        let set = AnswerSet::shuffled(&question, &mut rng);
        let letter = set.correct_letter();

        assert!(!set.is_correct(""));
        assert!(!set.is_correct("z"));
        assert!(!set.is_correct("1"));
        assert!(!set.is_correct(&format!("{letter}{letter}")));
        assert!(!set.is_correct(set.correct_text()));
    }

    #[test]
    fn test_letter_for() {
        assert_eq!(letter_for(0), 'a');
        assert_eq!(letter_for(3), 'd');
    }
}
