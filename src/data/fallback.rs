//! Built-in questions used when the trivia API cannot be reached.

use crate::models::{Difficulty, QuizQuestion};

type FallbackEntry = (&'static str, Difficulty, &'static str, &'static str, [&'static str; 3]);

/// Category, difficulty, question, correct answer, incorrect answers.
pub const FALLBACK_QUESTIONS: [FallbackEntry; 10] = [
    (
        "General Knowledge",
        Difficulty::Easy,
        "What is the name of the Jewish New Year?",
        "Rosh Hashanah",
        ["Elul", "New Year", "Succoss"],
    ),
    (
        "General Knowledge",
        Difficulty::Medium,
        "Which river flows through the Scottish city of Glasgow?",
        "Clyde",
        ["Tay", "Dee", "Tweed"],
    ),
    (
        "General Knowledge",
        Difficulty::Easy,
        "What is the French word for \"fish\"?",
        "poisson",
        ["fiche", "escargot", "mer"],
    ),
    (
        "General Knowledge",
        Difficulty::Hard,
        "Sciophobia is the fear of what?",
        "Shadows",
        ["Eating", "Bright lights", "Transportation"],
    ),
    (
        "General Knowledge",
        Difficulty::Hard,
        "Which film star has his statue in Leicester Square?",
        "Charlie Chaplin",
        ["Paul Newman", "Rowan Atkinson ", "Alfred Hitchcock"],
    ),
    (
        "General Knowledge",
        Difficulty::Hard,
        "Originally another word for poppy, coquelicot is a shade of what?",
        "Red",
        ["Green", "Blue", "Pink"],
    ),
    (
        "General Knowledge",
        Difficulty::Easy,
        "What is Tasmania?",
        "An Australian State",
        [
            "A flavor of Ben and Jerry's ice-cream",
            "A Psychological Disorder",
            "The Name of a Warner Brothers Cartoon Character",
        ],
    ),
    (
        "General Knowledge",
        Difficulty::Hard,
        "What is the romanized Korean word for \"heart\"?",
        "Simjang",
        ["Aejeong", "Jeongsin", "Segseu"],
    ),
    (
        "General Knowledge",
        Difficulty::Medium,
        "What was the original name of the search engine \"Google\"?",
        "BackRub",
        ["CatMassage", "SearchPro", "Netscape Navigator"],
    ),
    (
        "General Knowledge",
        Difficulty::Hard,
        "In the MMO RPG \"Realm of the Mad God\", what dungeon is widely considered to be the most difficult?",
        "The Shatter's",
        [
            "Snake Pit",
            "The Tomb of the Acient's",
            "The Puppet Master's Theater",
        ],
    ),
];

pub fn fallback_questions() -> Vec<QuizQuestion> {
    FALLBACK_QUESTIONS
        .iter()
        .map(
            |(category, difficulty, question, correct, incorrect)| QuizQuestion {
                question: question.to_string(),
                difficulty: *difficulty,
                category: category.to_string(),
                correct_answer: correct.to_string(),
                incorrect_answers: incorrect.map(str::to_string),
            },
        )
        .collect()
}
