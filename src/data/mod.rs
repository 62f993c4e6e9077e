mod api;
mod entities;
mod fallback;
mod loader;

pub use api::{FetchError, QuestionSource, TriviaClient};
pub use entities::{decode_all, decode_entities};
pub use fallback::{FALLBACK_QUESTIONS, fallback_questions};
pub use loader::{LoadError, extract_questions, load_questions_from_json, parse_questions};
