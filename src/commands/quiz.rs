use tracing::info;
use trivia_quiz::{
    Quiz, QuizConfig, QuizError, QuestionSource, TriviaClient, fallback_questions,
    load_questions_from_json,
};

use crate::QuizArgs;

pub async fn execute(args: QuizArgs) -> Result<(), QuizError> {
    let config = resolve_config(&args)?;
    let pause = config.feedback_pause();

    let (questions, source) = if let Some(path) = &args.questions {
        (load_questions_from_json(path)?, QuestionSource::File)
    } else if args.offline {
        (fallback_questions(), QuestionSource::Offline)
    } else {
        TriviaClient::new(config)?.load_or_fallback().await
    };
    info!(count = questions.len(), ?source, "questions loaded");

    let mut quiz = Quiz::new(questions);
    if let Some(notice) = source_notice(&source) {
        quiz = quiz.with_notice(notice);
    }

    if args.plain {
        quiz.run_plain(pause)?;
    } else if let Some(tally) = quiz.run(pause)? {
        println!("{tally}");
    }

    Ok(())
}

/// What to tell the player when the built-in questions are in use.
fn source_notice(source: &QuestionSource) -> Option<String> {
    match source {
        QuestionSource::Offline => Some("Offline mode. Using default questions.".to_string()),
        QuestionSource::Fallback { reason } => Some(format!(
            "Unable to load questions from the API ({reason}). Using default questions."
        )),
        QuestionSource::Api | QuestionSource::File => None,
    }
}

fn resolve_config(args: &QuizArgs) -> Result<QuizConfig, QuizError> {
    let mut config = QuizConfig::load(args.config.as_deref())?;

    if let Some(amount) = args.amount {
        config.amount = amount;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = Some(difficulty);
    }
    if let Some(category) = args.category {
        config.category = Some(category);
    }
    if let Some(api_url) = &args.api_url {
        config.api_url = api_url.clone();
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    if let Some(pause_ms) = args.pause_ms {
        config.feedback_pause_ms = pause_ms;
    }

    Ok(config)
}
