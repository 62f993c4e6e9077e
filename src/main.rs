use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use trivia_quiz::Difficulty;

mod commands;

#[derive(Parser)]
#[command(version, about = "Terminal trivia quiz and roster utility", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a trivia quiz (the default)
    Quiz(QuizArgs),

    /// Invert a student -> courses roster into course -> students
    Roster {
        /// JSON object mapping students to course lists; a sample is used if omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct QuizArgs {
    /// TOML config file (defaults to ./trivia-quiz.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file to load the questions from instead of the API
    #[arg(short, long)]
    pub questions: Option<PathBuf>,

    /// Skip the API and use the built-in questions
    #[arg(long, conflicts_with = "questions")]
    pub offline: bool,

    /// Number of questions to request
    #[arg(long)]
    pub amount: Option<u32>,

    /// Only ask questions of this difficulty
    #[arg(long, value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    /// Open Trivia DB category id
    #[arg(long)]
    pub category: Option<u32>,

    /// Trivia API endpoint
    #[arg(long)]
    pub api_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// How long to show whether an answer was right, in milliseconds
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// Use plain line prompts instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    match value.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => Err(format!("unknown difficulty '{other}' (expected easy, medium or hard)")),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trivia_quiz=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Quiz(args)) => commands::quiz::execute(args).await,
        None => commands::quiz::execute(QuizArgs::default()).await,
        Some(Commands::Roster { file }) => commands::roster::execute(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
