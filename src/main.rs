use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use hangul_quiz::i18n::Locale;
use hangul_quiz::{DEFAULT_POOL_SIZE, DEFAULT_QUESTIONS_PATH, Quiz, QuizConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Number of questions per session
    #[arg(short = 'n', long, default_value_t = DEFAULT_POOL_SIZE)]
    count: usize,

    /// Display language (detected from the environment when omitted)
    #[arg(short, long, value_enum)]
    lang: Option<Locale>,

    /// Write logs to this file (the terminal is taken by the quiz)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Failed to set up logging to {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let config = QuizConfig {
        pool_size: args.count,
        locale: args.lang.unwrap_or_else(Locale::detect),
    };

    let quiz = match Quiz::from_json(&args.questions, config) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(path: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()?;
    Ok(())
}
