//! # hangul-quiz
//!
//! A terminal multiple-choice quiz. A question bank is read from JSON, a
//! random pool of questions is drawn from it, each question's options are
//! shuffled, and the score is tallied on a summary screen.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hangul_quiz::{Quiz, QuizConfig, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // The bank is read in the background once the quiz is on screen
//!     let quiz = Quiz::from_json("questions.json", QuizConfig::default())?;
//!
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The session logic lives in [`engine`] and can be driven without a
//! terminal:
//!
//! ```rust
//! use hangul_quiz::engine::Session;
//! use hangul_quiz::Question;
//!
//! let question = Question::new("3시", vec!["세 시".into(), "삼 시".into()], 0).unwrap();
//! let mut rng = rand::thread_rng();
//! let mut session = Session::new(vec![question], &mut rng).unwrap();
//!
//! session.select_answer(session.correct_slot());
//! session.advance(&mut rng);
//! assert!(session.is_completed());
//! assert_eq!(session.score(), 1);
//! ```

mod app;
mod data;
pub mod engine;
pub mod i18n;
mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::{Path, PathBuf};

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::info;

pub use app::{App, QuizConfig};
pub use data::{
    DEFAULT_POOL_SIZE, DEFAULT_QUESTIONS_PATH, LoadError, load_questions, parse_bank, sample_pool,
};
pub use models::{AppState, InvalidQuestion, Question};

use terminal::Tui;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The configuration cannot produce a quiz.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result of a finished background load, tagged with the load it belongs to.
struct Loaded {
    generation: u64,
    result: Result<Vec<Question>, LoadError>,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    None,
    Reload,
    Quit,
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
    source: Option<PathBuf>,
}

impl Quiz {
    /// Create a quiz over an in-memory question bank.
    pub fn new(config: QuizConfig, questions: Vec<Question>) -> Result<Self, QuizError> {
        validate_config(&config)?;
        Ok(Self {
            app: App::with_questions(config, questions),
            source: None,
        })
    }

    /// Create a quiz that reads its bank from a JSON file.
    ///
    /// Nothing is read until [`Quiz::run`]; a bank that fails to load is shown
    /// in the terminal with the option to retry.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use hangul_quiz::{Quiz, QuizConfig};
    ///
    /// let quiz = Quiz::from_json("questions.json", QuizConfig::default()).expect("bad config");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        validate_config(&config)?;
        Ok(Self {
            app: App::new(config),
            source: Some(path.as_ref().to_path_buf()),
        })
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        if let Some(path) = &self.source {
            spawn_load(path.clone(), self.app.begin_loading(), tx.clone());
        }

        let mut tui = Tui::enter()?;
        let result = run_event_loop(&mut tui, &mut self.app, self.source.as_deref(), &tx, &mut rx).await;
        tui.exit()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn validate_config(config: &QuizConfig) -> Result<(), QuizError> {
    if config.pool_size == 0 {
        return Err(QuizError::InvalidConfig(
            "a quiz needs at least one question".to_string(),
        ));
    }
    Ok(())
}

fn spawn_load(path: PathBuf, generation: u64, tx: mpsc::UnboundedSender<Loaded>) {
    info!(path = %path.display(), generation, "loading question bank");
    tokio::spawn(async move {
        let result = load_questions(&path).await;
        // The receiver only goes away when the quiz has exited
        let _ = tx.send(Loaded { generation, result });
    });
}

async fn run_event_loop(
    tui: &mut Tui,
    app: &mut App,
    source: Option<&Path>,
    tx: &mpsc::UnboundedSender<Loaded>,
    rx: &mut mpsc::UnboundedReceiver<Loaded>,
) -> Result<(), QuizError> {
    let mut events = EventStream::new();

    loop {
        tui.draw(app)?;

        tokio::select! {
            Some(loaded) = rx.recv() => {
                app.finish_loading(loaded.generation, loaded.result);
            }
            event = events.next() => {
                let Some(event) = event else {
                    break;
                };
                let Event::Key(key) = event? else {
                    continue;
                };
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match handle_input(app, key.code) {
                    Action::Quit => break,
                    Action::Reload => {
                        if let Some(path) = source {
                            spawn_load(path.to_path_buf(), app.begin_loading(), tx.clone());
                        }
                    }
                    Action::None => {}
                }
            }
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, key: KeyCode) -> Action {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return Action::Quit;
    }

    match app.state {
        AppState::Loading => Action::None,
        AppState::LoadFailed => handle_load_failed_input(key),
        AppState::Quiz => {
            handle_quiz_input(app, key);
            Action::None
        }
        AppState::Result => {
            handle_result_input(app, key);
            Action::None
        }
    }
}

fn handle_load_failed_input(key: KeyCode) -> Action {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Action::Reload,
        _ => Action::None,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit(),
        KeyCode::Right | KeyCode::Char('n') => app.advance(),
        KeyCode::Char(c) => {
            if let Some(slot) = slot_for_key(c) {
                app.select_slot(slot);
            }
        }
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.new_question_set(),
        _ => {}
    }
}

/// `1`..`9` and `a`..`i` pick a slot directly.
fn slot_for_key(c: char) -> Option<usize> {
    match c {
        '1'..='9' => Some(c as usize - '1' as usize),
        'a'..='i' => Some(c as usize - 'a' as usize),
        'A'..='I' => Some(c as usize - 'A' as usize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> QuizConfig {
        QuizConfig {
            pool_size: 10,
            locale: i18n::Locale::En,
        }
    }

    fn questions() -> Vec<Question> {
        vec![
            Question::new("3시", vec!["세 시".into(), "삼 시".into(), "세 개".into()], 0).unwrap(),
        ]
    }

    #[test]
    fn test_slot_for_key() {
        assert_eq!(slot_for_key('1'), Some(0));
        assert_eq!(slot_for_key('4'), Some(3));
        assert_eq!(slot_for_key('b'), Some(1));
        assert_eq!(slot_for_key('C'), Some(2));
        assert_eq!(slot_for_key('0'), None);
        assert_eq!(slot_for_key('z'), None);
    }

    #[test]
    fn test_out_of_range_answer_never_reaches_a_quiz() {
        let bad = r#"[{"text":"x","options":["a","b"],"answer_index":5}]"#;
        assert!(serde_json::from_str::<Vec<Question>>(bad).is_err());

        let good = r#"[{"text":"x","options":["a","b"],"answer_index":1}]"#;
        let questions: Vec<Question> = serde_json::from_str(good).unwrap();
        let mut quiz = Quiz::new(config(), questions).unwrap();

        let session = quiz.app().session().unwrap();
        let slot = session.correct_slot();
        assert_eq!(session.options()[slot], "b");
        quiz.app_mut().select_slot(slot);
        assert_eq!(quiz.app().session().unwrap().score(), 1);
    }

    #[test]
    fn test_zero_pool_size_is_rejected() {
        let config = QuizConfig {
            pool_size: 0,
            ..config()
        };
        assert!(matches!(
            Quiz::new(config.clone(), questions()),
            Err(QuizError::InvalidConfig(_))
        ));
        assert!(matches!(
            Quiz::from_json("questions.json", config),
            Err(QuizError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_key_dispatch_through_a_quiz() {
        let mut quiz = Quiz::new(config(), questions()).unwrap();
        let app = quiz.app_mut();
        assert_eq!(app.state, AppState::Quiz);

        let slot = app.session().unwrap().correct_slot();
        let key = char::from(b'1' + slot as u8);
        assert_eq!(handle_input(app, KeyCode::Char(key)), Action::None);
        assert_eq!(app.session().unwrap().score(), 1);

        // a second pick is ignored
        handle_input(app, KeyCode::Char('1'));
        handle_input(app, KeyCode::Char('2'));
        assert_eq!(app.session().unwrap().selected_slot(), Some(slot));

        handle_input(app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Result);

        handle_input(app, KeyCode::Char('r'));
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session().unwrap().score(), 0);

        assert_eq!(handle_input(app, KeyCode::Char('q')), Action::Quit);
    }

    #[test]
    fn test_load_failed_keys() {
        let mut app = App::new(config());
        let generation = app.begin_loading();
        assert_eq!(handle_input(&mut app, KeyCode::Char('r')), Action::None);

        app.finish_loading(
            generation,
            Err(LoadError::Empty {
                path: PathBuf::from("questions.json"),
            }),
        );
        assert_eq!(handle_input(&mut app, KeyCode::Char('r')), Action::Reload);
        assert_eq!(handle_input(&mut app, KeyCode::Esc), Action::Quit);
    }

    #[test]
    fn test_error_messages() {
        let err = QuizError::from(LoadError::Empty {
            path: PathBuf::from("bank.json"),
        });
        assert_eq!(
            err.to_string(),
            "Failed to load questions: bank.json does not contain any usable question"
        );
    }
}
