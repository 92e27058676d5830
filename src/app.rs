use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::data::{DEFAULT_POOL_SIZE, LoadError, sample_pool};
use crate::engine::Session;
use crate::i18n::Locale;
use crate::models::{AppState, Question};

/// Settings for a quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// How many questions to draw from the bank for each session.
    pub pool_size: usize,
    pub locale: Locale,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            locale: Locale::detect(),
        }
    }
}

pub struct App {
    pub state: AppState,
    config: QuizConfig,
    rng: StdRng,
    bank: Vec<Question>,
    session: Option<Session>,
    load_error: Option<String>,
    load_generation: u64,
    cursor: usize,
    result_scroll: usize,
}

impl App {
    pub fn new(config: QuizConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: QuizConfig, rng: StdRng) -> Self {
        Self {
            state: AppState::Loading,
            config,
            rng,
            bank: Vec::new(),
            session: None,
            load_error: None,
            load_generation: 0,
            cursor: 0,
            result_scroll: 0,
        }
    }

    /// Start a session straight from an in-memory bank.
    pub fn with_questions(config: QuizConfig, questions: Vec<Question>) -> Self {
        let mut app = Self::new(config);
        let generation = app.begin_loading();
        app.finish_loading(generation, Ok(questions));
        app
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Enter the loading screen. The returned generation must be handed back
    /// to [`App::finish_loading`]; results from older loads are dropped.
    pub fn begin_loading(&mut self) -> u64 {
        self.load_generation += 1;
        self.state = AppState::Loading;
        self.load_error = None;
        self.load_generation
    }

    pub fn finish_loading(&mut self, generation: u64, result: Result<Vec<Question>, LoadError>) {
        if generation != self.load_generation || self.state != AppState::Loading {
            debug!(generation, current = self.load_generation, "dropping stale load result");
            return;
        }

        match result {
            Ok(bank) => {
                self.bank = bank;
                self.start_session();
            }
            Err(err) => {
                warn!(error = %err, "question bank failed to load");
                self.fail(err.to_string());
            }
        }
    }

    /// Draw a new pool from the cached bank and start answering.
    pub fn start_session(&mut self) {
        let pool = sample_pool(&self.bank, self.config.pool_size, &mut self.rng);
        match Session::new(pool, &mut self.rng) {
            Ok(session) => {
                info!(questions = session.total(), bank = self.bank.len(), "session started");
                self.session = Some(session);
                self.state = AppState::Quiz;
                self.cursor = 0;
                self.result_scroll = 0;
            }
            Err(err) => self.fail(err.to_string()),
        }
    }

    fn fail(&mut self, message: String) {
        self.session = None;
        self.load_error = Some(message);
        self.state = AppState::LoadFailed;
    }

    fn option_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.options().len())
    }

    fn can_move_cursor(&self) -> bool {
        self.state == AppState::Quiz && self.session.as_ref().is_some_and(|s| !s.is_answered())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if self.can_move_cursor() && count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if self.can_move_cursor() && count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Answer with the option at `slot`.
    pub fn select_slot(&mut self, slot: usize) {
        if self.state != AppState::Quiz {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            if session.select_answer(slot).is_some() {
                self.cursor = slot;
            }
        }
    }

    /// Enter on the quiz screen: answer the highlighted option, or move on
    /// once the question is answered.
    pub fn submit(&mut self) {
        let answered = self.session.as_ref().is_some_and(Session::is_answered);
        if answered {
            self.advance();
        } else {
            self.select_slot(self.cursor);
        }
    }

    pub fn advance(&mut self) {
        if self.state != AppState::Quiz {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if session.advance(&mut self.rng) {
            self.cursor = 0;
            if session.is_completed() {
                self.state = AppState::Result;
                self.result_scroll = 0;
            }
        }
    }

    /// Replay the current pool in a new order.
    pub fn restart(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.restart(&mut self.rng);
        self.state = AppState::Quiz;
        self.cursor = 0;
        self.result_scroll = 0;
    }

    /// Play a freshly drawn pool without reading the bank again.
    pub fn new_question_set(&mut self) {
        if self.bank.is_empty() {
            return;
        }
        self.start_session();
    }

    pub fn scroll_results_down(&mut self) {
        let answered = self.session.as_ref().map_or(0, |s| s.review().count());
        let max_scroll = answered.saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn config(pool_size: usize) -> QuizConfig {
        QuizConfig {
            pool_size,
            locale: Locale::En,
        }
    }

    fn bank(len: usize) -> Vec<Question> {
        (0..len)
            .map(|i| {
                Question::new(
                    format!("q{}", i),
                    vec!["a".to_string(), "b".to_string(), "c".to_string()],
                    i % 3,
                )
                .unwrap()
            })
            .collect()
    }

    fn app() -> App {
        App::with_rng(config(10), StdRng::seed_from_u64(9))
    }

    #[test]
    fn test_load_success_starts_quiz() {
        let mut app = app();
        let generation = app.begin_loading();
        assert_eq!(app.state, AppState::Loading);

        app.finish_loading(generation, Ok(bank(25)));
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session().unwrap().total(), 10);
    }

    #[test]
    fn test_load_failure_then_retry() {
        let mut app = app();
        let generation = app.begin_loading();
        app.finish_loading(
            generation,
            Err(LoadError::Empty {
                path: PathBuf::from("questions.json"),
            }),
        );
        assert_eq!(app.state, AppState::LoadFailed);
        assert!(app.load_error().unwrap().contains("questions.json"));

        let retry = app.begin_loading();
        assert_eq!(app.load_error(), None);
        app.finish_loading(retry, Ok(bank(3)));
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session().unwrap().total(), 3);
    }

    #[test]
    fn test_stale_load_result_is_dropped() {
        let mut app = app();
        let first = app.begin_loading();
        let second = app.begin_loading();

        app.finish_loading(first, Ok(bank(1)));
        assert_eq!(app.state, AppState::Loading);

        app.finish_loading(second, Ok(bank(2)));
        assert_eq!(app.session().unwrap().total(), 2);
    }

    #[test]
    fn test_events_ignored_while_loading() {
        let mut app = app();
        app.begin_loading();
        app.select_slot(0);
        app.submit();
        app.advance();
        app.select_next_option();
        assert_eq!(app.state, AppState::Loading);
        assert!(app.session().is_none());
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_cursor_moves_without_options_are_no_ops() {
        let mut app = app();
        app.state = AppState::Quiz;
        app.select_previous_option();
        app.select_next_option();
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_cursor_wraps_and_locks_after_answer() {
        let mut app = app();
        let generation = app.begin_loading();
        app.finish_loading(generation, Ok(bank(2)));

        app.select_previous_option();
        assert_eq!(app.cursor(), 2);
        app.select_next_option();
        assert_eq!(app.cursor(), 0);

        app.select_next_option();
        app.submit();
        assert_eq!(app.session().unwrap().selected_slot(), Some(1));

        app.select_next_option();
        assert_eq!(app.cursor(), 1);
    }

    #[test]
    fn test_full_run_restart_and_new_set() {
        let mut app = app();
        let generation = app.begin_loading();
        app.finish_loading(generation, Ok(bank(12)));

        while app.state == AppState::Quiz {
            let slot = app.session().unwrap().correct_slot();
            app.select_slot(slot);
            app.submit();
        }
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.session().unwrap().summary().score, 10);

        app.scroll_results_down();
        assert_eq!(app.result_scroll(), 1);
        app.scroll_results_up();
        app.scroll_results_up();
        assert_eq!(app.result_scroll(), 0);

        app.restart();
        assert_eq!(app.state, AppState::Quiz);
        let session = app.session().unwrap();
        assert_eq!((session.score(), session.pool_index()), (0, 0));
        assert_eq!(session.selected_slot(), None);

        app.new_question_set();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session().unwrap().total(), 10);
    }
}
