use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::Question;

use super::shuffle::Presentation;
use super::summary::{Summary, rounded_percent};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot start a session without questions")]
    EmptyPool,
}

/// Where the session is in its question cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The active question is waiting for an answer.
    Unanswered,
    /// The active question has been answered and is locked.
    Answered,
    /// Every question in the pool has been answered.
    Completed,
}

/// One pass over a pool of questions.
///
/// Events that are not legal in the current [`Phase`] are ignored and leave
/// the session untouched.
#[derive(Debug, Clone)]
pub struct Session {
    pool: Vec<Question>,
    index: usize,
    score: usize,
    selected_slot: Option<usize>,
    completed: bool,
    presentation: Presentation,
    /// Correctness of each answered question, in pool order.
    outcomes: Vec<bool>,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(pool: Vec<Question>, rng: &mut R) -> Result<Self, SessionError> {
        let Some(first) = pool.first() else {
            return Err(SessionError::EmptyPool);
        };
        let presentation = Presentation::for_question(first, rng);
        let outcomes = Vec::with_capacity(pool.len());

        Ok(Self {
            pool,
            index: 0,
            score: 0,
            selected_slot: None,
            completed: false,
            presentation,
            outcomes,
        })
    }

    pub fn phase(&self) -> Phase {
        if self.completed {
            Phase::Completed
        } else if self.selected_slot.is_some() {
            Phase::Answered
        } else {
            Phase::Unanswered
        }
    }

    /// Lock in the option shown at `slot`.
    ///
    /// Returns whether the answer was correct, or `None` if the selection was
    /// rejected (already answered, completed, or `slot` out of range).
    pub fn select_answer(&mut self, slot: usize) -> Option<bool> {
        if self.phase() != Phase::Unanswered {
            debug!(slot, phase = ?self.phase(), "ignoring answer");
            return None;
        }
        let Some(original) = self.presentation.original_index(slot) else {
            debug!(slot, options = self.presentation.len(), "ignoring out of range slot");
            return None;
        };

        let correct = original == self.question().answer_index();
        if correct {
            self.score += 1;
        }
        self.selected_slot = Some(slot);
        self.outcomes.push(correct);
        Some(correct)
    }

    /// Move past an answered question. Returns `false` if not answered yet.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.phase() != Phase::Answered {
            debug!(phase = ?self.phase(), "ignoring advance");
            return false;
        }

        if self.index + 1 == self.pool.len() {
            self.completed = true;
            info!(score = self.score, total = self.total(), "session completed");
            return true;
        }

        self.index += 1;
        self.selected_slot = None;
        self.presentation = Presentation::for_question(&self.pool[self.index], rng);
        true
    }

    /// Start over with the same questions in a new order.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pool.shuffle(rng);
        self.index = 0;
        self.score = 0;
        self.selected_slot = None;
        self.completed = false;
        self.outcomes.clear();
        self.presentation = Presentation::for_question(&self.pool[0], rng);
    }

    /// The active question; after completion, the last one answered.
    pub fn question(&self) -> &Question {
        &self.pool[self.index]
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Options of the active question in display order.
    pub fn options(&self) -> &[String] {
        self.presentation.options()
    }

    pub fn is_answered(&self) -> bool {
        self.selected_slot.is_some()
    }

    pub fn selected_slot(&self) -> Option<usize> {
        self.selected_slot
    }

    pub fn is_slot_correct(&self, slot: usize) -> bool {
        self.presentation.is_correct(slot)
    }

    pub fn correct_slot(&self) -> usize {
        self.presentation.correct_slot()
    }

    /// Whether the locked-in answer was right, if there is one.
    pub fn last_answer_correct(&self) -> Option<bool> {
        self.selected_slot
            .map(|slot| self.presentation.is_correct(slot))
    }

    pub fn correct_option_text(&self) -> &str {
        self.question().correct_option()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.pool.len()
    }

    /// Index into the pool; equals `total()` once completed.
    pub fn pool_index(&self) -> usize {
        if self.completed {
            self.pool.len()
        } else {
            self.index
        }
    }

    /// 1-based number of the active question.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// Questions left after the active one.
    pub fn remaining(&self) -> usize {
        self.pool.len() - self.index - 1
    }

    pub fn progress_percent(&self) -> u32 {
        rounded_percent(self.position(), self.total())
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn summary(&self) -> Summary {
        Summary::new(self.score, self.total())
    }

    /// Answered questions paired with whether they were answered correctly.
    pub fn review(&self) -> impl Iterator<Item = (&Question, bool)> {
        self.pool.iter().zip(self.outcomes.iter().copied())
    }
}
