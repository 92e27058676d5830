use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::Question;

/// The options of one question in display order.
///
/// `mapping[slot]` is the index the option at `slot` had in the question.
/// The mapping is built by permuting indices, so options with identical text
/// still map back to distinct originals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    options: Vec<String>,
    mapping: Vec<usize>,
    correct_slot: usize,
}

impl Presentation {
    /// Shuffle `options` uniformly at random. The input is left untouched.
    ///
    /// Returns `None` when `correct_index` does not point into `options`.
    pub fn shuffle<R: Rng + ?Sized>(
        options: &[String],
        correct_index: usize,
        rng: &mut R,
    ) -> Option<Self> {
        if correct_index >= options.len() {
            return None;
        }
        Some(Self::build(options, correct_index, rng))
    }

    /// Shuffle the options of a question. A `Question` always has a valid
    /// answer index, so this cannot fail.
    pub fn for_question<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Self {
        Self::build(question.options(), question.answer_index(), rng)
    }

    // Callers guarantee `correct_index < options.len()`.
    fn build<R: Rng + ?Sized>(options: &[String], correct_index: usize, rng: &mut R) -> Self {
        let mut mapping: Vec<usize> = (0..options.len()).collect();
        mapping.shuffle(rng);

        let mut slots = vec![0; mapping.len()];
        for (slot, &index) in mapping.iter().enumerate() {
            slots[index] = slot;
        }
        let shuffled = mapping.iter().map(|&index| options[index].clone()).collect();

        Self {
            options: shuffled,
            correct_slot: slots[correct_index],
            mapping,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn mapping(&self) -> &[usize] {
        &self.mapping
    }

    /// Original option index shown at `slot`, or `None` when out of range.
    pub fn original_index(&self, slot: usize) -> Option<usize> {
        self.mapping.get(slot).copied()
    }

    pub fn correct_slot(&self) -> usize {
        self.correct_slot
    }

    pub fn is_correct(&self, slot: usize) -> bool {
        slot == self.correct_slot
    }

    /// Undo the shuffle: the options back in the order they were given.
    pub fn original_order(&self) -> Vec<String> {
        let mut restored = vec![String::new(); self.options.len()];
        for (slot, &index) in self.mapping.iter().enumerate() {
            restored[index] = self.options[slot].clone();
        }
        restored
    }
}
