use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::Question;

/// Number of questions drawn for a session unless configured otherwise.
pub const DEFAULT_POOL_SIZE: usize = 10;

/// Draw `min(size, bank.len())` distinct questions in random order.
pub fn sample_pool<R: Rng + ?Sized>(bank: &[Question], size: usize, rng: &mut R) -> Vec<Question> {
    let mut pool: Vec<Question> = bank.choose_multiple(rng, size).cloned().collect();
    // choose_multiple does not promise a random order
    pool.shuffle(rng);
    pool
}
