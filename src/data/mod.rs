mod loader;
mod pool;

pub use loader::{DEFAULT_QUESTIONS_PATH, LoadError, load_questions, parse_bank};
pub use pool::{DEFAULT_POOL_SIZE, sample_pool};
