//! The quiz session engine: option shuffling, the per-session state machine
//! and the final summary.
//!
//! Nothing in here touches the terminal or the file system, and every source
//! of randomness is passed in by the caller.

mod session;
mod shuffle;
mod summary;

pub use session::{Phase, Session, SessionError};
pub use shuffle::Presentation;
pub use summary::{Grade, Summary};
