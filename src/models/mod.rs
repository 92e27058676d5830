mod question;
mod state;

pub(crate) use question::RawQuestion;
pub use question::{InvalidQuestion, Question};
pub use state::AppState;
