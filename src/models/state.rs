/// Which screen the application is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// The question bank is being read.
    Loading,
    /// The bank could not be read; the user may retry.
    LoadFailed,
    /// Answering questions.
    Quiz,
    /// Final score for the session.
    Result,
}
