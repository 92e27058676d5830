use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Question, RawQuestion};

/// Default location of the question bank.
pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// Error type for reading a question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{} does not contain any usable question", .path.display())]
    Empty { path: PathBuf },
}

/// Read the question bank at `path`.
///
/// The file must hold a JSON array of question records. Records that parse
/// but fail validation are skipped; a bank with no usable record is an error.
pub async fn load_questions<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let questions = parse_bank(&json, path)?;
    info!(path = %path.display(), count = questions.len(), "loaded question bank");
    Ok(questions)
}

/// Parse and validate a question bank. `origin` is only used in errors and logs.
pub fn parse_bank(json: &str, origin: &Path) -> Result<Vec<Question>, LoadError> {
    let records: Vec<RawQuestion> = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match Question::try_from(raw) {
            Ok(question) => Some(question),
            Err(reason) => {
                warn!(path = %origin.display(), index, %reason, "skipping invalid question");
                None
            }
        })
        .collect();

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: origin.to_path_buf(),
        });
    }

    Ok(questions)
}
