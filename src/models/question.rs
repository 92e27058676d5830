use serde::Deserialize;
use thiserror::Error;

/// Smallest number of options a question may offer.
pub const MIN_OPTIONS: usize = 2;

/// A single multiple-choice question from the bank.
///
/// Fields are private and every constructor validates, so
/// `answer_index < options.len()` holds for any `Question` value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    text: String,
    options: Vec<String>,
    answer_index: usize,
}

/// A bank record as written on disk, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    #[serde(alias = "question")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(alias = "answerIndex", alias = "answer")]
    pub answer_index: usize,
}

/// Why a parsed record cannot be used as a question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidQuestion {
    #[error("question has {count} option(s), at least 2 are required")]
    TooFewOptions { count: usize },
    #[error("answer index {index} is out of range for {len} options")]
    AnswerOutOfRange { index: usize, len: usize },
}

impl TryFrom<RawQuestion> for Question {
    type Error = InvalidQuestion;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Question::new(raw.text, raw.options, raw.answer_index)
    }
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        answer_index: usize,
    ) -> Result<Self, InvalidQuestion> {
        let question = Self {
            text: text.into(),
            options,
            answer_index,
        };
        question.validate()?;
        Ok(question)
    }

    /// Checks `answer_index < options.len()` and the minimum option count.
    fn validate(&self) -> Result<(), InvalidQuestion> {
        let len = self.options.len();
        if len < MIN_OPTIONS {
            return Err(InvalidQuestion::TooFewOptions { count: len });
        }
        if self.answer_index >= len {
            return Err(InvalidQuestion::AnswerOutOfRange {
                index: self.answer_index,
                len,
            });
        }
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn answer_index(&self) -> usize {
        self.answer_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.answer_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_validates_answer_index() {
        assert!(Question::new("3시", options(&["세 시", "삼 시"]), 1).is_ok());
        assert_eq!(
            Question::new("3시", options(&["세 시", "삼 시"]), 2),
            Err(InvalidQuestion::AnswerOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            Question::new("3시", options(&["세 시"]), 0),
            Err(InvalidQuestion::TooFewOptions { count: 1 })
        );
    }

    #[test]
    fn test_deserialize_accepts_original_field_names() {
        let json = r#"{"question":"3시","options":["세 시","삼 시"],"answer":0}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.text(), "3시");
        assert_eq!(q.answer_index(), 0);
        assert_eq!(q.correct_option(), "세 시");

        let json = r#"{"text":"5개","options":["오 개","다섯 개"],"answerIndex":1}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.correct_option(), "다섯 개");
    }

    #[test]
    fn test_deserialize_rejects_invalid_records() {
        let json = r#"{"text":"x","options":["a","b"],"answer_index":5}"#;
        let err = serde_json::from_str::<Question>(json).unwrap_err();
        assert!(err.to_string().contains("answer index 5 is out of range"));

        let json = r#"{"text":"x","options":[],"answer_index":0}"#;
        let err = serde_json::from_str::<Question>(json).unwrap_err();
        assert!(err.to_string().contains("0 option(s)"));

        let raw: RawQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(
            Question::try_from(raw),
            Err(InvalidQuestion::TooFewOptions { count: 0 })
        );
    }
}
