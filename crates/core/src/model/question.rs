use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lookup::{EntityKind, Identified};
use crate::model::ids::{ExamId, QuestionId, TopicId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("question needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("correct index {index} is out of range for {options} options")]
    CorrectIndexOutOfRange { index: usize, options: usize },
}

/// Multiple-choice question.
///
/// `correct_index` is always a valid index into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: String,
    source: String,
}

/// Unvalidated wire shape of a question.
#[derive(Debug, Clone, Deserialize)]
struct QuestionRecord {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    #[serde(alias = "correctIndex")]
    correct_index: usize,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    source: String,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(
            record.id,
            record.text,
            record.options,
            record.correct_index,
            record.explanation,
            record.source,
        )
    }
}

impl Question {
    /// Builds a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text is blank, fewer than two options are
    /// given, or `correct_index` does not point at an option.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        explanation: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions(options.len()));
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                options: options.len(),
            });
        }

        Ok(Self {
            id,
            text,
            options,
            correct_index,
            explanation: explanation.into(),
            source: source.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

impl Identified for Question {
    type Id = QuestionId;
    const KIND: EntityKind = EntityKind::Question;

    fn id(&self) -> QuestionId {
        self.id
    }
}

/// What a question set is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum QuestionOwner {
    Topic(TopicId),
    Exam(ExamId),
}

/// Ordered question ids bound to a topic quiz or an exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub owner: QuestionOwner,
    pub questions: Vec<QuestionId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    #[test]
    fn new_accepts_valid_question() {
        let q = Question::new(QuestionId::new(1), "Q?", options(4), 3, "because", "ref").unwrap();
        assert_eq!(q.correct_index(), 3);
        assert!(q.is_correct(3));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn new_rejects_out_of_range_correct_index() {
        let err = Question::new(QuestionId::new(1), "Q?", options(4), 4, "", "").unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectIndexOutOfRange {
                index: 4,
                options: 4
            }
        );
    }

    #[test]
    fn new_rejects_degenerate_questions() {
        assert_eq!(
            Question::new(QuestionId::new(1), "  ", options(2), 0, "", ""),
            Err(QuestionError::EmptyText)
        );
        assert_eq!(
            Question::new(QuestionId::new(1), "Q?", options(1), 0, "", ""),
            Err(QuestionError::TooFewOptions(1))
        );
    }

    #[test]
    fn deserialize_accepts_camel_case_index_and_validates() {
        let q: Question = serde_json::from_str(
            r#"{"id":101,"text":"Q?","options":["a","b"],"correctIndex":1,"explanation":"e","source":"s"}"#,
        )
        .unwrap();
        assert_eq!(q.correct_index(), 1);

        let bad = serde_json::from_str::<Question>(
            r#"{"id":102,"text":"Q?","options":["a","b"],"correct_index":5}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn owner_serializes_tagged() {
        let json = serde_json::to_string(&QuestionOwner::Exam(ExamId::new(1))).unwrap();
        assert_eq!(json, r#"{"kind":"exam","id":1}"#);
    }
}
