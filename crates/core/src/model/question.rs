use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("declared answer does not appear among the options")]
    AnswerMissing,

    #[error("declared answer appears more than once among the options")]
    AnswerAmbiguous,
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Wire shape of one bank entry, exactly as the external resource encodes it.
///
/// A draft carries no guarantees; it must pass [`QuestionDraft::validate`]
/// before it can enter a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            answer: answer.into(),
        }
    }

    /// Validate the draft into an immutable [`QuestionRecord`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` for a blank prompt,
    /// `QuestionError::TooFewOptions` for fewer than two options, and
    /// `QuestionError::AnswerMissing` / `QuestionError::AnswerAmbiguous` when
    /// the declared answer does not match exactly one option.
    pub fn validate(self) -> Result<QuestionRecord, QuestionError> {
        if self.question.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                len: self.options.len(),
            });
        }
        match self.options.iter().filter(|o| **o == self.answer).count() {
            0 => return Err(QuestionError::AnswerMissing),
            1 => {}
            _ => return Err(QuestionError::AnswerAmbiguous),
        }

        Ok(QuestionRecord {
            question: self.question,
            options: self.options,
            answer: self.answer,
        })
    }
}

//
// ─── RECORD ────────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
///
/// Immutable once built: the answer text is string-equal to exactly one of
/// the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    question: String,
    options: Vec<String>,
    answer: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Option texts in bank order. Display order is decided per presentation.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
