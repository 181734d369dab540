//! Shared error types for the engine crate.

use thiserror::Error;

use quiz_core::model::QuestionError;

/// Errors surfaced while fetching and validating the question bank.
///
/// All variants are fatal to that session-start attempt; the caller must not
/// proceed to sampling, and no retry happens automatically.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("bank request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed bank payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("question bank is empty")]
    EmptyBank,
    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted by the session engine.
///
/// An incorrect answer is never an error; it is a valid evaluated outcome.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
    #[error("current question already answered")]
    AlreadyAnswered,
    #[error("session not yet completed")]
    NotComplete,
    #[error(transparent)]
    Summary(#[from] quiz_core::model::SessionSummaryError),
    #[error(transparent)]
    Load(#[from] LoadError),
}
