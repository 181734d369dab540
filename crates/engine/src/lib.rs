#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod feedback;
pub mod session;

pub use quiz_core::Clock;

pub use bank::{BankSource, HttpBankSource, InMemoryBankSource};
pub use error::{LoadError, SessionError};
pub use feedback::{select_feedback, summarize};
pub use session::{
    AnswerOutcome, PresentedOptions, QuestionView, QuizFlow, QuizSession, SessionPlan,
    SessionProgress, SessionSampler,
};
