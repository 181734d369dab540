mod plan;
mod present;
mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::{SessionPlan, SessionSampler};
pub use present::{PresentedOptions, present};
pub use progress::SessionProgress;
pub use service::QuizSession;
pub use workflow::{AnswerOutcome, QuestionView, QuizFlow};
