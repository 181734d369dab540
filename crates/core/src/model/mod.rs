mod feedback;
mod question;
mod session;
mod settings;

pub use feedback::{FeedbackMessage, Tone};
pub use question::{QuestionDraft, QuestionError, QuestionRecord};
pub use session::{Evaluation, SessionSummary, SessionSummaryError};
pub use settings::{QuizSettings, SettingsError};
