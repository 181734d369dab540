use std::sync::Arc;

use tracing::{debug, info};

use quiz_core::Clock;
use quiz_core::model::{Evaluation, FeedbackMessage, QuizSettings};

use super::plan::SessionSampler;
use super::present::PresentedOptions;
use super::progress::SessionProgress;
use super::service::QuizSession;
use crate::bank::BankSource;
use crate::error::SessionError;
use crate::feedback::{select_feedback, summarize};

/// One question ready for display: prompt, shuffled options, and the
/// `(score, total)` counts the rendering layer shows alongside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub prompt: String,
    pub options: PresentedOptions,
    pub progress: SessionProgress,
}

/// Result of submitting an answer through the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Evaluated {
        evaluation: Evaluation,
        feedback: FeedbackMessage,
        progress: SessionProgress,
    },
    /// The current question already has an evaluated submission; nothing
    /// changed. Absorbed as a no-op rather than surfaced as a failure.
    AlreadyAnswered,
}

/// Orchestrates one quiz run: load, sample, step through questions, summarize.
///
/// The bank fetch in [`QuizFlow::start`] is the only suspension point; every
/// other operation is synchronous. The flow never holds a session itself --
/// sessions are values owned by the caller, so a restart simply replaces the
/// old one wholesale.
#[derive(Clone)]
pub struct QuizFlow {
    clock: Clock,
    source: Arc<dyn BankSource>,
    settings: QuizSettings,
}

impl QuizFlow {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn BankSource>) -> Self {
        Self {
            clock,
            source,
            settings: QuizSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Start a new session: fetch the bank and draw a fresh random subset.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` when the bank is unreachable, malformed,
    /// or empty. The attempt is not retried; a fresh start is required.
    pub async fn start(&self) -> Result<QuizSession, SessionError> {
        let bank = self.source.load().await?;
        let mut rng = rand::rng();
        let plan = SessionSampler::new(&self.settings).sample(&bank, &mut rng);

        info!(
            bank = plan.bank_size(),
            session = plan.total(),
            "quiz session started"
        );
        QuizSession::new(plan, self.clock.now())
    }

    /// Discard any previous session and start over with an independent draw.
    ///
    /// # Errors
    ///
    /// Same as [`QuizFlow::start`].
    pub async fn restart(&self) -> Result<QuizSession, SessionError> {
        debug!("restarting quiz session");
        self.start().await
    }

    /// The current question with freshly shuffled options, or `None` once the
    /// session is past its last question.
    #[must_use]
    pub fn present(&self, session: &QuizSession) -> Option<QuestionView> {
        let prompt = session.current_question()?.question().to_owned();
        let mut rng = rand::rng();
        let options = session.present_current(&mut rng)?;

        Some(QuestionView {
            prompt,
            options,
            progress: session.progress(),
        })
    }

    /// Evaluate a submitted option text and pick feedback for the outcome.
    ///
    /// A repeated submission for the already-answered current question is
    /// reported as [`AnswerOutcome::AlreadyAnswered`] without touching state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when no question is live anymore.
    pub fn submit(
        &self,
        session: &mut QuizSession,
        submitted: &str,
    ) -> Result<AnswerOutcome, SessionError> {
        match session.evaluate(submitted) {
            Ok(evaluation) => {
                let mut rng = rand::rng();
                let feedback = select_feedback(&evaluation, &mut rng);
                Ok(AnswerOutcome::Evaluated {
                    evaluation,
                    feedback,
                    progress: session.progress(),
                })
            }
            Err(SessionError::AlreadyAnswered) => Ok(AnswerOutcome::AlreadyAnswered),
            Err(err) => Err(err),
        }
    }

    /// Move to the next question, completing the session after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn advance(&self, session: &mut QuizSession) -> Result<SessionProgress, SessionError> {
        let progress = session.advance(self.clock.now())?;
        if progress.is_complete {
            info!(
                score = progress.score,
                total = progress.total,
                "quiz session complete"
            );
        }
        Ok(progress)
    }

    /// The closing message once every question has been advanced past.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` before then.
    pub fn summarize(&self, session: &QuizSession) -> Result<FeedbackMessage, SessionError> {
        Ok(summarize(&session.summary()?))
    }
}
