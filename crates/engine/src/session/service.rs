use chrono::{DateTime, Utc};
use rand::Rng;

use quiz_core::model::{Evaluation, QuestionRecord, SessionSummary};

use super::plan::SessionPlan;
use super::present::{PresentedOptions, present};
use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state for one quiz run, from the first question to the summary.
///
/// Steps through the sampled questions sequentially. Each question receives
/// at most one evaluated submission; advancing is a separate, explicit action
/// that never happens implicitly on evaluation.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    current: usize,
    score: u32,
    answered: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session over a sampled plan.
    ///
    /// `started_at` should come from the caller's clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the plan holds no questions.
    pub fn new(plan: SessionPlan, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if plan.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions: plan.into_questions(),
            current: 0,
            score: 0,
            answered: false,
            started_at,
            completed_at: None,
        })
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// True when the current question already has an evaluated submission.
    #[must_use]
    pub fn answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Number of questions not yet advanced past.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current)
    }

    /// Freshly shuffled options for the current question, or `None` when the
    /// session is past its last question.
    #[must_use]
    pub fn present_current<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<PresentedOptions> {
        self.current_question().map(|q| present(q, rng))
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            position: self.current,
            score: self.score,
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// Evaluate a submitted option text against the current question.
    ///
    /// Correctness is exact string equality. A correct answer credits the
    /// score by exactly 1; either way the question is marked answered. The
    /// current position never moves here.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyAnswered` on a repeated submission for
    /// the same question (score and state untouched), and
    /// `SessionError::Completed` once the session is finished.
    pub fn evaluate(&mut self, submitted: &str) -> Result<Evaluation, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Completed);
        };
        if self.answered {
            return Err(SessionError::AlreadyAnswered);
        }

        let correct = submitted == question.answer();
        if correct {
            self.score += 1;
        }
        self.answered = true;

        Ok(Evaluation {
            correct,
            correct_answer: question.answer().to_owned(),
        })
    }

    /// Move past the current question, completing the session after the last.
    ///
    /// Whether the question was answered is the caller's contract to gate;
    /// it is not re-validated here. The answered flag resets for the next
    /// question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<SessionProgress, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        self.current += 1;
        self.answered = false;
        if self.current >= self.questions.len() {
            self.completed_at = Some(now);
        }

        Ok(self.progress())
    }

    /// Final aggregate for a completed session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` before the last advance.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let completed_at = self.completed_at.ok_or(SessionError::NotComplete)?;
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        Ok(SessionSummary::new(
            self.score,
            total,
            self.started_at,
            completed_at,
        )?)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionSampler;
    use quiz_core::model::{QuestionDraft, QuizSettings};
    use quiz_core::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build_question(i: usize) -> QuestionRecord {
        QuestionDraft::new(
            format!("Q{i}"),
            vec![format!("right {i}"), format!("wrong {i}")],
            format!("right {i}"),
        )
        .validate()
        .unwrap()
    }

    fn build_session(len: usize) -> QuizSession {
        let bank: Vec<QuestionRecord> = (0..len).map(build_question).collect();
        let mut rng = StdRng::seed_from_u64(11);
        let plan = SessionSampler::new(&QuizSettings::default()).sample(&bank, &mut rng);
        QuizSession::new(plan, fixed_now()).unwrap()
    }

    #[test]
    fn empty_plan_is_rejected() {
        let mut rng = StdRng::seed_from_u64(11);
        let plan = SessionSampler::new(&QuizSettings::default()).sample(&[], &mut rng);
        assert!(matches!(
            QuizSession::new(plan, fixed_now()),
            Err(SessionError::Empty)
        ));
    }

    #[test]
    fn correct_answer_credits_score_once() {
        let mut session = build_session(2);
        let answer = session.current_question().unwrap().answer().to_owned();

        let evaluation = session.evaluate(&answer).unwrap();
        assert!(evaluation.correct);
        assert_eq!(session.score(), 1);
        assert!(session.answered());

        // Second submission is a no-op on score and state.
        assert!(matches!(
            session.evaluate(&answer),
            Err(SessionError::AlreadyAnswered)
        ));
        assert_eq!(session.score(), 1);
        assert!(session.answered());
    }

    #[test]
    fn incorrect_answer_marks_answered_without_credit() {
        let mut session = build_session(1);
        let answer = session.current_question().unwrap().answer().to_owned();

        let evaluation = session.evaluate("definitely wrong").unwrap();
        assert!(!evaluation.correct);
        assert_eq!(evaluation.correct_answer, answer);
        assert_eq!(session.score(), 0);
        assert!(session.answered());
    }

    #[test]
    fn advance_resets_answered_and_completes_after_last() {
        let mut session = build_session(2);
        let now = fixed_now();

        let answer = session.current_question().unwrap().answer().to_owned();
        session.evaluate(&answer).unwrap();
        let progress = session.advance(now).unwrap();
        assert!(!progress.is_complete);
        assert!(!session.answered());
        assert_eq!(progress.position, 1);

        session.evaluate("wrong").unwrap();
        let progress = session.advance(now).unwrap();
        assert!(progress.is_complete);
        assert_eq!(session.completed_at(), Some(now));
        assert!(session.current_question().is_none());

        assert!(matches!(session.advance(now), Err(SessionError::Completed)));
        assert!(matches!(
            session.evaluate("anything"),
            Err(SessionError::Completed)
        ));
    }

    #[test]
    fn summary_requires_completion() {
        let mut session = build_session(1);
        assert!(matches!(session.summary(), Err(SessionError::NotComplete)));

        let answer = session.current_question().unwrap().answer().to_owned();
        session.evaluate(&answer).unwrap();
        session.advance(fixed_now()).unwrap();

        let summary = session.summary().unwrap();
        assert!(summary.is_perfect());
        assert_eq!(summary.total(), 1);
    }

    #[test]
    fn score_matches_count_of_correct_answers() {
        let mut session = build_session(5);
        let total = session.total();
        let now = fixed_now();

        for i in 0..total {
            let answer = session.current_question().unwrap().answer().to_owned();
            if i % 2 == 0 {
                session.evaluate(&answer).unwrap();
            } else {
                session.evaluate("wrong").unwrap();
            }
            session.advance(now).unwrap();
        }

        assert_eq!(session.score() as usize, total.div_ceil(2));
        assert!(!session.summary().unwrap().is_perfect());
    }

    #[test]
    fn presenting_current_question_shuffles_its_options() {
        let session = build_session(1);
        let question = session.current_question().unwrap().clone();
        let mut rng = StdRng::seed_from_u64(9);

        let presented = session.present_current(&mut rng).unwrap();
        assert_eq!(presented.len(), question.options().len());
        assert!(presented.iter().any(|o| o == question.answer()));
    }
}
