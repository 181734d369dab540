use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{QuestionRecord, QuizSettings};

/// The questions drawn for one session, in presentation order.
///
/// Built once per session and immutable for its lifetime; a restart draws a
/// new plan instead of reusing this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlan {
    questions: Vec<QuestionRecord>,
    bank_size: usize,
}

impl SessionPlan {
    /// Number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when the plan holds no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Size of the bank the plan was drawn from.
    #[must_use]
    pub fn bank_size(&self) -> usize {
        self.bank_size
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub(crate) fn into_questions(self) -> Vec<QuestionRecord> {
        self.questions
    }
}

/// Draws a session subset from the bank, without replacement.
pub struct SessionSampler {
    session_size: usize,
}

impl SessionSampler {
    #[must_use]
    pub fn new(settings: &QuizSettings) -> Self {
        Self {
            session_size: usize::try_from(settings.session_size()).unwrap_or(usize::MAX),
        }
    }

    /// Sample up to `session_size` questions from `bank`.
    ///
    /// The whole bank is permuted with an unbiased Fisher-Yates shuffle and
    /// the prefix is taken, so every record appears at most once and the
    /// shuffled order becomes the presentation order. A bank smaller than the
    /// session size yields a shorter plan, not an error.
    pub fn sample<R: Rng + ?Sized>(&self, bank: &[QuestionRecord], rng: &mut R) -> SessionPlan {
        let mut drawn = bank.to_vec();
        drawn.shuffle(rng);
        drawn.truncate(self.session_size);

        SessionPlan {
            questions: drawn,
            bank_size: bank.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionDraft;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn build_question(i: usize) -> QuestionRecord {
        QuestionDraft::new(
            format!("Q{i}"),
            vec![format!("right {i}"), format!("wrong {i}")],
            format!("right {i}"),
        )
        .validate()
        .unwrap()
    }

    fn build_bank(len: usize) -> Vec<QuestionRecord> {
        (0..len).map(build_question).collect()
    }

    fn sampler(size: u32) -> SessionSampler {
        SessionSampler::new(&QuizSettings::new(size).unwrap())
    }

    #[test]
    fn large_bank_yields_exactly_session_size_distinct_questions() {
        let bank = build_bank(50);
        let mut rng = StdRng::seed_from_u64(7);
        let plan = sampler(10).sample(&bank, &mut rng);

        assert_eq!(plan.total(), 10);
        let prompts: HashSet<&str> = plan.questions().iter().map(|q| q.question()).collect();
        assert_eq!(prompts.len(), 10);
        for q in plan.questions() {
            assert!(bank.contains(q));
        }
    }

    #[test]
    fn short_bank_yields_the_whole_bank() {
        let bank = build_bank(3);
        let mut rng = StdRng::seed_from_u64(7);
        let plan = sampler(10).sample(&bank, &mut rng);

        assert_eq!(plan.total(), 3);
        assert_eq!(plan.bank_size(), 3);
        let prompts: HashSet<&str> = plan.questions().iter().map(|q| q.question()).collect();
        assert_eq!(prompts.len(), 3);
    }

    #[test]
    fn empty_bank_yields_an_empty_plan() {
        let mut rng = StdRng::seed_from_u64(7);
        let plan = sampler(10).sample(&[], &mut rng);
        assert!(plan.is_empty());
    }

    #[test]
    fn independent_draws_differ_in_order() {
        let bank = build_bank(30);
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);
        let plan_a = sampler(10).sample(&bank, &mut rng_a);
        let plan_b = sampler(10).sample(&bank, &mut rng_b);
        // Not guaranteed in general, but deterministic for these seeds.
        assert_ne!(plan_a.questions(), plan_b.questions());
    }
}
