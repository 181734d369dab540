//! Feedback and summary message selection.
//!
//! Pools are fixed; every pick is an independent uniform draw with
//! replacement, so messages may repeat across calls. The summary is a pure
//! function of final state.

use rand::Rng;
use rand::seq::IndexedRandom;

use quiz_core::model::{Evaluation, FeedbackMessage, SessionSummary, Tone};

/// Affirmations for a correct answer.
const CORRECT_POOL: &[&str] = &[
    "Nice one!",
    "Correct!",
    "You got it!",
    "Sharp thinking!",
    "That's the one.",
];

/// Openers for an incorrect answer; the correct answer text is appended.
const INCORRECT_POOL: &[&str] = &[
    "Not quite.",
    "Close, but no.",
    "That's not it.",
    "Wrong this time.",
];

/// Uniform draw from a message pool.
fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    // Pools are compile-time constants and never empty.
    pool.choose(rng).copied().unwrap_or_default()
}

/// Select a display message for an evaluation outcome.
///
/// Incorrect answers always state the correct answer verbatim:
/// `"<opener> The correct answer was: <answer>."`.
pub fn select_feedback<R: Rng + ?Sized>(evaluation: &Evaluation, rng: &mut R) -> FeedbackMessage {
    if evaluation.correct {
        FeedbackMessage::new(pick(CORRECT_POOL, rng), Tone::Correct)
    } else {
        let opener = pick(INCORRECT_POOL, rng);
        FeedbackMessage::new(
            format!(
                "{opener} The correct answer was: {}.",
                evaluation.correct_answer
            ),
            Tone::Incorrect,
        )
    }
}

/// Render the closing message for a completed session.
pub fn summarize(summary: &SessionSummary) -> FeedbackMessage {
    let text = if summary.is_perfect() {
        "Perfect score! You aced every question.".to_owned()
    } else {
        format!("You scored {} out of {}.", summary.score(), summary.total())
    };
    FeedbackMessage::new(text, Tone::Summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn evaluation(correct: bool) -> Evaluation {
        Evaluation {
            correct,
            correct_answer: "sturgeon".to_owned(),
        }
    }

    #[test]
    fn correct_feedback_comes_from_the_affirmation_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let msg = select_feedback(&evaluation(true), &mut rng);
            assert_eq!(msg.tone(), Tone::Correct);
            assert!(CORRECT_POOL.contains(&msg.text()));
        }
    }

    #[test]
    fn incorrect_feedback_states_the_correct_answer() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            let msg = select_feedback(&evaluation(false), &mut rng);
            assert_eq!(msg.tone(), Tone::Incorrect);
            assert!(msg.text().ends_with("The correct answer was: sturgeon."));
            let opener = msg
                .text()
                .strip_suffix(" The correct answer was: sturgeon.")
                .unwrap();
            assert!(INCORRECT_POOL.contains(&opener));
        }
    }

    #[test]
    fn perfect_summary_uses_the_fixed_message() {
        let now = fixed_now();
        let summary = SessionSummary::new(3, 3, now, now).unwrap();
        let msg = summarize(&summary);
        assert_eq!(msg.tone(), Tone::Summary);
        assert_eq!(msg.text(), "Perfect score! You aced every question.");
    }

    #[test]
    fn imperfect_summary_interpolates_the_counts() {
        let now = fixed_now();
        let summary = SessionSummary::new(2, 3, now, now).unwrap();
        assert_eq!(summarize(&summary).text(), "You scored 2 out of 3.");
    }
}
