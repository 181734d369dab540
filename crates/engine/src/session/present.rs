use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::QuestionRecord;

/// Shuffled option texts for one question display.
///
/// Ephemeral: regenerated every time a question is shown, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedOptions(Vec<String>);

impl PresentedOptions {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a PresentedOptions {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Produce a fresh unbiased permutation of the question's options.
///
/// Only order changes: every option text, including the correct answer's, is
/// carried over verbatim.
pub fn present<R: Rng + ?Sized>(question: &QuestionRecord, rng: &mut R) -> PresentedOptions {
    let mut options = question.options().to_vec();
    options.shuffle(rng);
    PresentedOptions(options)
}
