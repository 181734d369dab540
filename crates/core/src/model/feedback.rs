/// How a feedback message should be read by the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Correct,
    Incorrect,
    Summary,
}

/// A display-ready message produced after an evaluation or at session end.
///
/// Ephemeral: consumed immediately by the rendering layer, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    text: String,
    tone: Tone,
}

impl FeedbackMessage {
    #[must_use]
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        self.tone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_keeps_text_and_tone() {
        let msg = FeedbackMessage::new("Nice one!", Tone::Correct);
        assert_eq!(msg.text(), "Nice one!");
        assert_eq!(msg.tone(), Tone::Correct);
    }
}
