use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("session size must be > 0")]
    InvalidSessionSize,
}

/// How many questions a session draws from the bank.
pub const DEFAULT_SESSION_SIZE: u32 = 10;

/// Configuration for a quiz session.
///
/// A bank smaller than `session_size` simply yields a shorter session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    session_size: u32,
}

impl QuizSettings {
    /// Create settings with an explicit session size.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidSessionSize` when `session_size` is 0.
    pub fn new(session_size: u32) -> Result<Self, SettingsError> {
        if session_size == 0 {
            return Err(SettingsError::InvalidSessionSize);
        }
        Ok(Self { session_size })
    }

    #[must_use]
    pub fn session_size(&self) -> u32 {
        self.session_size
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            session_size: DEFAULT_SESSION_SIZE,
        }
    }
}
