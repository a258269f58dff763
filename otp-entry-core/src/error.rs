//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum OtpError {
    /// Submit attempted before every cell was filled
    #[error("Incomplete code: {filled} of {required} digits entered")]
    IncompleteCode { filled: usize, required: usize },

    /// The submission collaborator failed to deliver the code
    #[error("Transport error: {0}")]
    Transport(String),

    /// Session-scoped store rejected the write
    #[error("Session store error: {0}")]
    SessionStore(String),

    /// A submission is already in flight
    #[error("Submission already in progress")]
    SubmissionPending,
}

impl OtpError {
    /// Whether it is expected behavior (user input not finished, etc.) used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::IncompleteCode { .. } | Self::SubmissionPending => true,
            Self::Transport(_) | Self::SessionStore(_) => false,
        }
    }

    /// Log level matching [`OtpError::is_expected`]
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        if self.is_expected() {
            log::Level::Warn
        } else {
            log::Level::Error
        }
    }

    /// Whether resubmitting the same code may succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, OtpError>;
