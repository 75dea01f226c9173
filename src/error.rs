//! Error Taxonomy
//!
//! Every failure the service can report. Exhaustion of a quiz round is not in
//! here: it is a successful outcome with no question attached.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriviaError {
    /// A required field is absent or malformed. The caller has to fix the input.
    #[error("{0}")]
    Validation(String),

    /// The requested record or page does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The route exists but does not accept the request method.
    #[error("{0}")]
    MethodNotAllowed(String),

    /// The input was well formed but the store refused it.
    #[error("{0}")]
    Unprocessable(String),

    /// The store itself failed.
    #[error("store unavailable: {0}")]
    Store(#[from] anyhow::Error),
}

impl TriviaError {
    pub fn validation(msg: impl Into<String>) -> Self {
        TriviaError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        TriviaError::NotFound(msg.into())
    }

    pub fn method_not_allowed(msg: impl Into<String>) -> Self {
        TriviaError::MethodNotAllowed(msg.into())
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        TriviaError::Unprocessable(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, TriviaError>;
