//! Error types.

use thiserror::Error;

/// Errors raised while setting up a form.
#[derive(Debug, Error)]
pub enum FormError {
    /// Debounced evaluation needs a tokio runtime to schedule timers on.
    #[error("no tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// Reasons a submission is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The aggregate validity flag is false, so the submit control is disabled.
    #[error("form is not valid, submit is disabled")]
    Disabled,
}

/// Persistence store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Wrap any backend-specific error.
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}
