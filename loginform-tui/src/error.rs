use std::io;

use loginform::{FormError, StoreError};
use thiserror::Error;

/// Front end error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("session store error: {0}")]
    Store(#[from] StoreError),
    #[error("form error: {0}")]
    Form(#[from] FormError),
}
