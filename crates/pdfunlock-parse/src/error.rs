//! Error types for the backend layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides [`BackendError`]
//! that wraps backend-specific errors and converts them to [`UnlockError`].

use pdfunlock_core::UnlockError;
use thiserror::Error;

/// Error type for PDF backend operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from PDF parsing (structure, syntax, object resolution).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading or writing PDF data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing the decrypted document.
    #[error("failed to write PDF: {0}")]
    Write(String),

    /// A core library error.
    #[error(transparent)]
    Core(#[from] UnlockError),
}

impl BackendError {
    /// Returns `true` if this error means "wrong or missing password".
    pub fn is_password_error(&self) -> bool {
        matches!(self, BackendError::Core(e) if e.is_password_error())
    }
}

impl From<BackendError> for UnlockError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Parse(msg) => UnlockError::ParseError(msg),
            BackendError::Io(e) => UnlockError::IoError(e.to_string()),
            BackendError::Write(msg) => UnlockError::IoError(msg),
            BackendError::Core(e) => e,
        }
    }
}
