//! Error types for pdfunlock.
//!
//! Provides [`UnlockError`], the error returned when a PDF cannot be opened,
//! decrypted, or written back. Password failures are expected during the
//! trial and prompt phases; every other variant is fatal for the file being
//! processed.

use std::fmt;

/// Error types for opening, decrypting, and saving a PDF.
#[derive(Debug, Clone, PartialEq)]
pub enum UnlockError {
    /// Error parsing PDF structure or syntax.
    ParseError(String),
    /// I/O error reading or writing PDF data.
    IoError(String),
    /// The PDF is encrypted and requires a password to open.
    PasswordRequired,
    /// The supplied password is incorrect for this encrypted PDF.
    InvalidPassword,
    /// Any other error not covered by specific variants.
    Other(String),
}

impl UnlockError {
    /// Returns `true` for failures caused by a missing or wrong password.
    ///
    /// These drive the trial and prompt loops. Any other error stops
    /// processing of the current file.
    pub fn is_password_error(&self) -> bool {
        matches!(
            self,
            UnlockError::PasswordRequired | UnlockError::InvalidPassword
        )
    }
}

impl fmt::Display for UnlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnlockError::ParseError(msg) => write!(f, "parse error: {msg}"),
            UnlockError::IoError(msg) => write!(f, "I/O error: {msg}"),
            UnlockError::PasswordRequired => write!(f, "PDF is encrypted and requires a password"),
            UnlockError::InvalidPassword => write!(f, "the supplied password is incorrect"),
            UnlockError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for UnlockError {}

impl From<std::io::Error> for UnlockError {
    fn from(err: std::io::Error) -> Self {
        UnlockError::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse_error() {
        let err = UnlockError::ParseError("bad xref".to_string());
        assert_eq!(err.to_string(), "parse error: bad xref");
    }

    #[test]
    fn display_io_error() {
        let err = UnlockError::IoError("disk full".to_string());
        assert_eq!(err.to_string(), "I/O error: disk full");
    }

    #[test]
    fn display_password_errors() {
        assert_eq!(
            UnlockError::PasswordRequired.to_string(),
            "PDF is encrypted and requires a password"
        );
        assert_eq!(
            UnlockError::InvalidPassword.to_string(),
            "the supplied password is incorrect"
        );
    }

    #[test]
    fn display_other_is_bare_message() {
        let err = UnlockError::Other("something odd".to_string());
        assert_eq!(err.to_string(), "something odd");
    }

    #[test]
    fn password_errors_are_classified() {
        assert!(UnlockError::PasswordRequired.is_password_error());
        assert!(UnlockError::InvalidPassword.is_password_error());
        assert!(!UnlockError::ParseError("x".into()).is_password_error());
        assert!(!UnlockError::IoError("x".into()).is_password_error());
        assert!(!UnlockError::Other("x".into()).is_password_error());
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: UnlockError = io_err.into();
        assert!(matches!(err, UnlockError::IoError(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(UnlockError::InvalidPassword);
        assert!(err.to_string().contains("incorrect"));
    }
}
