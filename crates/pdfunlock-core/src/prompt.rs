//! Request and reply types for the interactive password prompt.
//!
//! The resolver never talks to a terminal or a dialog directly. When it runs
//! out of stored candidates it yields a [`PasswordRequest`], and the
//! presentation layer answers with a [`PromptReply`].

use std::path::{Path, PathBuf};

/// A request for the user to supply a password for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRequest {
    path: PathBuf,
    attempt: usize,
}

impl PasswordRequest {
    /// Create a request for `path`. `attempt` is 1-based.
    pub fn new(path: impl Into<PathBuf>, attempt: usize) -> Self {
        Self {
            path: path.into(),
            attempt,
        }
    }

    /// The file that needs a password.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// How many times the user has been asked for this file, including this one.
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    /// Returns `true` if a previous answer for this file was rejected.
    pub fn is_retry(&self) -> bool {
        self.attempt > 1
    }
}

/// A password typed or picked by the user.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordEntry {
    /// The password text.
    pub password: String,
    /// Persist the password for future sessions if it works.
    pub memorize: bool,
}

impl PasswordEntry {
    /// Create an entry.
    pub fn new(password: impl Into<String>, memorize: bool) -> Self {
        Self {
            password: password.into(),
            memorize,
        }
    }
}

// Never print the password itself.
impl std::fmt::Debug for PasswordEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordEntry")
            .field("password", &crate::abbreviate(&self.password))
            .field("memorize", &self.memorize)
            .finish()
    }
}

/// The user's answer to a [`PasswordRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    /// Try this password.
    Submit(PasswordEntry),
    /// Remove a stored password from the candidate list and the store,
    /// then ask again.
    Forget(String),
    /// Give up on this file.
    Cancel,
}
