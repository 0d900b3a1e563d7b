//! Per-file outcome of an unlock attempt.

use std::fmt;

/// How a single file ended up after a batch run.
///
/// Files that fail with a non-password error have no `FileOutcome`; they are
/// reported separately (see [`SessionReport::record_failure`]).
///
/// [`SessionReport::record_failure`]: crate::SessionReport::record_failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FileOutcome {
    /// The file was encrypted and has been rewritten without encryption.
    Unlocked,
    /// No password worked, or the user gave up.
    WrongPassword,
    /// The file opened without a password; it was left untouched.
    NoPasswordNeeded,
}

impl FileOutcome {
    /// Returns the string tag for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileOutcome::Unlocked => "unlocked",
            FileOutcome::WrongPassword => "wrong_password",
            FileOutcome::NoPasswordNeeded => "no_password_needed",
        }
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
