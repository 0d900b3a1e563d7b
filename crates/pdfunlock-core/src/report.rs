//! Batch summary of per-file outcomes.
//!
//! [`SessionReport`] collects the outcome of every file in a batch and renders
//! them as one consolidated summary at the end, instead of interrupting the
//! user once per file.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::{FileOutcome, UnlockError};

/// A file that could not be processed because of a non-password error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FailedFile {
    /// The file path.
    pub path: PathBuf,
    /// Human-readable description of the error.
    pub error: String,
}

/// Outcomes accumulated over one batch run.
///
/// The lists are disjoint: each file is recorded exactly once, in the order
/// it was processed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionReport {
    /// Files that were decrypted and rewritten in place.
    pub unlocked: Vec<PathBuf>,
    /// Files for which no working password was found.
    pub wrong_password: Vec<PathBuf>,
    /// Files that were not encrypted (or opened with an empty password).
    pub no_password_needed: Vec<PathBuf>,
    /// Files that failed with an error other than a wrong password.
    pub failed: Vec<FailedFile>,
}

impl SessionReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `path`.
    pub fn record(&mut self, path: impl Into<PathBuf>, outcome: FileOutcome) {
        let path = path.into();
        match outcome {
            FileOutcome::Unlocked => self.unlocked.push(path),
            FileOutcome::WrongPassword => self.wrong_password.push(path),
            FileOutcome::NoPasswordNeeded => self.no_password_needed.push(path),
        }
    }

    /// Record a file that failed with a non-password error.
    pub fn record_failure(&mut self, path: impl Into<PathBuf>, error: &UnlockError) {
        self.failed.push(FailedFile {
            path: path.into(),
            error: error.to_string(),
        });
    }

    /// The files recorded with `outcome`.
    pub fn files(&self, outcome: FileOutcome) -> &[PathBuf] {
        match outcome {
            FileOutcome::Unlocked => &self.unlocked,
            FileOutcome::WrongPassword => &self.wrong_password,
            FileOutcome::NoPasswordNeeded => &self.no_password_needed,
        }
    }

    /// The outcome recorded for `path`, if any.
    pub fn outcome_of(&self, path: &Path) -> Option<FileOutcome> {
        [
            FileOutcome::Unlocked,
            FileOutcome::WrongPassword,
            FileOutcome::NoPasswordNeeded,
        ]
        .into_iter()
        .find(|&outcome| self.files(outcome).iter().any(|p| p == path))
    }

    /// Total number of files recorded.
    pub fn total(&self) -> usize {
        self.unlocked.len()
            + self.wrong_password.len()
            + self.no_password_needed.len()
            + self.failed.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Returns `true` if any file failed with a non-password error.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Returns `true` if every file was unlocked or needed no password.
    pub fn all_succeeded(&self) -> bool {
        self.wrong_password.is_empty() && self.failed.is_empty()
    }

    /// Render the summary as plain text.
    ///
    /// Sections with no files are omitted. Returns an empty string for an
    /// empty report.
    pub fn render(&self) -> String {
        let mut sections: Vec<String> = Vec::new();
        let lists = [
            ("Unlocked files:", &self.unlocked),
            ("Wrong password for:", &self.wrong_password),
            ("No password needed for:", &self.no_password_needed),
        ];
        for (title, paths) in lists {
            if paths.is_empty() {
                continue;
            }
            let mut section = title.to_string();
            for path in paths {
                section.push('\n');
                section.push_str(&path.display().to_string());
            }
            sections.push(section);
        }
        if !self.failed.is_empty() {
            let mut section = "Errors:".to_string();
            for failed in &self.failed {
                section.push_str(&format!("\n{}: {}", failed.path.display(), failed.error));
            }
            sections.push(section);
        }
        sections.join("\n\n")
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
