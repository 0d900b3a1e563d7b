//! Persistent list of remembered passwords.
//!
//! The store is a single JSON file holding an array of strings. Memorizing a
//! password is a convenience, so a missing or corrupt file reads as an empty
//! list and a failed write is logged and otherwise ignored.

use std::io::Write;
use std::path::{Path, PathBuf};

use pdfunlock_core::UnlockError;

/// File name of the store inside the user's home directory.
pub const STORE_FILE_NAME: &str = ".pdf_unlocker_passwords.json";

/// Handle to the on-disk password list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStore {
    path: PathBuf,
}

impl PasswordStore {
    /// Create a store backed by the file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default store location: [`STORE_FILE_NAME`] in the home directory.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn default_location() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(STORE_FILE_NAME))
    }

    /// Open the store at [`PasswordStore::default_location`].
    pub fn open_default() -> Option<Self> {
        Self::default_location().map(Self::new)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored passwords in order.
    ///
    /// Returns an empty list if the file is absent, unreadable, or does not
    /// contain a JSON array of strings.
    pub fn load(&self) -> Vec<String> {
        match self.try_load() {
            Ok(passwords) => {
                tracing::debug!(
                    path = %self.path.display(),
                    count = passwords.len(),
                    "loaded password store"
                );
                passwords
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "ignoring unreadable password store: {e}"
                );
                Vec::new()
            }
        }
    }

    /// Load the stored passwords, reporting why the file could not be read.
    ///
    /// A missing file is not an error and yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`UnlockError::IoError`] if the file exists but cannot be read,
    /// or [`UnlockError::ParseError`] if its content is not a JSON array of
    /// strings.
    pub fn try_load(&self) -> Result<Vec<String>, UnlockError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&text).map_err(|e| UnlockError::ParseError(e.to_string()))
    }

    /// Overwrite the store with `passwords`.
    ///
    /// Failures are logged and swallowed.
    pub fn save(&self, passwords: &[String]) {
        match self.try_save(passwords) {
            Ok(()) => tracing::debug!(
                path = %self.path.display(),
                count = passwords.len(),
                "saved password store"
            ),
            Err(e) => tracing::warn!(
                path = %self.path.display(),
                "could not save password store: {e}"
            ),
        }
    }

    /// Overwrite the store with `passwords`, creating the parent directory
    /// if needed. On Unix the file is created readable by the owner only.
    ///
    /// # Errors
    ///
    /// Returns [`UnlockError::IoError`] if the file cannot be written.
    pub fn try_save(&self, passwords: &[String]) -> Result<(), UnlockError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(passwords)
            .map_err(|e| UnlockError::Other(format!("failed to encode password store: {e}")))?;

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
