//! Per-file password resolution.
//!
//! A [`Resolver`] takes one file through three phases:
//!
//! 1. **Probe**: open without a password. Success means the file needs no
//!    password and is left untouched.
//! 2. **Trial**: try each stored candidate in order with a single open+save.
//!    The first candidate that works wins.
//! 3. **Prompt**: ask the user. The resolver does not know how the user is
//!    asked; it suspends with [`Step::NeedPassword`] and resumes when the
//!    caller hands back a password or a cancellation. A wrong answer suspends
//!    again with [`Step::ConfirmRetry`].
//!
//! Each suspension is a value that is consumed when resumed, so a step can
//! only be answered once.
//!
//! A successful unlock rewrites the file in place with its decrypted bytes.

use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use pdfunlock_core::{FileOutcome, PasswordEntry, PasswordRequest, UnlockError, abbreviate};
use pdfunlock_parse::{LopdfBackend, PdfBackend};

/// Which password unlocked a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordSource {
    /// The candidate at this 0-based index in the trial list.
    Candidate(usize),
    /// A password supplied through the prompt.
    Prompt(PasswordEntry),
}

/// Terminal state of a [`Resolver`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The file was decrypted and overwritten.
    Unlocked(PasswordSource),
    /// No password worked and the user gave up.
    WrongPassword,
    /// The file opened without a password.
    NoPasswordNeeded,
    /// A non-password error stopped processing of this file.
    Failed(UnlockError),
}

impl Resolution {
    /// The report outcome, or `None` for [`Resolution::Failed`].
    pub fn outcome(&self) -> Option<FileOutcome> {
        match self {
            Resolution::Unlocked(_) => Some(FileOutcome::Unlocked),
            Resolution::WrongPassword => Some(FileOutcome::WrongPassword),
            Resolution::NoPasswordNeeded => Some(FileOutcome::NoPasswordNeeded),
            Resolution::Failed(_) => None,
        }
    }
}

/// The next thing a caller has to do for a file.
pub enum Step<B: PdfBackend = LopdfBackend> {
    /// Resolution finished.
    Done(Resolution),
    /// Ask the user for a password and pass the answer to the pending step.
    NeedPassword(PendingPassword<B>),
    /// The last password was wrong; ask whether to try again.
    ConfirmRetry(PendingRetry<B>),
}

impl<B: PdfBackend> Step<B> {
    /// The resolution, if this step is [`Step::Done`].
    pub fn into_resolution(self) -> Option<Resolution> {
        match self {
            Step::Done(resolution) => Some(resolution),
            _ => None,
        }
    }
}

impl<B: PdfBackend> fmt::Debug for Step<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Done(resolution) => f.debug_tuple("Done").field(resolution).finish(),
            Step::NeedPassword(pending) => f.debug_tuple("NeedPassword").field(pending).finish(),
            Step::ConfirmRetry(pending) => f.debug_tuple("ConfirmRetry").field(pending).finish(),
        }
    }
}

/// What the resolver keeps about a file between suspensions.
struct FileContext<B> {
    path: PathBuf,
    bytes: Vec<u8>,
    _backend: PhantomData<fn() -> B>,
}

impl<B: PdfBackend> FileContext<B> {
    /// Decrypt with `password` and overwrite the file.
    fn unlock(&self, password: &str) -> Result<(), UnlockError> {
        let doc = B::open_with_password(&self.bytes, password).map_err(Into::into)?;
        let plain = B::save(doc).map_err(Into::into)?;
        std::fs::write(&self.path, plain)?;
        Ok(())
    }
}

/// Suspension point: the resolver needs a password from the user.
pub struct PendingPassword<B: PdfBackend = LopdfBackend> {
    ctx: FileContext<B>,
    request: PasswordRequest,
}

impl<B: PdfBackend> PendingPassword<B> {
    /// What to ask the user.
    pub fn request(&self) -> &PasswordRequest {
        &self.request
    }

    /// The file being resolved.
    pub fn path(&self) -> &Path {
        &self.ctx.path
    }

    /// Try `entry` against the file.
    ///
    /// A correct password unlocks the file. A wrong one yields
    /// [`Step::ConfirmRetry`]. Any other error ends with
    /// [`Resolution::Failed`].
    pub fn submit(self, entry: PasswordEntry) -> Step<B> {
        match self.ctx.unlock(&entry.password) {
            Ok(()) => {
                tracing::info!(
                    path = %self.ctx.path.display(),
                    password = %abbreviate(&entry.password),
                    "unlocked with prompted password"
                );
                Step::Done(Resolution::Unlocked(PasswordSource::Prompt(entry)))
            }
            Err(e) if e.is_password_error() => {
                tracing::debug!(
                    path = %self.ctx.path.display(),
                    attempt = self.request.attempt(),
                    "prompted password rejected"
                );
                Step::ConfirmRetry(PendingRetry {
                    ctx: self.ctx,
                    attempt: self.request.attempt(),
                })
            }
            Err(e) => fail(&self.ctx.path, e),
        }
    }

    /// The user dismissed the prompt.
    pub fn cancel(self) -> Step<B> {
        tracing::debug!(path = %self.ctx.path.display(), "password prompt cancelled");
        Step::Done(Resolution::WrongPassword)
    }
}

impl<B: PdfBackend> fmt::Debug for PendingPassword<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingPassword")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

/// Suspension point: a prompted password was wrong.
pub struct PendingRetry<B: PdfBackend = LopdfBackend> {
    ctx: FileContext<B>,
    attempt: usize,
}

impl<B: PdfBackend> PendingRetry<B> {
    /// The file being resolved.
    pub fn path(&self) -> &Path {
        &self.ctx.path
    }

    /// Number of prompted passwords rejected so far.
    pub fn attempts(&self) -> usize {
        self.attempt
    }

    /// Ask for another password.
    pub fn retry(self) -> Step<B> {
        let request = PasswordRequest::new(self.ctx.path.clone(), self.attempt + 1);
        Step::NeedPassword(PendingPassword {
            ctx: self.ctx,
            request,
        })
    }

    /// Give up on the file.
    pub fn cancel(self) -> Step<B> {
        tracing::debug!(path = %self.ctx.path.display(), "retry declined");
        Step::Done(Resolution::WrongPassword)
    }
}

impl<B: PdfBackend> fmt::Debug for PendingRetry<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingRetry")
            .field("path", &self.ctx.path)
            .field("attempt", &self.attempt)
            .finish_non_exhaustive()
    }
}

fn fail<B: PdfBackend>(path: &Path, err: UnlockError) -> Step<B> {
    tracing::warn!(path = %path.display(), "giving up on file: {err}");
    Step::Done(Resolution::Failed(err))
}

/// Resolves the password for one file.
///
/// # Example
///
/// ```ignore
/// let mut step = Resolver::new("report.pdf").start(candidates.passwords());
/// loop {
///     step = match step {
///         Step::Done(resolution) => break resolution,
///         Step::NeedPassword(pending) => match ask_user(pending.request()) {
///             Some(entry) => pending.submit(entry),
///             None => pending.cancel(),
///         },
///         Step::ConfirmRetry(pending) => pending.cancel(),
///     };
/// }
/// ```
pub struct Resolver<B: PdfBackend = LopdfBackend> {
    path: PathBuf,
    _backend: PhantomData<fn() -> B>,
}

impl Resolver<LopdfBackend> {
    /// Create a resolver for `path` using the default lopdf backend.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_backend(path)
    }
}

impl<B: PdfBackend> Resolver<B> {
    /// Create a resolver for `path` using backend `B`.
    pub fn with_backend(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _backend: PhantomData,
        }
    }

    /// The file to resolve.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the probe and trial phases.
    ///
    /// Candidates are tried in iteration order. Returns [`Step::Done`] if the
    /// file needs no password, a candidate worked, or an error occurred;
    /// otherwise [`Step::NeedPassword`] for the first prompt.
    pub fn start<'a, I>(self, candidates: I) -> Step<B>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => return fail(&self.path, e.into()),
        };

        match B::open(&bytes) {
            Ok(doc) => {
                tracing::debug!(
                    path = %self.path.display(),
                    pages = B::page_count(&doc),
                    empty_user_password = B::was_encrypted(&doc),
                    "no password needed"
                );
                return Step::Done(Resolution::NoPasswordNeeded);
            }
            Err(e) => {
                let err: UnlockError = e.into();
                if !err.is_password_error() {
                    return fail(&self.path, err);
                }
            }
        }

        let ctx = FileContext::<B> {
            path: self.path,
            bytes,
            _backend: PhantomData,
        };

        for (index, candidate) in candidates.into_iter().enumerate() {
            match ctx.unlock(candidate) {
                Ok(()) => {
                    tracing::info!(
                        path = %ctx.path.display(),
                        password = %abbreviate(candidate),
                        "unlocked with stored password"
                    );
                    return Step::Done(Resolution::Unlocked(PasswordSource::Candidate(index)));
                }
                Err(e) if e.is_password_error() => continue,
                Err(e) => return fail(&ctx.path, e),
            }
        }

        tracing::debug!(path = %ctx.path.display(), "no stored password matched");
        let request = PasswordRequest::new(ctx.path.clone(), 1);
        Step::NeedPassword(PendingPassword { ctx, request })
    }
}
