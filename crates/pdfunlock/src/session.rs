//! Batch unlocking with a shared candidate list.
//!
//! [`UnlockSession`] owns everything that lives across files in a batch: the
//! password store handle, the in-memory [`CandidateList`], and the
//! [`SessionReport`]. Files are processed one at a time; when a file needs
//! user input the session asks a [`PasswordPrompt`] and feeds the answer back
//! to the [`Resolver`].

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use pdfunlock_core::{
    CandidateList, PasswordEntry, PasswordRequest, PromptReply, SessionReport, UnlockError,
};
use pdfunlock_parse::{LopdfBackend, PdfBackend};

use crate::resolver::{PasswordSource, Resolution, Resolver, Step};
use crate::store::PasswordStore;

/// The presentation layer's side of the password prompt.
pub trait PasswordPrompt {
    /// Ask for a password for `request.path()`.
    ///
    /// `stored` is the current candidate list, for offering a selection or
    /// deletion of remembered passwords.
    fn ask_password(&mut self, request: &PasswordRequest, stored: &CandidateList) -> PromptReply;

    /// A prompted password for `path` was wrong. Return `true` to try again.
    fn confirm_retry(&mut self, path: &Path) -> bool;

    /// Report a non-password error for `path` as soon as it happens.
    fn report_error(&mut self, path: &Path, error: &UnlockError) {
        let _ = (path, error);
    }
}

/// A prompt that never asks: every file that needs a password is given up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl PasswordPrompt for NoPrompt {
    fn ask_password(&mut self, _request: &PasswordRequest, _stored: &CandidateList) -> PromptReply {
        PromptReply::Cancel
    }

    fn confirm_retry(&mut self, _path: &Path) -> bool {
        false
    }
}

/// State shared across the files of one batch.
///
/// # Example
///
/// ```ignore
/// let store = PasswordStore::open_default().expect("no home directory");
/// let mut session = UnlockSession::new(store);
/// session.process_batch(paths, &mut NoPrompt);
/// println!("{}", session.report());
/// ```
pub struct UnlockSession<B: PdfBackend = LopdfBackend> {
    store: Option<PasswordStore>,
    candidates: CandidateList,
    report: SessionReport,
    _backend: PhantomData<fn() -> B>,
}

impl UnlockSession<LopdfBackend> {
    /// Start a session, loading candidates from `store`.
    pub fn new(store: PasswordStore) -> Self {
        Self::with_backend(Some(store))
    }

    /// Start a session with no backing store. Nothing is ever persisted.
    pub fn in_memory() -> Self {
        Self::with_backend(None)
    }
}

impl<B: PdfBackend> UnlockSession<B> {
    /// Start a session using backend `B`, loading candidates from `store`
    /// if one is given.
    pub fn with_backend(store: Option<PasswordStore>) -> Self {
        let candidates = store
            .as_ref()
            .map(|s| CandidateList::from_persisted(s.load()))
            .unwrap_or_default();
        Self {
            store,
            candidates,
            report: SessionReport::new(),
            _backend: PhantomData,
        }
    }

    /// The backing store, if any.
    pub fn store(&self) -> Option<&PasswordStore> {
        self.store.as_ref()
    }

    /// The current candidate list, in trial order.
    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// Outcomes recorded so far.
    pub fn report(&self) -> &SessionReport {
        &self.report
    }

    /// Finish the session and take its report.
    pub fn into_report(self) -> SessionReport {
        self.report
    }

    /// Add a password to try for the rest of this session without storing it.
    ///
    /// Returns `false` if it was already a candidate.
    pub fn add_session_password(&mut self, password: impl Into<String>) -> bool {
        self.candidates.insert(password, false)
    }

    /// Remove `password` from the candidates and rewrite the store.
    ///
    /// Returns `true` if the password was a candidate.
    pub fn forget(&mut self, password: &str) -> bool {
        if !self.candidates.remove(password) {
            return false;
        }
        tracing::info!(
            password = %pdfunlock_core::abbreviate(password),
            "forgot stored password"
        );
        self.persist();
        true
    }

    fn persist(&self) {
        if let Some(store) = &self.store {
            store.save(&self.candidates.persisted());
        }
    }

    /// Add a prompted password that just unlocked a file.
    fn learn(&mut self, entry: PasswordEntry) {
        let persisted_before = self.candidates.persisted().len();
        self.candidates.insert(entry.password, entry.memorize);
        if self.candidates.persisted().len() != persisted_before {
            self.persist();
        }
    }

    /// Resolve one file, asking `prompt` when no candidate works.
    ///
    /// The outcome is recorded in the session report. A non-password error
    /// is passed to [`PasswordPrompt::report_error`] immediately.
    pub fn process_file<P>(&mut self, path: impl AsRef<Path>, prompt: &mut P) -> Resolution
    where
        P: PasswordPrompt + ?Sized,
    {
        let path = path.as_ref();
        let mut step = Resolver::<B>::with_backend(path).start(self.candidates.passwords());

        let resolution = loop {
            step = match step {
                Step::Done(resolution) => break resolution,
                Step::NeedPassword(pending) => {
                    match prompt.ask_password(pending.request(), &self.candidates) {
                        PromptReply::Submit(entry) => pending.submit(entry),
                        PromptReply::Forget(password) => {
                            self.forget(&password);
                            Step::NeedPassword(pending)
                        }
                        PromptReply::Cancel => pending.cancel(),
                    }
                }
                Step::ConfirmRetry(pending) => {
                    if prompt.confirm_retry(pending.path()) {
                        pending.retry()
                    } else {
                        pending.cancel()
                    }
                }
            };
        };

        if let Resolution::Unlocked(PasswordSource::Prompt(entry)) = &resolution {
            self.learn(entry.clone());
        }
        match &resolution {
            Resolution::Failed(err) => {
                prompt.report_error(path, err);
                self.report.record_failure(path, err);
            }
            other => {
                if let Some(outcome) = other.outcome() {
                    self.report.record(path, outcome);
                }
            }
        }
        resolution
    }

    /// Resolve every file in `paths`, in order.
    pub fn process_batch<I, P>(&mut self, paths: I, prompt: &mut P) -> &SessionReport
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
        P: PasswordPrompt + ?Sized,
    {
        for path in paths {
            let path: PathBuf = path.into();
            self.process_file(&path, prompt);
        }
        tracing::info!(
            unlocked = self.report.unlocked.len(),
            wrong_password = self.report.wrong_password.len(),
            no_password_needed = self.report.no_password_needed.len(),
            failed = self.report.failed.len(),
            "batch finished"
        );
        &self.report
    }
}
