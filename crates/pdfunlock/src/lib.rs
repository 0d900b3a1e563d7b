//! pdfunlock: Remove password protection from PDF documents.
//!
//! This is the public API facade crate for pdfunlock. It re-exports types from
//! pdfunlock-core and uses pdfunlock-parse for opening, decrypting, and
//! re-serializing PDFs.
//!
//! # Architecture
//!
//! - **pdfunlock-core**: Backend-independent types (outcomes, candidates, report)
//! - **pdfunlock-parse**: The [`PdfBackend`] trait and its lopdf implementation
//! - **pdfunlock** (this crate): [`PasswordStore`], the per-file [`Resolver`],
//!   and the batch [`UnlockSession`]
//!
//! # Example
//!
//! ```ignore
//! use pdfunlock::{NoPrompt, PasswordStore, UnlockSession};
//!
//! let store = PasswordStore::open_default().expect("no home directory");
//! let mut session = UnlockSession::new(store);
//! let report = session.process_batch(["a.pdf", "b.pdf"], &mut NoPrompt);
//! println!("{report}");
//! ```

pub mod resolver;
pub mod session;
pub mod store;

pub use pdfunlock_core;
pub use pdfunlock_parse;

pub use pdfunlock_core::{
    Candidate, CandidateList, FailedFile, FileOutcome, PasswordEntry, PasswordRequest,
    PromptReply, SessionReport, UnlockError, abbreviate,
};
pub use pdfunlock_parse::{BackendError, LopdfBackend, PdfBackend};
pub use resolver::{PasswordSource, PendingPassword, PendingRetry, Resolution, Resolver, Step};
pub use session::{NoPrompt, PasswordPrompt, UnlockSession};
pub use store::{PasswordStore, STORE_FILE_NAME};
