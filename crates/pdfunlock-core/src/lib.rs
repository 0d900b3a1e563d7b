//! pdfunlock-core: Backend-independent data types for pdfunlock.
//!
//! This crate provides the types shared by the backend and the public API:
//! the [`UnlockError`] taxonomy, per-file [`FileOutcome`]s, the ordered
//! [`CandidateList`] of remembered passwords, the prompt request/reply types,
//! and the batch [`SessionReport`]. It does no I/O.

pub mod candidates;
pub mod error;
pub mod mask;
pub mod outcome;
pub mod prompt;
pub mod report;

pub use candidates::{Candidate, CandidateList};
pub use error::UnlockError;
pub use mask::abbreviate;
pub use outcome::FileOutcome;
pub use prompt::{PasswordEntry, PasswordRequest, PromptReply};
pub use report::{FailedFile, SessionReport};
