//! pdfunlock-parse: PDF backend for pdfunlock.
//!
//! Defines the [`PdfBackend`] trait (open, open with password, save) and its
//! default implementation on top of lopdf. Depends on pdfunlock-core for the
//! shared error type.

pub mod backend;
pub mod error;
pub mod lopdf_backend;

pub use backend::PdfBackend;
pub use error::BackendError;
pub use lopdf_backend::{LopdfBackend, LopdfDocument};
pub use pdfunlock_core;
