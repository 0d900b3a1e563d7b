//! PDF backend trait.
//!
//! Defines the [`PdfBackend`] trait that abstracts the three operations the
//! unlocker needs from a PDF library: open without a password, open with a
//! password, and serialize the decrypted document.

use pdfunlock_core::UnlockError;

/// Trait abstracting PDF open/decrypt/save operations.
///
/// # Associated Types
///
/// - `Document`: The parsed (and, if needed, decrypted) document.
/// - `Error`: Backend-specific error type, convertible to [`UnlockError`].
///
/// # Usage
///
/// ```ignore
/// let doc = match MyBackend::open(&bytes) {
///     Ok(doc) => doc,
///     Err(_) => MyBackend::open_with_password(&bytes, "secret")?,
/// };
/// let decrypted = MyBackend::save(doc)?;
/// ```
pub trait PdfBackend {
    /// The parsed PDF document type.
    type Document;

    /// Backend-specific error type, convertible to [`UnlockError`].
    type Error: std::error::Error + Into<UnlockError>;

    /// Parse PDF bytes without supplying a password.
    ///
    /// Documents encrypted with an empty user password open successfully.
    ///
    /// # Errors
    ///
    /// Returns an error converting to [`UnlockError::PasswordRequired`] if the
    /// document needs a password, or another error if the bytes are not a
    /// valid PDF.
    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error>;

    /// Parse PDF bytes and decrypt them with `password`.
    ///
    /// The password is ignored for documents that are not encrypted.
    ///
    /// # Errors
    ///
    /// Returns an error converting to [`UnlockError::InvalidPassword`] if the
    /// password is wrong, or another error if the bytes are not a valid PDF.
    fn open_with_password(bytes: &[u8], password: &str) -> Result<Self::Document, Self::Error>;

    /// Returns `true` if the document was encrypted when it was opened.
    fn was_encrypted(doc: &Self::Document) -> bool;

    /// Return the number of pages in the document.
    fn page_count(doc: &Self::Document) -> usize;

    /// Serialize the document without encryption.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn save(doc: Self::Document) -> Result<Vec<u8>, Self::Error>;
}
