//! lopdf-based PDF backend.
//!
//! Implements [`PdfBackend`] using the [lopdf](https://crates.io/crates/lopdf)
//! crate. This is the default backend for pdfunlock.

use crate::backend::PdfBackend;
use crate::error::BackendError;
use pdfunlock_core::UnlockError;

/// A parsed PDF document backed by lopdf.
///
/// If the source was encrypted, the objects held here are already decrypted
/// and the `/Encrypt` entry has been dropped, so saving writes plain PDF.
pub struct LopdfDocument {
    /// The underlying lopdf document.
    inner: lopdf::Document,
    /// Whether the source bytes carried an `/Encrypt` dictionary.
    was_encrypted: bool,
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.inner.get_pages().len())
            .field("was_encrypted", &self.was_encrypted)
            .finish_non_exhaustive()
    }
}

/// The lopdf-based PDF backend.
///
/// # Example
///
/// ```ignore
/// use pdfunlock_parse::{LopdfBackend, PdfBackend};
///
/// let doc = LopdfBackend::open_with_password(&pdf_bytes, "secret")?;
/// let plain = LopdfBackend::save(doc)?;
/// std::fs::write(path, plain)?;
/// ```
pub struct LopdfBackend;

fn parse_error(e: lopdf::Error) -> BackendError {
    BackendError::Parse(format!("failed to parse PDF: {e}"))
}

/// Whether a document loaded without a password came from encrypted bytes.
///
/// Without the right password lopdf loads only the encryption dictionary, so
/// such a document answers this question but is not otherwise usable.
fn is_encrypted(doc: &lopdf::Document) -> bool {
    doc.is_encrypted() || doc.encryption_state.is_some()
}

/// Load and decrypt `bytes` with `password`, then strip the encryption
/// dictionary so the document saves as plain PDF.
fn load_decrypted(bytes: &[u8], password: &str) -> Result<lopdf::Document, BackendError> {
    let mut doc = lopdf::Document::load_mem_with_password(bytes, password).map_err(|e| {
        let msg = e.to_string().to_ascii_lowercase();
        if msg.contains("incorrect") || msg.contains("password") {
            BackendError::Core(UnlockError::InvalidPassword)
        } else {
            BackendError::Parse(format!("decryption failed: {e}"))
        }
    })?;

    let encrypt_ref = doc
        .trailer
        .get(b"Encrypt")
        .and_then(lopdf::Object::as_reference)
        .ok();
    doc.trailer.remove(b"Encrypt");
    if let Some(id) = encrypt_ref {
        doc.objects.remove(&id);
    }
    doc.encryption_state = None;
    Ok(doc)
}

impl PdfBackend for LopdfBackend {
    type Document = LopdfDocument;
    type Error = BackendError;

    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error> {
        Self::open_with_password(bytes, "").map_err(|e| {
            if e.is_password_error() {
                BackendError::Core(UnlockError::PasswordRequired)
            } else {
                e
            }
        })
    }

    fn open_with_password(bytes: &[u8], password: &str) -> Result<Self::Document, Self::Error> {
        let probe = lopdf::Document::load_mem(bytes).map_err(parse_error)?;
        let was_encrypted = is_encrypted(&probe);

        // Ignore password if not encrypted
        let inner = if was_encrypted {
            let doc = load_decrypted(bytes, password)?;
            #[cfg(feature = "tracing")]
            tracing::debug!(pages = doc.get_pages().len(), "decrypted PDF");
            doc
        } else {
            probe
        };

        Ok(LopdfDocument {
            inner,
            was_encrypted,
        })
    }

    fn was_encrypted(doc: &Self::Document) -> bool {
        doc.was_encrypted
    }

    fn page_count(doc: &Self::Document) -> usize {
        doc.inner.get_pages().len()
    }

    fn save(doc: Self::Document) -> Result<Vec<u8>, Self::Error> {
        let mut inner = doc.inner;
        let mut buf = Vec::new();
        inner
            .save_to(&mut buf)
            .map_err(|e| BackendError::Write(e.to_string()))?;
        #[cfg(feature = "tracing")]
        tracing::trace!(bytes = buf.len(), "serialized decrypted PDF");
        Ok(buf)
    }
}
