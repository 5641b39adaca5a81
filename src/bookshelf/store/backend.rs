use crate::error::Result;

/// Abstract interface for raw catalog I/O.
///
/// A backend stores one opaque text document. It knows nothing about records;
/// encoding and decoding live in [`super::document`].
pub trait StorageBackend {
    /// Read the whole document.
    /// Returns Ok(None) if nothing has been persisted yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_document(&self) -> Result<Option<String>>;

    /// Replace the whole document.
    /// MUST NOT leave a partially written document behind.
    fn write_document(&self, contents: &str) -> Result<()>;

    /// Human readable name of the persistence target, for logs and messages.
    fn location(&self) -> String;
}
