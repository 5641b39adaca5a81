use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::cell::{Cell, RefCell};
use std::io;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the catalog is
/// single-threaded, so `StorageBackend` can keep `&self` methods.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<String>>,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already persisted document.
    pub fn with_document(contents: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.document.borrow_mut() = Some(contents.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn read_document(&self) -> Result<Option<String>> {
        Ok(self.document.borrow().clone())
    }

    fn write_document(&self, contents: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShelfError::Persistence(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Simulated write error",
            )));
        }
        *self.document.borrow_mut() = Some(contents.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
