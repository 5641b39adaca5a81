//! # Storage Layer
//!
//! The catalog never touches the filesystem directly. It asks a
//! [`backend::StorageBackend`] for the raw document and hands a fresh one back
//! after every mutation. The backend handles the "how" (filesystem vs memory),
//! while [`document`] handles the "what" (the JSON layout and record parsing).
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: a single JSON file, replaced as a whole on
//!   every save (temp file + rename).
//! - [`mem_backend::MemBackend`]: for testing catalog logic without I/O. Can
//!   simulate write failures and counts writes.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── books.json      # The catalog document (name configurable)
//! └── config.json     # ShelfConfig
//! ```

pub mod backend;
pub mod document;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use document::{LoadMode, Snapshot};
