//! # API Facade
//!
//! The single entry point for every UI (the `shelf` subcommands, the
//! interactive shell, tests). It dispatches to `commands/*.rs` and returns
//! structured [`CmdResult`]s; it never prints and never exits.
//!
//! `BookshelfApi<B: StorageBackend>` is generic over the backend so the same
//! facade runs over [`FsBackend`] in production and
//! [`MemBackend`](crate::store::mem_backend::MemBackend) in tests.

use crate::catalog::{Catalog, SearchQuery};
use crate::commands;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::model::{RecordId, STATUS_AVAILABLE, STATUS_CHECKED_OUT};
use crate::store::fs_backend::FsBackend;
use crate::store::StorageBackend;
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct BookshelfApi<B: StorageBackend> {
    catalog: Catalog<B>,
    config_dir: PathBuf,
}

impl BookshelfApi<FsBackend> {
    /// Open the catalog kept in `data_dir`, honouring its `config.json`.
    pub fn open_dir(data_dir: &Path) -> Result<Self> {
        let config = ShelfConfig::load(data_dir)?;
        let backend = FsBackend::new(config.data_path(data_dir));
        let catalog = Catalog::open_with_mode(backend, config.load_mode())?;
        Ok(Self::new(catalog, data_dir.to_path_buf()))
    }
}

impl<B: StorageBackend> BookshelfApi<B> {
    pub fn new(catalog: Catalog<B>, config_dir: PathBuf) -> Self {
        Self {
            catalog,
            config_dir,
        }
    }

    pub fn add_book(&mut self, title: String, author: String, year: i32) -> Result<CmdResult> {
        commands::add::run(&mut self.catalog, title, author, year)
    }

    pub fn delete_books(&mut self, ids: &[RecordId]) -> Result<CmdResult> {
        commands::delete::run(&mut self.catalog, ids)
    }

    pub fn search_books(&self, query: &SearchQuery) -> Result<CmdResult> {
        commands::search::run(&self.catalog, query)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn change_status(&mut self, id: RecordId, status: String) -> Result<CmdResult> {
        commands::status::run(&mut self.catalog, id, status)
    }

    pub fn check_out(&mut self, id: RecordId) -> Result<CmdResult> {
        self.change_status(id, STATUS_CHECKED_OUT.to_string())
    }

    pub fn return_book(&mut self, id: RecordId) -> Result<CmdResult> {
        self.change_status(id, STATUS_AVAILABLE.to_string())
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn catalog(&self) -> &Catalog<B> {
        &self.catalog
    }

    pub fn storage_location(&self) -> String {
        self.catalog.backend().location()
    }
}
