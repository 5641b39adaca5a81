//! # Catalog
//!
//! The catalog owns every [`Record`] and keeps the persisted document in step
//! with memory: each mutation rewrites the whole document before returning.
//!
//! If that write fails the mutation stays applied in memory and the error is
//! returned; the next successful save brings the target back in line.
//!
//! Ids come from a counter that is persisted with the records, so an id is
//! never handed out twice over the catalog's lifetime, even across deletes.

use crate::error::{Result, ShelfError};
use crate::model::{Outcome, Record, RecordId};
use crate::store::document::{self, LoadMode};
use crate::store::StorageBackend;

/// Filters for [`Catalog::search_records`]. Unset filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn is_empty(&self) -> bool {
        text_filter(&self.title).is_none()
            && text_filter(&self.author).is_none()
            && self.year.is_none()
    }

    fn compile(&self) -> CompiledQuery {
        CompiledQuery {
            title: text_filter(&self.title).map(str::to_lowercase),
            author: text_filter(&self.author).map(str::to_lowercase),
            year: self.year,
        }
    }
}

// Empty strings impose no constraint.
fn text_filter(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

struct CompiledQuery {
    title: Option<String>,
    author: Option<String>,
    year: Option<i32>,
}

impl CompiledQuery {
    fn matches(&self, record: &Record) -> bool {
        if let Some(title) = &self.title {
            if !record.title.to_lowercase().contains(title.as_str()) {
                return false;
            }
        }
        if let Some(author) = &self.author {
            if !record.author.to_lowercase().contains(author.as_str()) {
                return false;
            }
        }
        self.year.map_or(true, |year| record.year == year)
    }
}

pub struct Catalog<B: StorageBackend> {
    backend: B,
    records: Vec<Record>,
    next_id: RecordId,
    mode: LoadMode,
}

impl<B: StorageBackend> Catalog<B> {
    /// Bind to `backend` and load whatever it holds, in strict mode.
    pub fn open(backend: B) -> Result<Self> {
        Self::open_with_mode(backend, LoadMode::Strict)
    }

    pub fn open_with_mode(backend: B, mode: LoadMode) -> Result<Self> {
        let mut catalog = Self {
            backend,
            records: Vec::new(),
            next_id: 1,
            mode,
        };
        catalog.load()?;
        Ok(catalog)
    }

    /// Replace in-memory state with the persisted document.
    ///
    /// A target with nothing persisted yields an empty catalog. On error the
    /// in-memory state is left untouched.
    pub fn load(&mut self) -> Result<()> {
        let snapshot = match self.backend.read_document()? {
            Some(text) => document::decode(&text, self.mode)?,
            None => Default::default(),
        };
        tracing::debug!(
            target_location = %self.backend.location(),
            records = snapshot.records.len(),
            next_id = snapshot.next_id,
            "catalog loaded"
        );
        self.records = snapshot.records;
        self.next_id = snapshot.next_id;
        Ok(())
    }

    /// Overwrite the persisted document with the current state.
    pub fn save(&self) -> Result<()> {
        let text = document::encode(self.next_id, &self.records)?;
        self.backend.write_document(&text)?;
        tracing::debug!(
            target_location = %self.backend.location(),
            records = self.records.len(),
            "catalog saved"
        );
        Ok(())
    }

    pub fn add_record(&mut self, title: String, author: String, year: i32) -> Result<Record> {
        let next_id = self
            .next_id
            .checked_add(1)
            .ok_or(ShelfError::IdsExhausted(self.next_id))?;
        let record = Record::new(self.next_id, title, author, year);
        self.next_id = next_id;
        self.records.push(record.clone());
        tracing::info!(id = record.id, title = %record.title, "record added");
        self.save()?;
        Ok(record)
    }

    pub fn delete_record(&mut self, id: RecordId) -> Result<Outcome> {
        let Some(pos) = self.position(id) else {
            tracing::debug!(id, "delete: no such record");
            return Ok(Outcome::NotFound(id));
        };
        let removed = self.records.remove(pos);
        tracing::info!(id, title = %removed.title, "record deleted");
        self.save()?;
        Ok(Outcome::Deleted(removed))
    }

    pub fn search_records(&self, query: &SearchQuery) -> Vec<Record> {
        let compiled = query.compile();
        self.records
            .iter()
            .filter(|r| compiled.matches(r))
            .cloned()
            .collect()
    }

    pub fn list_all(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn change_status(&mut self, id: RecordId, status: String) -> Result<Outcome> {
        let Some(pos) = self.position(id) else {
            tracing::debug!(id, "change_status: no such record");
            return Ok(Outcome::NotFound(id));
        };
        let record = &mut self.records[pos];
        let previous = std::mem::replace(&mut record.status, status);
        let record = record.clone();
        tracing::info!(id, from = %previous, to = %record.status, "status changed");
        self.save()?;
        Ok(Outcome::StatusChanged { record, previous })
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id the next added record will receive.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}
