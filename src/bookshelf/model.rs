use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_CHECKED_OUT: &str = "checked out";

pub type RecordId = u64;

/// One catalog entry.
///
/// Only `status` changes after creation, and only through
/// [`Catalog::change_status`](crate::catalog::Catalog::change_status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: String,
}

impl Record {
    pub fn new(id: RecordId, title: String, author: String, year: i32) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: STATUS_AVAILABLE.to_string(),
        }
    }

    /// Plain JSON object with exactly the five persisted keys.
    pub fn to_value(&self) -> Value {
        json!({
            "id": self.id,
            "title": self.title,
            "author": self.author,
            "year": self.year,
            "status": self.status,
        })
    }

    /// Every key must be present with the right type; nothing is defaulted.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ShelfError::MalformedRecord(e.to_string()))
    }

    pub fn is_available(&self) -> bool {
        self.status == STATUS_AVAILABLE
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} by {} ({}) [{}]",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

/// Result of an operation that targets a single id.
///
/// A missing id is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Deleted(Record),
    StatusChanged { record: Record, previous: String },
    NotFound(RecordId),
}

impl Outcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound(_))
    }

    pub fn record(&self) -> Option<&Record> {
        match self {
            Outcome::Deleted(record) | Outcome::StatusChanged { record, .. } => Some(record),
            Outcome::NotFound(_) => None,
        }
    }
}
