//! The on-disk catalog document.
//!
//! ```json
//! {
//!   "next_id": 3,
//!   "records": [
//!     { "id": 1, "title": "...", "author": "...", "year": 1869, "status": "available" }
//!   ]
//! }
//! ```
//!
//! A bare top-level array of records is also accepted on load. Catalogs in
//! that shape predate the persisted counter, so `next_id` is derived from the
//! highest id present.

use crate::error::{Result, ShelfError};
use crate::model::{Record, RecordId};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// How to treat entries that fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Fail the whole load with `MalformedRecord`.
    #[default]
    Strict,
    /// Skip the entry and log a warning.
    Lenient,
}

/// Decoded contents of a catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub next_id: RecordId,
    pub records: Vec<Record>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

// Serialized straight from the structs so keys keep declaration order.
#[derive(Serialize)]
struct Document<'a> {
    next_id: RecordId,
    records: &'a [Record],
}

pub fn encode(next_id: RecordId, records: &[Record]) -> Result<String> {
    let mut text = serde_json::to_string_pretty(&Document { next_id, records })?;
    text.push('\n');
    Ok(text)
}

pub fn decode(text: &str, mode: LoadMode) -> Result<Snapshot> {
    if text.trim().is_empty() {
        return Ok(Snapshot::default());
    }

    let doc: Value = serde_json::from_str(text)
        .map_err(|e| ShelfError::MalformedRecord(format!("document is not valid JSON: {}", e)))?;

    let (stored_next_id, entries) = match doc {
        Value::Array(entries) => (None, entries),
        Value::Object(mut obj) => {
            let entries = match obj.remove("records") {
                Some(Value::Array(entries)) => entries,
                Some(_) => {
                    return Err(ShelfError::MalformedRecord(
                        "`records` must be an array".to_string(),
                    ))
                }
                None => {
                    return Err(ShelfError::MalformedRecord(
                        "document has no `records` array".to_string(),
                    ))
                }
            };
            let next_id = match obj.get("next_id") {
                None => None,
                Some(v) => Some(v.as_u64().ok_or_else(|| {
                    ShelfError::MalformedRecord(format!("`next_id` must be an integer, got {}", v))
                })?),
            };
            (next_id, entries)
        }
        other => {
            return Err(ShelfError::MalformedRecord(format!(
                "expected an object or array, got {}",
                kind_of(&other)
            )))
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut seen = HashSet::new();
    for (pos, entry) in entries.into_iter().enumerate() {
        let parsed = Record::from_value(entry).and_then(|record| {
            if record.id == 0 {
                Err(ShelfError::MalformedRecord("id must be positive, got 0".to_string()))
            } else if seen.insert(record.id) {
                Ok(record)
            } else {
                Err(ShelfError::MalformedRecord(format!("duplicate id {}", record.id)))
            }
        });
        match (parsed, mode) {
            (Ok(record), _) => records.push(record),
            (Err(ShelfError::MalformedRecord(msg)), LoadMode::Strict) => {
                return Err(ShelfError::MalformedRecord(format!("entry {}: {}", pos, msg)))
            }
            (Err(e), LoadMode::Strict) => return Err(e),
            (Err(e), LoadMode::Lenient) => {
                tracing::warn!(entry = pos, error = %e, "skipping unreadable catalog entry");
            }
        }
    }

    // Never hand out an id that is already taken, even if the stored counter lags.
    let floor = match records.iter().map(|r| r.id).max() {
        None => 1,
        Some(max) => max.checked_add(1).ok_or_else(|| {
            ShelfError::MalformedRecord(format!("id {} leaves no room for new ids", max))
        })?,
    };
    let next_id = stored_next_id.map_or(floor, |n| n.max(floor));

    Ok(Snapshot { next_id, records })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: RecordId, title: &str) -> Record {
        Record::new(id, title.into(), "Author".into(), 2000)
    }

    #[test]
    fn encode_then_decode_preserves_order_and_counter() {
        let records = vec![book(4, "Second"), book(2, "First")];
        let text = encode(9, &records).unwrap();
        let snapshot = decode(&text, LoadMode::Strict).unwrap();
        assert_eq!(snapshot.next_id, 9);
        assert_eq!(snapshot.records, records);
    }

    #[test]
    fn encode_writes_non_ascii_verbatim() {
        let text = encode(2, &[book(1, "Мастер и Маргарита")]).unwrap();
        assert!(text.contains("Мастер и Маргарита"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn encode_keeps_record_field_order() {
        let text = encode(2, &[book(1, "Title")]).unwrap();
        let pos = |key: &str| text.find(&format!("\"{}\"", key)).unwrap();
        assert!(pos("next_id") < pos("records"));
        assert!(pos("id") < pos("title"));
        assert!(pos("title") < pos("author"));
        assert!(pos("author") < pos("year"));
        assert!(pos("year") < pos("status"));
    }

    #[test]
    fn empty_text_is_an_empty_catalog() {
        assert_eq!(decode("  \n", LoadMode::Strict).unwrap(), Snapshot::default());
    }

    #[test]
    fn legacy_array_derives_next_id() {
        let text = r#"[
            {"id": 1, "title": "A", "author": "X", "year": 1, "status": "available"},
            {"id": 5, "title": "B", "author": "Y", "year": 2, "status": "checked out"}
        ]"#;
        let snapshot = decode(text, LoadMode::Strict).unwrap();
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.next_id, 6);
    }

    #[test]
    fn stale_counter_is_raised_past_existing_ids() {
        let text = r#"{"next_id": 2, "records": [
            {"id": 3, "title": "A", "author": "X", "year": 1, "status": "available"}
        ]}"#;
        assert_eq!(decode(text, LoadMode::Strict).unwrap().next_id, 4);
    }

    #[test]
    fn strict_mode_propagates_bad_entry() {
        let text = r#"{"next_id": 3, "records": [
            {"id": 1, "title": "A", "author": "X", "year": 1, "status": "available"},
            {"id": 2, "title": "B", "author": "Y", "status": "available"}
        ]}"#;
        let err = decode(text, LoadMode::Strict).unwrap_err();
        match err {
            ShelfError::MalformedRecord(msg) => {
                assert!(msg.starts_with("entry 1"), "unexpected message: {}", msg);
                assert!(msg.contains("year"));
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn lenient_mode_skips_bad_entries() {
        let text = r#"{"next_id": 3, "records": [
            {"id": 1, "title": "A", "author": "X", "year": "nineteen", "status": "available"},
            {"id": 2, "title": "B", "author": "Y", "year": 2, "status": "available"}
        ]}"#;
        let snapshot = decode(text, LoadMode::Lenient).unwrap();
        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.records[0].id, 2);
        assert_eq!(snapshot.next_id, 3);
    }

    #[test]
    fn duplicate_ids_are_malformed() {
        let text = r#"[
            {"id": 1, "title": "A", "author": "X", "year": 1, "status": "available"},
            {"id": 1, "title": "B", "author": "Y", "year": 2, "status": "available"}
        ]"#;
        assert!(matches!(
            decode(text, LoadMode::Strict),
            Err(ShelfError::MalformedRecord(_))
        ));
        assert_eq!(decode(text, LoadMode::Lenient).unwrap().records.len(), 1);
    }

    #[test]
    fn rejects_documents_of_the_wrong_shape() {
        for text in ["42", "\"books\"", "{\"books\": []}", "{\"records\": {}}", "{not json"] {
            assert!(
                matches!(decode(text, LoadMode::Lenient), Err(ShelfError::MalformedRecord(_))),
                "accepted {}",
                text
            );
        }
    }

    #[test]
    fn zero_id_is_malformed() {
        let text = r#"[{"id": 0, "title": "A", "author": "X", "year": 1, "status": "available"}]"#;
        let err = decode(text, LoadMode::Strict).unwrap_err();
        assert!(matches!(err, ShelfError::MalformedRecord(ref m) if m.contains("positive")));
        assert!(decode(text, LoadMode::Lenient).unwrap().records.is_empty());
    }

    #[test]
    fn largest_possible_id_is_malformed() {
        let text = format!(
            r#"[{{"id": {}, "title": "A", "author": "X", "year": 1, "status": "available"}}]"#,
            u64::MAX
        );
        assert!(matches!(
            decode(&text, LoadMode::Strict),
            Err(ShelfError::MalformedRecord(_))
        ));
        assert!(matches!(
            decode(&text, LoadMode::Lenient),
            Err(ShelfError::MalformedRecord(_))
        ));
    }

    #[test]
    fn rejects_non_integer_counter() {
        let text = r#"{"next_id": "7", "records": []}"#;
        assert!(matches!(
            decode(text, LoadMode::Strict),
            Err(ShelfError::MalformedRecord(_))
        ));
    }
}
