use crate::catalog::{Catalog, SearchQuery};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(catalog: &Catalog<B>, query: &SearchQuery) -> Result<CmdResult> {
    let found = catalog.search_records(query);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("No matching books."));
    }
    Ok(result.with_listed_records(found))
}
