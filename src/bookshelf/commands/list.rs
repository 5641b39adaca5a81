use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(catalog: &Catalog<B>) -> Result<CmdResult> {
    let listed: Vec<_> = catalog.list_all().cloned().collect();
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("The catalog is empty."));
    }
    Ok(result.with_listed_records(listed))
}
