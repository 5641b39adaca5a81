use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    catalog: &mut Catalog<B>,
    title: String,
    author: String,
    year: i32,
) -> Result<CmdResult> {
    let record = catalog.add_record(title, author, year)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        record.id, record.title
    )));
    result.affected_records.push(record);
    Ok(result)
}
