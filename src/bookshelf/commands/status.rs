use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Outcome, RecordId};
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    catalog: &mut Catalog<B>,
    id: RecordId,
    status: String,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match catalog.change_status(id, status)? {
        Outcome::StatusChanged { record, previous } => {
            if previous == record.status {
                result.add_message(CmdMessage::info(format!(
                    "Book {} is already '{}'",
                    id, record.status
                )));
            } else {
                result.add_message(CmdMessage::success(format!(
                    "Status updated ({}): {} -> {}",
                    id, previous, record.status
                )));
            }
            result.affected_records.push(record);
        }
        _ => {
            result.add_message(CmdMessage::warning(format!("No book with id {}", id)));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};
    use crate::model::STATUS_CHECKED_OUT;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn updates_status() {
        let mut catalog = Catalog::open(MemBackend::new()).unwrap();
        add::run(&mut catalog, "A".into(), "X".into(), 1).unwrap();

        let result = run(&mut catalog, 1, STATUS_CHECKED_OUT.into()).unwrap();
        assert_eq!(result.affected_records[0].status, STATUS_CHECKED_OUT);
        assert_eq!(
            result.messages[0].content,
            "Status updated (1): available -> checked out"
        );
    }

    #[test]
    fn same_status_is_info() {
        let mut catalog = Catalog::open(MemBackend::new()).unwrap();
        add::run(&mut catalog, "A".into(), "X".into(), 1).unwrap();

        let result = run(&mut catalog, 1, "available".into()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn missing_id_warns() {
        let mut catalog = Catalog::open(MemBackend::new()).unwrap();
        let result = run(&mut catalog, 3, "lost".into()).unwrap();
        assert!(result.affected_records.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
