use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Outcome, RecordId};
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(catalog: &mut Catalog<B>, ids: &[RecordId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        match catalog.delete_record(id)? {
            Outcome::Deleted(record) => {
                result.add_message(CmdMessage::success(format!(
                    "Book deleted ({}): {}",
                    id, record.title
                )));
                result.affected_records.push(record);
            }
            _ => {
                result.add_message(CmdMessage::warning(format!("No book with id {}", id)));
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn deletes_present_and_warns_on_missing() {
        let mut catalog = Catalog::open(MemBackend::new()).unwrap();
        add::run(&mut catalog, "A".into(), "X".into(), 1).unwrap();
        add::run(&mut catalog, "B".into(), "Y".into(), 2).unwrap();

        let result = run(&mut catalog, &[2, 7]).unwrap();
        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert_eq!(result.messages[1].content, "No book with id 7");
        assert!(result.has_problems());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn deleting_twice_reports_not_found() {
        let mut catalog = Catalog::open(MemBackend::new()).unwrap();
        add::run(&mut catalog, "A".into(), "X".into(), 1).unwrap();

        assert!(!run(&mut catalog, &[1]).unwrap().has_problems());
        let second = run(&mut catalog, &[1]).unwrap();
        assert!(second.affected_records.is_empty());
        assert!(second.has_problems());
    }
}
