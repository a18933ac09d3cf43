use crate::book::Model;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::predicate::EmployeePredicate;

pub const COMMAND_WORD: &str = "clear";

/// Removes every record. Managed picture files are left on disk.
pub fn run(model: &mut Model) -> Result<CmdResult> {
    let removed = model.book.mutate(|list| {
        let count = list.len();
        list.clear();
        count
    });
    model.update_filter(EmployeePredicate::ShowAll);
    log::info!("cleared {} employees", removed);

    Ok(CmdResult::default().with_message(CmdMessage::success("Address book has been cleared!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn empties_book_and_restarts_ids() {
        let mut model = StoreFixture::new().with_staff().model();
        run(&mut model).unwrap();

        assert!(model.book.employees().is_empty());
        assert_eq!(model.book.next_id().value(), 1);
        assert_eq!(model.filter(), &EmployeePredicate::ShowAll);
    }
}
