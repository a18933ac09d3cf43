use crate::book::Model;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::predicate::EmployeePredicate;

use super::helpers::listed_employees;

pub const COMMAND_WORD: &str = "list";

pub fn run(model: &mut Model) -> Result<CmdResult> {
    model.update_filter(EmployeePredicate::ShowAll);
    Ok(CmdResult::default()
        .with_listed_employees(listed_employees(model))
        .with_message(CmdMessage::info("Listed all employees")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{ComparisonFlags, FieldFilter};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resets_active_filter() {
        let mut model = StoreFixture::new().with_staff().model();
        let gt = ComparisonFlags::from_symbol(">").unwrap();
        model.update_filter(FieldFilter::by_payroll(4000, gt).into());

        let result = run(&mut model).unwrap();
        assert_eq!(result.listed_employees.len(), 3);
        assert_eq!(model.filter(), &EmployeePredicate::ShowAll);
    }

    #[test]
    fn empty_book_lists_nothing() {
        let mut model = Model::default();
        let result = run(&mut model).unwrap();
        assert!(result.listed_employees.is_empty());
    }
}
