use crate::book::Model;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeId;

use super::helpers::displayed_employee;

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete: Deletes the employee identified by EMPLOYEE_ID in the displayed list.\n\
    Parameters: EMPLOYEE_ID (must be a positive integer)\n\
    Example: delete 1";

pub fn run(model: &mut Model, id: EmployeeId) -> Result<CmdResult> {
    let employee = displayed_employee(model, id)?;
    model.book.mutate(|list| list.retain(|e| e.id != id));
    log::info!("deleted employee #{}", id);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Deleted Employee: {}",
            employee
        )))
        .with_affected_employee(employee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CommandError, StaffError};
    use crate::predicate::{ComparisonFlags, FieldFilter};
    use crate::store::memory::fixtures::StoreFixture;

    fn id(n: u32) -> EmployeeId {
        EmployeeId::new(n).unwrap()
    }

    #[test]
    fn removes_employee() {
        let mut model = StoreFixture::new().with_staff().model();
        let result = run(&mut model, id(2)).unwrap();

        assert_eq!(result.affected_employee.unwrap().name, "Bernice Yu");
        assert!(model.book.get(id(2)).is_none());
        assert_eq!(model.book.employees().len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete_of_middle() {
        let mut model = StoreFixture::new().with_staff().model();
        run(&mut model, id(2)).unwrap();
        assert_eq!(model.book.next_id().value(), 4);
    }

    #[test]
    fn hidden_employee_cannot_be_deleted() {
        let mut model = StoreFixture::new().with_staff().model();
        let lt = ComparisonFlags::from_symbol("<").unwrap();
        model.update_filter(FieldFilter::by_payroll(2000, lt).into());
        let version = model.book.version();

        let err = run(&mut model, id(3)).unwrap_err();
        assert!(matches!(
            err,
            StaffError::Command(CommandError::InvalidIndexOrId(_))
        ));
        assert_eq!(model.book.version(), version);
        assert!(model.book.get(id(3)).is_some());
    }
}
