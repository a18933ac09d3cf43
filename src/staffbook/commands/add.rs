use crate::book::Model;
use crate::commands::{CmdMessage, CmdResult, NewEmployee};
use crate::error::{CommandError, Result};
use crate::model::Employee;

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds an employee to the address book.\n\
    Parameters: n/NAME p/PAYROLL [l/LEAVES]\n\
    Example: add n/John Doe p/3200 l/2";

pub fn run(model: &mut Model, new: NewEmployee) -> Result<CmdResult> {
    if model.book.has_employee_named(&new.name) {
        return Err(CommandError::DuplicateEmployee(new.name).into());
    }

    let id = model.book.next_id();
    let employee = Employee::new(id, new.name, new.payroll, new.leave_count);
    model.book.mutate(|list| list.push(employee.clone()));
    log::info!("added employee #{}", id);

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "New employee added: {}",
        employee
    )));
    if model.find_displayed(id).is_none() {
        result.add_message(CmdMessage::warning(format!(
            "Employee #{} is hidden by the active filter. Use `list` to show everyone.",
            id
        )));
    }
    Ok(result.with_affected_employee(employee))
}
