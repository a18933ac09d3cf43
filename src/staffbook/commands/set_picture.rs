//! Attach a profile picture to an employee.
//!
//! Order matters: the id and the destination are resolved before the chooser is
//! consulted, and the record only points at the managed copy once the copy has
//! completed.

use crate::book::Model;
use crate::commands::{CmdMessage, CmdResult, ExecContext};
use crate::error::{CommandError, Result};
use crate::model::EmployeeId;
use crate::picture::{destination_for, is_accepted_picture};

use super::helpers::{displayed_employee, replace_employee};

pub const COMMAND_WORD: &str = "setpicture";

pub const USAGE: &str = "setpicture: Sets the picture of an employee, identified by the \
    EMPLOYEE_ID used in the displayed employee list.\n\
    Parameters: EMPLOYEE_ID (must be a positive integer)\n\
    Example: setpicture 1";

pub fn run(model: &mut Model, id: EmployeeId, ctx: &mut ExecContext<'_>) -> Result<CmdResult> {
    let mut employee = displayed_employee(model, id)?;
    let dest = destination_for(ctx.picture_dir, &employee.name)?;

    let source = ctx.chooser.choose_source()?;
    if !is_accepted_picture(&source) {
        return Err(CommandError::UnsupportedPicture(source.display().to_string()).into());
    }

    ctx.transfer.copy(&source, &dest).map_err(|e| {
        log::debug!(
            "copying {} to {} failed: {}",
            source.display(),
            dest.display(),
            e
        );
        CommandError::IoFailure
    })?;

    employee.picture = Some(dest);
    employee.touch();
    replace_employee(model, employee.clone());
    log::info!("set picture for employee #{}", id);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Set picture for Employee: {}",
            employee
        )))
        .with_affected_employee(employee))
}
