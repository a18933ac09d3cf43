use crate::book::Model;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::predicate::FieldFilter;

use super::helpers::{listed_employees, listed_overview};

pub const COMMAND_WORD: &str = "filter";

pub const USAGE: &str = "filter: Shows only the employees whose payroll or leave count \
    satisfies the comparison.\n\
    Parameters: payroll|leaves <|<=|=|>=|> AMOUNT (non-negative integer)\n\
    Example: filter payroll >= 3000";

/// Replaces the display predicate. Records are hidden, never removed.
pub fn run(model: &mut Model, filter: FieldFilter) -> Result<CmdResult> {
    log::debug!("applying filter `{}`", filter);
    model.update_filter(filter.into());
    let listed = listed_employees(model);
    let overview = listed_overview(listed.len());
    Ok(CmdResult::default()
        .with_listed_employees(listed)
        .with_message(CmdMessage::info(overview)))
}
