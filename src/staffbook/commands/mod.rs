//! # Command Layer
//!
//! Each command lives in its own submodule and implements a pure `run` function
//! over the [`Model`]. A [`Command`] value carries already-validated arguments;
//! [`execute`] is the only dispatch point.
//!
//! ## What Commands Do NOT Do
//!
//! - **Parsing**: arguments arrive typed, see [`crate::parser`]
//! - **Persistence**: the API layer saves the model after a successful mutation
//! - **Terminal I/O**: results are structured [`CmdResult`] values, the UI renders them
//!
//! Picture selection is the one interaction a command needs; it is injected through
//! [`ExecContext`] so tests can cancel or fail it deterministically.
//!
//! ## Failure Atomicity
//!
//! Commands resolve and validate everything before calling
//! [`crate::book::AddressBook::mutate`]. A failing command therefore leaves the
//! model exactly as it found it.

use crate::book::Model;
use crate::error::Result;
use crate::model::{Employee, EmployeeId};
use crate::picture::{FileTransfer, PictureChooser};
use crate::predicate::FieldFilter;
use serde::Serialize;
use std::path::Path;

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod find;
pub mod help;
pub mod helpers;
pub mod list;
pub mod set_picture;

/// Fields of a new employee, validated by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub payroll: u64,
    pub leave_count: u64,
}

/// Partial update for `edit`. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub payroll: Option<u64>,
    pub leave_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(NewEmployee),
    Edit { id: EmployeeId, changes: EmployeeChanges },
    Delete(EmployeeId),
    List,
    Find(Vec<String>),
    Filter(FieldFilter),
    SetPicture(EmployeeId),
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Edit { .. } => edit::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::List => list::COMMAND_WORD,
            Command::Find(_) => find::COMMAND_WORD,
            Command::Filter(_) => filter::COMMAND_WORD,
            Command::SetPicture(_) => set_picture::COMMAND_WORD,
            Command::Clear => clear::COMMAND_WORD,
            Command::Help => help::COMMAND_WORD,
            Command::Exit => help::EXIT_WORD,
        }
    }
}

/// External collaborators a command may need while it runs.
pub struct ExecContext<'a> {
    pub picture_dir: &'a Path,
    pub chooser: &'a mut dyn PictureChooser,
    pub transfer: &'a dyn FileTransfer,
}

pub fn execute(
    command: Command,
    model: &mut Model,
    ctx: &mut ExecContext<'_>,
) -> Result<CmdResult> {
    log::debug!("executing `{}`", command.word());
    match command {
        Command::Add(new) => add::run(model, new),
        Command::Edit { id, changes } => edit::run(model, id, changes, ctx),
        Command::Delete(id) => delete::run(model, id),
        Command::List => list::run(model),
        Command::Find(keywords) => find::run(model, keywords),
        Command::Filter(field_filter) => filter::run(model, field_filter),
        Command::SetPicture(id) => set_picture::run(model, id, ctx),
        Command::Clear => clear::run(model),
        Command::Help => Ok(help::run()),
        Command::Exit => Ok(help::exit()),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of one command execution. Built once, handed to the UI, dropped.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_employee: Option<Employee>,
    pub listed_employees: Vec<Employee>,
    /// Set when the command produced a listing, even an empty one.
    pub is_listing: bool,
    pub messages: Vec<CmdMessage>,
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_employee(mut self, employee: Employee) -> Self {
        self.affected_employee = Some(employee);
        self
    }

    pub fn with_listed_employees(mut self, employees: Vec<Employee>) -> Self {
        self.listed_employees = employees;
        self.is_listing = true;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }
}
