//! # Command Parsing
//!
//! Turns one line of command text into a typed [`Command`]. Parsing is total
//! and side-effect free: every argument is validated here, so a [`Command`] that
//! reaches the executor always carries well-formed values.
//!
//! ```text
//! add n/NAME p/PAYROLL [l/LEAVES]
//! edit ID [n/NAME] [p/PAYROLL] [l/LEAVES]
//! delete ID
//! find KEYWORD [MORE_KEYWORDS]...
//! filter payroll|leaves <|<=|=|>=|> AMOUNT
//! setpicture ID
//! list | clear | help | exit
//! ```

pub mod args;

use crate::commands::{
    add, clear, delete, edit, filter, find, help, list, set_picture, Command, EmployeeChanges,
    NewEmployee,
};
use crate::error::ParseError;
use args::{parse_filter_args, parse_non_negative, parse_single_id, Prefix, PrefixedArgs};

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        add::COMMAND_WORD => parse_add(rest),
        edit::COMMAND_WORD => parse_edit(rest),
        delete::COMMAND_WORD => parse_single_id(rest, delete::USAGE).map(Command::Delete),
        find::COMMAND_WORD => parse_find(rest),
        filter::COMMAND_WORD => {
            parse_filter_args(rest, filter::USAGE).map(|a| Command::Filter(a.into()))
        }
        set_picture::COMMAND_WORD => {
            parse_single_id(rest, set_picture::USAGE).map(Command::SetPicture)
        }
        list::COMMAND_WORD => Ok(Command::List),
        clear::COMMAND_WORD => Ok(Command::Clear),
        help::COMMAND_WORD => Ok(Command::Help),
        help::EXIT_WORD => Ok(Command::Exit),
        "" => Err(ParseError::invalid_format(help::USAGE)),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Names are letters, digits and spaces, starting with a letter or digit.
///
/// The name doubles as the stored picture's file name, so nothing that could
/// form a path separator or a `..` component gets through.
fn parse_name(raw: &str, usage: &'static str) -> Result<String, ParseError> {
    let name = raw.trim();
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(char::is_alphanumeric)
        && chars.all(|c| c.is_alphanumeric() || c == ' ');
    if !valid {
        return Err(ParseError::invalid_format(usage));
    }
    Ok(name.to_string())
}

fn parse_add(rest: &str) -> Result<Command, ParseError> {
    let args = PrefixedArgs::parse(rest);
    if !args.preamble.is_empty() {
        return Err(ParseError::invalid_format(add::USAGE));
    }

    let (Some(name), Some(payroll)) = (args.value(Prefix::Name), args.value(Prefix::Payroll))
    else {
        return Err(ParseError::invalid_format(add::USAGE));
    };

    let leave_count = match args.value(Prefix::Leaves) {
        Some(raw) => parse_non_negative(raw)?,
        None => 0,
    };

    Ok(Command::Add(NewEmployee {
        name: parse_name(name, add::USAGE)?,
        payroll: parse_non_negative(payroll)?,
        leave_count,
    }))
}

fn parse_edit(rest: &str) -> Result<Command, ParseError> {
    let args = PrefixedArgs::parse(rest);
    let [id] = args.preamble.as_slice() else {
        return Err(ParseError::invalid_format(edit::USAGE));
    };
    let id = args::parse_employee_id(id)?;

    if args.is_empty() {
        return Err(ParseError::invalid_format(edit::USAGE));
    }

    let changes = EmployeeChanges {
        name: args
            .value(Prefix::Name)
            .map(|n| parse_name(n, edit::USAGE))
            .transpose()?,
        payroll: args
            .value(Prefix::Payroll)
            .map(parse_non_negative)
            .transpose()?,
        leave_count: args
            .value(Prefix::Leaves)
            .map(parse_non_negative)
            .transpose()?,
    };

    Ok(Command::Edit { id, changes })
}

fn parse_find(rest: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args::tokenize(rest)
        .into_iter()
        .map(str::to_string)
        .collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(find::USAGE));
    }
    Ok(Command::Find(keywords))
}
