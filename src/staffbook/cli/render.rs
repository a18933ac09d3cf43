//! # Rendering
//!
//! Layout math stays in Rust because it needs Unicode-aware width handling.
//! Everything returns `String` so output can be asserted on without a terminal;
//! `print_*` wrappers do the actual writing.

use colored::*;
use staffbook::api::{CmdMessage, MessageLevel};
use staffbook::commands::CmdResult;
use staffbook::error::StaffError;
use staffbook::model::Employee;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ID_WIDTH: usize = 5;
pub const NAME_WIDTH: usize = 28;
pub const NUMBER_WIDTH: usize = 10;
pub const EMPTY_LIST: &str = "No employees found.";

pub fn print_result(result: &CmdResult) {
    if result.is_listing {
        print!("{}", render_employee_table(&result.listed_employees));
    }
    print!("{}", render_messages(&result.messages));
}

pub fn print_error(error: &StaffError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", styled));
    }
    out
}

pub fn render_employee_table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    let mut out = String::new();
    let header = format!(
        "{:>id$}  {}  {:>num$}  {:>num$}  {}",
        "ID",
        pad_to_width("Name", NAME_WIDTH),
        "Payroll",
        "Leaves",
        "Picture",
        id = ID_WIDTH,
        num = NUMBER_WIDTH,
    );
    out.push_str(&format!("{}\n", header.bold()));

    for employee in employees {
        let name = pad_to_width(&truncate_to_width(&employee.name, NAME_WIDTH), NAME_WIDTH);
        let picture = match &employee.picture {
            Some(path) => path.display().to_string().normal(),
            None => "-".dimmed(),
        };
        out.push_str(&format!(
            "{:>id$}  {}  {:>num$}  {:>num$}  {}\n",
            employee.id.to_string().yellow(),
            name,
            employee.payroll,
            employee.leave_count,
            picture,
            id = ID_WIDTH,
            num = NUMBER_WIDTH,
        ));
    }
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffbook::model::EmployeeId;

    fn plain() {
        colored::control::set_override(false);
    }

    fn employee(id: u32, name: &str) -> Employee {
        Employee::new(EmployeeId::new(id).unwrap(), name.to_string(), 3000, 2)
    }

    #[test]
    fn empty_table_says_so() {
        plain();
        assert_eq!(render_employee_table(&[]), "No employees found.\n");
    }

    #[test]
    fn table_has_header_and_rows() {
        plain();
        let out = render_employee_table(&[employee(1, "Alex Yeoh"), employee(12, "Bernice Yu")]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Payroll"));
        assert!(lines[1].contains("Alex Yeoh"));
        assert!(lines[2].trim_start().starts_with("12"));
        assert_eq!(lines[1].width(), lines[2].width());
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "Wolfeschlegelsteinhausenbergerdorff Senior";
        let out = truncate_to_width(long, 10);
        assert_eq!(out.width(), 10);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(pad_to_width("李", 4), "李  ");
    }

    #[test]
    fn messages_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::success("done"), CmdMessage::info("note")]);
        assert_eq!(out, "done\nnote\n");
    }
}
