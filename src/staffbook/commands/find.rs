use crate::book::Model;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::predicate::EmployeePredicate;

use super::helpers::{listed_employees, listed_overview};

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds all employees whose names contain any of the given keywords \
    (case-insensitive, whole words).\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find alex bernice";

pub fn run(model: &mut Model, keywords: Vec<String>) -> Result<CmdResult> {
    model.update_filter(EmployeePredicate::NameContains { keywords });
    let listed = listed_employees(model);
    let overview = listed_overview(listed.len());
    Ok(CmdResult::default()
        .with_listed_employees(listed)
        .with_message(CmdMessage::info(overview)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn matches_any_keyword() {
        let mut model = StoreFixture::new().with_staff().model();
        let result = run(&mut model, vec!["alex".into(), "YU".into()]).unwrap();

        let names: Vec<_> = result.listed_employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alex Yeoh", "Bernice Yu"]);
        assert_eq!(result.messages[0].content, "2 employees listed!");
    }

    #[test]
    fn no_match_lists_nothing() {
        let mut model = StoreFixture::new().with_staff().model();
        let result = run(&mut model, vec!["zed".into()]).unwrap();
        assert!(result.listed_employees.is_empty());
        assert_eq!(model.book.employees().len(), 3);
    }
}
