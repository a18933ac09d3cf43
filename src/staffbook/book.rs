//! # Record Store
//!
//! [`AddressBook`] owns every [`Employee`] for the life of the process. All
//! mutations go through [`AddressBook::mutate`], which bumps the version stamp;
//! the API layer compares versions to decide whether anything must be persisted.
//!
//! [`Model`] pairs the book with the active display predicate. Commands only ever
//! see records through [`Model::filtered_employees`], so ids that are hidden by a
//! filter cannot be acted upon.

use crate::model::{Employee, EmployeeId};
use crate::predicate::EmployeePredicate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    version: u64,
    employees: Vec<Employee>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn has_employee_named(&self, name: &str) -> bool {
        self.employees.iter().any(|e| e.is_same_employee(name))
    }

    pub fn next_id(&self) -> EmployeeId {
        self.employees
            .iter()
            .map(|e| e.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(EmployeeId::FIRST)
    }

    /// The single choke point for changes. Every call counts as one revision.
    pub fn mutate<R>(&mut self, f: impl FnOnce(&mut Vec<Employee>) -> R) -> R {
        let out = f(&mut self.employees);
        self.version += 1;
        out
    }
}

/// The record store plus its current view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub book: AddressBook,
    #[serde(default)]
    filter: EmployeePredicate,
}

impl Model {
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            filter: EmployeePredicate::ShowAll,
        }
    }

    pub fn filter(&self) -> &EmployeePredicate {
        &self.filter
    }

    pub fn update_filter(&mut self, predicate: EmployeePredicate) {
        self.filter = predicate;
    }

    pub fn filtered_employees(&self) -> Vec<&Employee> {
        self.book
            .employees()
            .iter()
            .filter(|e| self.filter.test(e))
            .collect()
    }

    /// Linear scan of the displayed list; ids are unique so the first hit is the only one.
    pub fn find_displayed(&self, id: EmployeeId) -> Option<&Employee> {
        self.filtered_employees().into_iter().find(|e| e.id == id)
    }
}
