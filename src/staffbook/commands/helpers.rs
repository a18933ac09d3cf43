use crate::book::Model;
use crate::error::{CommandError, Result};
use crate::model::{Employee, EmployeeId};

/// Looks `id` up in the displayed list, not the whole book.
pub fn displayed_employee(model: &Model, id: EmployeeId) -> Result<Employee> {
    model
        .find_displayed(id)
        .cloned()
        .ok_or_else(|| CommandError::InvalidIndexOrId(id).into())
}

pub fn listed_employees(model: &Model) -> Vec<Employee> {
    model.filtered_employees().into_iter().cloned().collect()
}

/// Replaces the stored record with the same id. No-op if it vanished.
pub fn replace_employee(model: &mut Model, updated: Employee) {
    model.book.mutate(|list| {
        if let Some(slot) = list.iter_mut().find(|e| e.id == updated.id) {
            *slot = updated;
        }
    });
}

pub fn listed_overview(count: usize) -> String {
    match count {
        1 => "1 employee listed!".to_string(),
        n => format!("{} employees listed!", n),
    }
}
