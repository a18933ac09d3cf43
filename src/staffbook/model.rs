use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Stable, user-facing identifier of an employee. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u32);

impl EmployeeId {
    pub const FIRST: EmployeeId = EmployeeId(1);

    /// Returns `None` for zero, which is never a valid identifier.
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub payroll: u64,
    pub leave_count: u64,
    #[serde(default)]
    pub picture: Option<PathBuf>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn new(id: EmployeeId, name: String, payroll: u64, leave_count: u64) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            payroll,
            leave_count,
            picture: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive identity check used to reject duplicates.
    pub fn is_same_employee(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let picture = self
            .picture
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "none".to_string());
        write!(
            f,
            "#{} {}; Payroll: {}; Leaves: {}; Picture: {}",
            self.id, self.name, self.payroll, self.leave_count, picture
        )
    }
}
