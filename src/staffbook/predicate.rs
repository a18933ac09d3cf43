//! # Predicates
//!
//! Pure boolean tests over an [`Employee`], used to narrow the displayed list
//! without deleting anything. Predicates are plain data, so the active one is
//! persisted alongside the records and survives between invocations.
//!
//! A field filter is a `(field, comparison, threshold)` triple. The comparison
//! carries three explicit flags (less, equal, greater); a record matches when
//! any flag that is set is satisfied.

use crate::model::Employee;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Operator symbols accepted by `filter`, in canonical form.
pub const COMPARISON_SYMBOLS: [&str; 5] = ["<", "<=", "=", ">=", ">"];

/// Which relational outcomes a filter accepts. Never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FlagsRepr", into = "FlagsRepr")]
pub struct ComparisonFlags {
    less: bool,
    equal: bool,
    greater: bool,
}

#[derive(Serialize, Deserialize)]
struct FlagsRepr {
    less: bool,
    equal: bool,
    greater: bool,
}

impl TryFrom<FlagsRepr> for ComparisonFlags {
    type Error = String;

    fn try_from(repr: FlagsRepr) -> Result<Self, Self::Error> {
        ComparisonFlags::new(repr.less, repr.equal, repr.greater)
            .ok_or_else(|| "comparison must allow at least one outcome".to_string())
    }
}

impl From<ComparisonFlags> for FlagsRepr {
    fn from(flags: ComparisonFlags) -> Self {
        Self {
            less: flags.less,
            equal: flags.equal,
            greater: flags.greater,
        }
    }
}

impl ComparisonFlags {
    /// Returns `None` when no flag is set.
    pub fn new(less: bool, equal: bool, greater: bool) -> Option<Self> {
        (less || equal || greater).then_some(Self {
            less,
            equal,
            greater,
        })
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Self::new(true, false, false),
            "<=" => Self::new(true, true, false),
            "=" => Self::new(false, true, false),
            ">=" => Self::new(false, true, true),
            ">" => Self::new(false, false, true),
            _ => None,
        }
    }

    /// Canonical symbol for these flags, if the combination has one.
    ///
    /// `less + greater` and `less + equal + greater` decode from no symbol.
    pub fn symbol(&self) -> Option<&'static str> {
        match (self.less, self.equal, self.greater) {
            (true, false, false) => Some("<"),
            (true, true, false) => Some("<="),
            (false, true, false) => Some("="),
            (false, true, true) => Some(">="),
            (false, false, true) => Some(">"),
            _ => None,
        }
    }

    /// Logical OR across the satisfied comparisons.
    pub fn accepts(&self, value: u64, threshold: u64) -> bool {
        match value.cmp(&threshold) {
            Ordering::Less => self.less,
            Ordering::Equal => self.equal,
            Ordering::Greater => self.greater,
        }
    }
}

impl fmt::Display for ComparisonFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => f.write_str(symbol),
            None => {
                let parts: Vec<&str> = [(self.less, "<"), (self.equal, "="), (self.greater, ">")]
                    .iter()
                    .filter(|(set, _)| *set)
                    .map(|(_, s)| *s)
                    .collect();
                f.write_str(&parts.join("|"))
            }
        }
    }
}

/// Numeric employee field that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Payroll,
    LeaveCount,
}

impl FilterField {
    pub const ALL: [FilterField; 2] = [FilterField::Payroll, FilterField::LeaveCount];

    pub fn keyword(&self) -> &'static str {
        match self {
            FilterField::Payroll => "payroll",
            FilterField::LeaveCount => "leaves",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.keyword() == keyword)
    }

    fn read(&self, employee: &Employee) -> u64 {
        match self {
            FilterField::Payroll => employee.payroll,
            FilterField::LeaveCount => employee.leave_count,
        }
    }
}

/// A `(field, comparison, threshold)` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub field: FilterField,
    pub comparison: ComparisonFlags,
    pub threshold: u64,
}

impl FieldFilter {
    pub fn new(field: FilterField, comparison: ComparisonFlags, threshold: u64) -> Self {
        Self {
            field,
            comparison,
            threshold,
        }
    }

    pub fn by_payroll(threshold: u64, comparison: ComparisonFlags) -> Self {
        Self::new(FilterField::Payroll, comparison, threshold)
    }

    pub fn by_leave_count(threshold: u64, comparison: ComparisonFlags) -> Self {
        Self::new(FilterField::LeaveCount, comparison, threshold)
    }

    pub fn test(&self, employee: &Employee) -> bool {
        self.comparison
            .accepts(self.field.read(employee), self.threshold)
    }
}

impl fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.field.keyword(),
            self.comparison,
            self.threshold
        )
    }
}

/// The display predicate applied to the record list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmployeePredicate {
    #[default]
    ShowAll,
    /// Matches when any keyword equals a whole word of the name, ignoring case.
    NameContains { keywords: Vec<String> },
    Field(FieldFilter),
}

impl EmployeePredicate {
    pub fn test(&self, employee: &Employee) -> bool {
        match self {
            EmployeePredicate::ShowAll => true,
            EmployeePredicate::NameContains { keywords } => {
                let words: Vec<String> = employee
                    .name
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .collect();
                keywords
                    .iter()
                    .any(|k| words.iter().any(|w| *w == k.to_lowercase()))
            }
            EmployeePredicate::Field(filter) => filter.test(employee),
        }
    }
}

impl From<FieldFilter> for EmployeePredicate {
    fn from(filter: FieldFilter) -> Self {
        EmployeePredicate::Field(filter)
    }
}
