//! Token-level helpers shared by the command parsers.

use crate::error::ParseError;
use crate::model::EmployeeId;
use crate::predicate::{ComparisonFlags, FieldFilter, FilterField};

/// Typed arguments of `filter <field> <operator> <amount>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterArgs {
    pub field: FilterField,
    pub comparison: ComparisonFlags,
    pub amount: u64,
}

impl From<FilterArgs> for FieldFilter {
    fn from(args: FilterArgs) -> Self {
        FieldFilter::new(args.field, args.comparison, args.amount)
    }
}

/// Splits trimmed input on runs of whitespace.
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

/// Parses the three `filter` tokens. Either every token validates or nothing is returned.
pub fn parse_filter_args(raw: &str, usage: &'static str) -> Result<FilterArgs, ParseError> {
    let tokens = tokenize(raw);
    let [field, sign, amount] = tokens.as_slice() else {
        return Err(ParseError::invalid_format(usage));
    };

    Ok(FilterArgs {
        field: parse_sort_parameter(field, usage)?,
        comparison: parse_comparison_sign(sign, usage)?,
        amount: parse_comparison_amount(amount)?,
    })
}

pub fn parse_sort_parameter(token: &str, usage: &'static str) -> Result<FilterField, ParseError> {
    FilterField::from_keyword(token).ok_or_else(|| ParseError::invalid_format(usage))
}

pub fn parse_comparison_sign(
    token: &str,
    usage: &'static str,
) -> Result<ComparisonFlags, ParseError> {
    ComparisonFlags::from_symbol(token).ok_or_else(|| ParseError::invalid_format(usage))
}

pub fn parse_comparison_amount(token: &str) -> Result<u64, ParseError> {
    parse_non_negative(token)
}

pub fn parse_non_negative(token: &str) -> Result<u64, ParseError> {
    let token = token.trim();
    if token.starts_with('-') {
        return Err(ParseError::InvalidNumber(token.to_string()));
    }
    token
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

pub fn parse_employee_id(token: &str) -> Result<EmployeeId, ParseError> {
    let token = token.trim();
    token
        .parse::<u32>()
        .ok()
        .and_then(EmployeeId::new)
        .ok_or_else(|| ParseError::InvalidNumber(token.to_string()))
}

/// Parses a command that takes exactly one employee id.
pub fn parse_single_id(raw: &str, usage: &'static str) -> Result<EmployeeId, ParseError> {
    match tokenize(raw).as_slice() {
        [id] => parse_employee_id(id),
        _ => Err(ParseError::invalid_format(usage)),
    }
}

/// Argument prefixes used by `add` and `edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Name,
    Payroll,
    Leaves,
}

impl Prefix {
    const ALL: [Prefix; 3] = [Prefix::Name, Prefix::Payroll, Prefix::Leaves];

    pub fn tag(&self) -> &'static str {
        match self {
            Prefix::Name => "n/",
            Prefix::Payroll => "p/",
            Prefix::Leaves => "l/",
        }
    }

    fn strip(token: &str) -> Option<(Prefix, &str)> {
        Self::ALL
            .into_iter()
            .find_map(|p| token.strip_prefix(p.tag()).map(|rest| (p, rest)))
    }
}

/// Result of splitting `preamble p/value q/other value` style input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PrefixedArgs {
    pub preamble: Vec<String>,
    values: Vec<(Prefix, String)>,
}

impl PrefixedArgs {
    /// Values may span several tokens; they run until the next prefixed token.
    pub fn parse(raw: &str) -> Self {
        let mut args = PrefixedArgs::default();
        for token in tokenize(raw) {
            if let Some((prefix, rest)) = Prefix::strip(token) {
                args.values.push((prefix, rest.to_string()));
            } else if let Some((_, value)) = args.values.last_mut() {
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(token);
            } else {
                args.preamble.push(token.to_string());
            }
        }
        args
    }

    /// Last occurrence wins.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
