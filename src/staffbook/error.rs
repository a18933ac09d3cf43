use crate::model::EmployeeId;
use thiserror::Error;

/// Failures detected while turning command text into a [`crate::commands::Command`].
///
/// Parsing never touches the store, so none of these can leave partial state behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error("Invalid number: {0} (must be a non-negative integer)")]
    InvalidNumber(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl ParseError {
    pub fn invalid_format(usage: &'static str) -> Self {
        Self::InvalidFormat { usage }
    }
}

/// Failures raised while executing a command against the model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("The employee ID provided is invalid: {0}")]
    InvalidIndexOrId(EmployeeId),

    #[error("Failed to set picture.")]
    UserCancelled,

    #[error("I/O error occurred.")]
    IoFailure,

    #[error("This employee already exists in the address book: {0}")]
    DuplicateEmployee(String),

    #[error("Unsupported picture file: {0} (expected JPG, JPEG, or PNG)")]
    UnsupportedPicture(String),

    #[error("Employee name cannot be used as a picture file name: {0}")]
    UnsafePictureName(String),
}

#[derive(Error, Debug)]
pub enum StaffError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Command(#[from] CommandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StaffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_failure_hides_low_level_detail() {
        let err: StaffError = CommandError::IoFailure.into();
        assert_eq!(err.to_string(), "I/O error occurred.");
    }

    #[test]
    fn invalid_format_carries_usage() {
        let err = ParseError::invalid_format("filter: usage");
        assert!(err.to_string().contains("filter: usage"));
    }
}
