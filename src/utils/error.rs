use crate::domain::model::Field;
use serde::Serialize;
use thiserror::Error;

/// Broad category of a [`DepositError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidValue,
    ParseError,
    DuplicateUnit,
    InvalidState,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DepositError {
    #[error("{0}")]
    InvalidValue(String),

    #[error("{0}")]
    ParseError(String),

    #[error("multiple fields of the same interval detected")]
    DuplicateUnit,

    #[error("{0}")]
    InvalidState(String),
}

impl DepositError {
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidValue(_) => ErrorKind::InvalidValue,
            Self::ParseError(_) => ErrorKind::ParseError,
            Self::DuplicateUnit => ErrorKind::DuplicateUnit,
            Self::InvalidState(_) => ErrorKind::InvalidState,
        }
    }
}

/// A [`DepositError`] tagged with the input field it came from.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("failed to validate {field} field: {source}")]
pub struct ValidationError {
    pub field: Field,
    pub source: DepositError,
}

impl ValidationError {
    pub fn new(field: Field, source: DepositError) -> Self {
        Self { field, source }
    }

    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(
        "failed to validate input values - received the following errors:\n{}",
        join_lines(.0)
    )]
    Validation(Vec<ValidationError>),

    #[error("final balance calculation failed: {0}")]
    Calculation(DepositError),

    #[error("Configuration error: {field}: {message}")]
    Config { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

impl AppError {
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 1,
            Self::Calculation(_) => 2,
            Self::Config { .. } | Self::Io(_) | Self::Serialization(_) | Self::Format(_) => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Validation(_) => {
                "Check the flags, e.g. --start-deposit 10000 --interest-rate 1.1 \
                 --term-length \"3 years\" --interest-paid monthly"
            }
            Self::Calculation(_) => "Re-run with --verbose and report the inputs used",
            Self::Config { .. } => "Fix the configuration file or the overriding flag",
            Self::Io(_) => "Make sure the configuration file exists and is readable",
            Self::Serialization(_) => "Try the text output format instead",
            Self::Format(_) => "Re-run with --verbose and report the inputs used",
        }
    }
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, AppError>;
