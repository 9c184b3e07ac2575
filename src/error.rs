//! The error taxonomy shared by every demonstration, and the one-line
//! report each scenario produces from it.

use std::fmt;
use std::io;

use thiserror::Error;

/// Every failure a scenario knows how to classify, plus `Io` for console
/// plumbing failures that no scenario claims.
///
/// Classified variants are caught inside the scenario that produced them and
/// turned into a [`Report`]; `Io` is the one kind that crosses scenario and
/// runner boundaries.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    ResourceNotFound(String),

    #[error("{0}")]
    UnexpectedEndOfInput(String),

    #[error("{0}")]
    ConnectionFailure(String),

    #[error("no registered type named '{0}'")]
    TypeResolutionFailure(String),

    #[error("attempt to divide {numerator} by zero")]
    DivisionByZero { numerator: i64 },

    #[error("{0}")]
    NullReferenceAccess(String),

    #[error("index {index} out of bounds for buffer of length {len}")]
    OutOfBoundsAccess { index: i64, len: usize },

    #[error("{from} value cannot be cast to {to}")]
    InvalidTypeCast {
        from: &'static str,
        to: &'static str,
    },

    #[error("{0}")]
    InterruptedWait(String),

    #[error("{0}")]
    MalformedNumericInput(String),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl ScenarioError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Stable prefix used when the error is reported on the console.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Validation",
            Self::ResourceNotFound(_) => "ResourceNotFound",
            Self::UnexpectedEndOfInput(_) => "UnexpectedEndOfInput",
            Self::ConnectionFailure(_) => "ConnectionFailure",
            Self::TypeResolutionFailure(_) => "TypeResolutionFailure",
            Self::DivisionByZero { .. } => "DivisionByZero",
            Self::NullReferenceAccess(_) => "NullReferenceAccess",
            Self::OutOfBoundsAccess { .. } => "OutOfBoundsAccess",
            Self::InvalidTypeCast { .. } => "InvalidTypeCast",
            Self::InterruptedWait(_) => "InterruptedWait",
            Self::MalformedNumericInput(_) => "MalformedNumericInput",
            Self::Io(_) => "Io",
        }
    }
}

/// The single line of console output a scenario yields.
#[derive(Debug)]
pub enum Report {
    /// Non-failing path: a plain informational line.
    Info(String),
    /// A failure the scenario caught and classified.
    Caught(ScenarioError),
}

impl Report {
    pub fn info(line: impl Into<String>) -> Self {
        Self::Info(line.into())
    }

    pub fn caught(error: ScenarioError) -> Self {
        Self::Caught(error)
    }

    pub fn is_caught(&self) -> bool {
        matches!(self, Self::Caught(_))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Info(line) => write!(f, "{line}"),
            Report::Caught(ScenarioError::Validation(message)) => {
                write!(f, "Validation Error: {message}")
            }
            Report::Caught(error) => write!(f, "{} caught: {}", error.label(), error),
        }
    }
}
