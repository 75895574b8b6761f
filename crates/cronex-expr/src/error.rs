//! Error types for cron expression parsing and validation.

use thiserror::Error;

/// Failure modes for a single parse attempt.
///
/// Every variant is terminal: the orchestrator surfaces the first error it
/// encounters and halts. Field errors carry the display name of the field and
/// the offending token so the message always identifies both.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// E001: The input line is empty or all whitespace.
    #[error("empty cron expression")]
    EmptyInput,

    /// E002: Fewer than six whitespace-separated tokens.
    #[error("invalid number of fields (expected 6, got {got})")]
    FieldCountMismatch { got: usize },

    /// E003: A time field is empty.
    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    /// E004: A step is not an integer or lies outside `1..=max`.
    #[error("invalid step value in {field}: {token}")]
    InvalidStepValue { field: &'static str, token: String },

    /// E005: A stepped base is not an integer or lies outside the domain.
    #[error("invalid base value in {field}: {token}")]
    InvalidBaseValue { field: &'static str, token: String },

    /// E006: A range does not split into exactly two endpoints.
    #[error("invalid range format in {field}: {token}")]
    InvalidRangeFormat { field: &'static str, token: String },

    /// E007: A range endpoint is not an integer.
    #[error("invalid range values in {field}: {token}")]
    InvalidRangeValues { field: &'static str, token: String },

    /// E008: A range extends outside the field's domain.
    #[error("range out of bounds in {field}: {token} (must be {min}-{max})")]
    RangeOutOfBounds {
        field: &'static str,
        token: String,
        min: u32,
        max: u32,
    },

    /// E009: A range's start exceeds its end.
    #[error("invalid range in {field}: {token} (start > end)")]
    InvalidRangeOrder { field: &'static str, token: String },

    /// E010: A bare value is not an integer or lies outside the domain.
    #[error("invalid value in {field}: {token} (must be {min}-{max})")]
    InvalidValue {
        field: &'static str,
        token: String,
        min: u32,
        max: u32,
    },

    /// E011: The command text is empty after trimming.
    #[error("command is required")]
    EmptyCommand,
}

impl ParseError {
    /// Returns the stable error code string (e.g. "E001").
    ///
    /// Codes are part of the machine-readable CLI output and can be used for
    /// programmatic error handling.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "E001",
            ParseError::FieldCountMismatch { .. } => "E002",
            ParseError::FieldRequired { .. } => "E003",
            ParseError::InvalidStepValue { .. } => "E004",
            ParseError::InvalidBaseValue { .. } => "E005",
            ParseError::InvalidRangeFormat { .. } => "E006",
            ParseError::InvalidRangeValues { .. } => "E007",
            ParseError::RangeOutOfBounds { .. } => "E008",
            ParseError::InvalidRangeOrder { .. } => "E009",
            ParseError::InvalidValue { .. } => "E010",
            ParseError::EmptyCommand => "E011",
        }
    }
}
