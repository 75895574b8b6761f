//! Whole-expression parsing: tokenize, validate, expand.

use serde::Serialize;

use crate::error::ParseError;
use crate::expand::expand_field;
use crate::field::FieldSpec;
use crate::validation::{validate_command, validate_field};

/// A fully validated and expanded cron expression.
///
/// Transient: built per parse, handed to the formatter, never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedExpression {
    pub minute: Vec<u32>,
    pub hour: Vec<u32>,
    pub day_of_month: Vec<u32>,
    pub month: Vec<u32>,
    pub day_of_week: Vec<u32>,
    pub command: String,
}

impl ParsedExpression {
    /// The five value rows paired with their display names, in report order.
    pub fn rows(&self) -> [(&'static str, &[u32]); 5] {
        [
            (FieldSpec::MINUTE.name, &self.minute),
            (FieldSpec::HOUR.name, &self.hour),
            (FieldSpec::DAY_OF_MONTH.name, &self.day_of_month),
            (FieldSpec::MONTH.name, &self.month),
            (FieldSpec::DAY_OF_WEEK.name, &self.day_of_week),
        ]
    }
}

/// Parses a full cron line: five time fields followed by a command.
///
/// All-or-nothing: the first invalid field aborts the parse and nothing is
/// expanded past the gate. The command may contain spaces; its tokens are
/// rejoined with single ones.
pub fn parse(line: &str) -> Result<ParsedExpression, ParseError> {
    if line.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 6 {
        return Err(ParseError::FieldCountMismatch { got: tokens.len() });
    }

    let raw_fields = &tokens[..5];
    let command = tokens[5..].join(" ");

    // Validate everything before expanding anything.
    let mut validated = Vec::with_capacity(5);
    for (raw, field) in raw_fields.iter().zip(FieldSpec::ALL.iter()) {
        validated.push(validate_field(raw, field)?);
    }
    validate_command(&command)?;

    // Positions match FieldSpec::ALL.
    let expand_at = |i: usize| expand_field(&validated[i], &FieldSpec::ALL[i]);
    Ok(ParsedExpression {
        minute: expand_at(0),
        hour: expand_at(1),
        day_of_month: expand_at(2),
        month: expand_at(3),
        day_of_week: expand_at(4),
        command,
    })
}
