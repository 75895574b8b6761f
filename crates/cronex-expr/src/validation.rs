//! Field and command validation.
//!
//! Validation is the gate in front of expansion: a field is only ever
//! expanded from the `Vec<Specifier>` a successful validation returned.

use crate::error::ParseError;
use crate::field::FieldSpec;
use crate::grammar::{Specifier, StepBase};

/// Validates one raw time field against its domain.
///
/// Splits on commas, parses each part (trimmed) into a [`Specifier`], and
/// checks its domain semantics. Stops at the first invalid part.
pub fn validate_field(raw: &str, field: &FieldSpec) -> Result<Vec<Specifier>, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::FieldRequired { field: field.name });
    }

    let mut specifiers = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        let specifier = Specifier::parse(part, field)?;
        check_domain(&specifier, part, field)?;
        specifiers.push(specifier);
    }
    Ok(specifiers)
}

/// Validates the trailing command text: non-empty after trimming, nothing
/// more. Shell syntax is the executor's problem, not ours.
pub fn validate_command(cmd: &str) -> Result<(), ParseError> {
    if cmd.trim().is_empty() {
        return Err(ParseError::EmptyCommand);
    }
    Ok(())
}

/// Domain checks for a parsed specifier. `part` is the original text, used
/// verbatim in error tokens.
fn check_domain(specifier: &Specifier, part: &str, field: &FieldSpec) -> Result<(), ParseError> {
    match *specifier {
        Specifier::Wildcard => Ok(()),
        Specifier::Value(value) => {
            if field.contains(value) {
                Ok(())
            } else {
                Err(ParseError::InvalidValue {
                    field: field.name,
                    token: part.to_string(),
                    min: field.min,
                    max: field.max,
                })
            }
        }
        Specifier::Range(start, end) => check_range(start, end, part, field),
        Specifier::Stepped(ref base, step) => {
            // Step bound is deliberately permissive: any step up to the
            // field max is accepted, even when it can only fire once.
            if step < 1 || step > field.max {
                return Err(ParseError::InvalidStepValue {
                    field: field.name,
                    token: part.to_string(),
                });
            }
            match *base {
                StepBase::Every => Ok(()),
                StepBase::From(start) => {
                    if field.contains(start) {
                        Ok(())
                    } else {
                        Err(ParseError::InvalidBaseValue {
                            field: field.name,
                            token: part.to_string(),
                        })
                    }
                }
                StepBase::Between(start, end) => {
                    check_range(start, end, &format!("{start}-{end}"), field)
                }
            }
        }
    }
}

fn check_range(start: u32, end: u32, token: &str, field: &FieldSpec) -> Result<(), ParseError> {
    if start < field.min || end > field.max {
        return Err(ParseError::RangeOutOfBounds {
            field: field.name,
            token: token.to_string(),
            min: field.min,
            max: field.max,
        });
    }
    if start > end {
        return Err(ParseError::InvalidRangeOrder {
            field: field.name,
            token: token.to_string(),
        });
    }
    Ok(())
}
