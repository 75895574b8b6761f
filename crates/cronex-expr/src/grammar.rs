//! Specifier grammar for individual cron field parts.
//!
//! A raw field is a comma-separated list of parts; each part parses once into
//! a [`Specifier`] that both validation and expansion consume, so the string
//! is never re-inspected downstream.

use crate::error::ParseError;
use crate::field::FieldSpec;

/// One parsed part of a cron field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specifier {
    /// `*` — every value in the field's domain.
    Wildcard,
    /// A single integer, e.g. `5`.
    Value(u32),
    /// An inclusive range, e.g. `1-5`.
    Range(u32, u32),
    /// A stepped specifier, e.g. `*/15`, `5/15`, or `1-30/5`.
    Stepped(StepBase, u32),
}

/// The base of a stepped specifier, to the left of the `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepBase {
    /// `*` — step over the whole domain.
    Every,
    /// A bare integer — step from it up to the field's max.
    From(u32),
    /// An explicit `a-b` range.
    Between(u32, u32),
}

impl Specifier {
    /// Parses one comma-part of `field`. Syntax only: integers must parse
    /// strictly and ranges must have exactly two endpoints, but domain bounds
    /// are checked later by validation.
    pub fn parse(part: &str, field: &FieldSpec) -> Result<Specifier, ParseError> {
        if part == "*" {
            return Ok(Specifier::Wildcard);
        }

        if let Some((base, step)) = part.split_once('/') {
            let step: u32 = step.parse().map_err(|_| ParseError::InvalidStepValue {
                field: field.name,
                token: part.to_string(),
            })?;

            let base = if base == "*" {
                StepBase::Every
            } else if base.contains('-') {
                let (start, end) = parse_range(base, field)?;
                StepBase::Between(start, end)
            } else {
                let start: u32 = base.parse().map_err(|_| ParseError::InvalidBaseValue {
                    field: field.name,
                    token: part.to_string(),
                })?;
                StepBase::From(start)
            };

            return Ok(Specifier::Stepped(base, step));
        }

        if part.contains('-') {
            let (start, end) = parse_range(part, field)?;
            return Ok(Specifier::Range(start, end));
        }

        let value: u32 = part.parse().map_err(|_| ParseError::InvalidValue {
            field: field.name,
            token: part.to_string(),
            min: field.min,
            max: field.max,
        })?;
        Ok(Specifier::Value(value))
    }
}

/// Splits `a-b` into its endpoints. Errors carry the range substring, not the
/// enclosing part, so a bad base inside `15-10/2` reports `15-10`.
fn parse_range(range: &str, field: &FieldSpec) -> Result<(u32, u32), ParseError> {
    let pieces: Vec<&str> = range.split('-').collect();
    if pieces.len() != 2 {
        return Err(ParseError::InvalidRangeFormat {
            field: field.name,
            token: range.to_string(),
        });
    }

    let bad_values = || ParseError::InvalidRangeValues {
        field: field.name,
        token: range.to_string(),
    };
    let start: u32 = pieces[0].parse().map_err(|_| bad_values())?;
    let end: u32 = pieces[1].parse().map_err(|_| bad_values())?;
    Ok((start, end))
}
