//! Cronex expression library.
//!
//! This crate parses five-field cron schedule expressions
//! (`minute hour day-of-month month day-of-week command`), validates each
//! time field against its numeric domain, expands each field into the
//! concrete set of matching values, and renders the result as an aligned
//! tabular report.
//!
//! It is a pure library: fully synchronous, no console output, no process
//! exit. The CLI binary in `cronex-cli` owns all display and exit-code
//! decisions.
//!
//! # Example
//!
//! ```
//! use cronex_expr::{format_report, parse};
//!
//! let expr = parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
//! assert_eq!(expr.minute, vec![0, 15, 30, 45]);
//!
//! let report = format_report(&expr);
//! assert!(report.starts_with("minute        0 15 30 45"));
//! ```
//!
//! # Modules
//!
//! - [`error`]: the parse/validation error taxonomy
//! - [`field`]: the five fixed field domains
//! - [`grammar`]: the per-part specifier grammar
//! - [`validation`]: field and command validation
//! - [`expand`]: expansion of validated specifiers into value sets
//! - [`parser`]: whole-expression orchestration
//! - [`report`]: tabular report rendering

pub mod error;
pub mod expand;
pub mod field;
pub mod grammar;
pub mod parser;
pub mod report;
pub mod validation;

// Re-export commonly used items at the crate root
pub use error::ParseError;
pub use expand::{expand_field, MAX_EXPANDED_VALUES};
pub use field::FieldSpec;
pub use grammar::{Specifier, StepBase};
pub use parser::{parse, ParsedExpression};
pub use report::format_report;
pub use validation::{validate_command, validate_field};
