//! Tabular report rendering for parsed expressions.

use std::fmt::Write;

use crate::parser::ParsedExpression;

/// Width of the field-name column. Fixed contract detail.
const NAME_COLUMN_WIDTH: usize = 14;

/// Renders the six-line report: one row per time field in expression order,
/// then the command. Names are left-justified to a 14-character column and
/// values joined with single spaces. No trailing newline.
///
/// Pure and idempotent; callers decide where the text goes.
pub fn format_report(expr: &ParsedExpression) -> String {
    let mut out = String::new();
    for (name, values) in expr.rows() {
        let joined = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{:<width$}{}", name, joined, width = NAME_COLUMN_WIDTH);
    }
    let _ = write!(
        out,
        "{:<width$}{}",
        "command",
        expr.command,
        width = NAME_COLUMN_WIDTH
    );
    out
}
