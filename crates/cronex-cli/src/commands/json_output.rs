//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag so other tools can consume parse
//! results and errors programmatically.

use cronex_expr::{ParseError, ParsedExpression};
use serde::Serialize;

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g. "E004").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl From<&ParseError> for JsonError {
    fn from(err: &ParseError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Top-level document emitted by `cronex --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    /// Whether the expression parsed successfully.
    pub ok: bool,
    /// The expanded expression, when `ok` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<ParsedExpression>,
    /// The failure, when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl ParseOutput {
    pub fn success(expression: ParsedExpression) -> Self {
        Self {
            ok: true,
            expression: Some(expression),
            error: None,
        }
    }

    pub fn failure(err: &ParseError) -> Self {
        Self {
            ok: false,
            expression: None,
            error: Some(JsonError::from(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cronex_expr::parse;

    #[test]
    fn test_success_document_shape() {
        let expr = parse("5-5 12 15 6 * /command").unwrap();
        let doc = serde_json::to_value(ParseOutput::success(expr)).unwrap();
        assert_eq!(doc["ok"], true);
        assert_eq!(doc["expression"]["minute"], serde_json::json!([5]));
        assert!(doc.get("error").is_none());
    }

    #[test]
    fn test_failure_document_shape() {
        let err = parse("60 0 1 * * /bin/true").unwrap_err();
        let doc = serde_json::to_value(ParseOutput::failure(&err)).unwrap();
        assert_eq!(doc["ok"], false);
        assert_eq!(doc["error"]["code"], "E010");
        assert!(doc["error"]["message"]
            .as_str()
            .unwrap()
            .contains("minute"));
        assert!(doc.get("expression").is_none());
    }
}
