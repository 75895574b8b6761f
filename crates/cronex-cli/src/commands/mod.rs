//! CLI command implementations

pub mod parse;

mod json_output;
