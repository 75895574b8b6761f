//! Cronex CLI library.
//!
//! Thin display layer over `cronex-expr`: command implementations, colored
//! human output, and machine-readable JSON diagnostics.

pub mod commands;
