//! figo Parser
//!
//! Typed schema for the design tool's file and variables responses, plus the
//! JSON entry points that build it. Missing optional fields are filled in by
//! per-field default rules during deserialization, so downstream code never
//! sees a partially populated document.
//!
//! # Example
//!
//! ```
//! let file = figo_parser::parse_document(r#"{"document": {"type": "DOCUMENT"}}"#).unwrap();
//! assert!(file.document.visible);
//! ```

pub mod parser;
pub mod schema;
pub mod variables;

pub use parser::{parse_document, parse_variables};
pub use schema::{File, Node, NodeKind};
pub use variables::{Variable, VariableCollection, VariableValue, Variables};

/// Parse error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
