//! JSON entry points.
//!
//! Deserializes the file and variables responses into the typed schema. All
//! defaulting happens through the per-field rules on the schema types; there
//! is no separate pass over the parsed structures.

use crate::schema::File;
use crate::variables::Variables;
use crate::ParseError;

/// Parse a design file response.
pub fn parse_document(source: &str) -> Result<File, ParseError> {
    Ok(serde_json::from_str(source)?)
}

/// Parse a local variables response.
pub fn parse_variables(source: &str) -> Result<Variables, ParseError> {
    Ok(serde_json::from_str(source)?)
}
