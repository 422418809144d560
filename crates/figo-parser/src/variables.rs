//! Variable registry schema.
//!
//! Variables hold one raw value per mode. A mode value is either a scalar, a
//! literal colour, or an alias pointing at another variable; the shape is only
//! known after inspecting the JSON, so structured values keep both readings
//! available and let the resolver decide.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::schema::{null_as_default, Color};

/// Response of the local variables endpoint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Variables {
    pub status: f64,
    pub error: bool,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    #[serde(deserialize_with = "null_as_default")]
    pub variables: BTreeMap<String, Variable>,
    #[serde(deserialize_with = "null_as_default")]
    pub variable_collections: BTreeMap<String, VariableCollection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolvedType {
    Boolean,
    #[default]
    Float,
    String,
    Color,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub variable_collection_id: String,
    pub resolved_type: ResolvedType,
    #[serde(deserialize_with = "null_as_default")]
    pub values_by_mode: BTreeMap<String, VariableValue>,
    pub remote: bool,
    pub description: String,
    pub hidden_from_publishing: bool,
    pub deleted_but_referenced: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariableCollection {
    pub id: String,
    pub name: String,
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub modes: Vec<Mode>,
    pub default_mode_id: String,
    pub remote: bool,
    pub hidden_from_publishing: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub variable_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mode {
    pub mode_id: String,
    pub name: String,
}

/// A reference to another variable in place of a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariableAlias {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// Raw value of a variable for one mode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    Structured(StructuredValue),
    Other(serde_json::Value),
}

/// An object-shaped mode value: an alias, a colour, or (rarely) both.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct StructuredValue {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub r: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
    pub a: Option<f64>,
}

impl StructuredValue {
    pub fn alias(&self) -> Option<VariableAlias> {
        match (&self.kind, &self.id) {
            (Some(kind), Some(id)) if !id.is_empty() => Some(VariableAlias {
                kind: kind.clone(),
                id: id.clone(),
            }),
            _ => None,
        }
    }

    pub fn color(&self) -> Option<Color> {
        Some(Color::new(self.r?, self.g?, self.b?, self.a.unwrap_or(1.0)))
    }
}

impl Variables {
    pub fn variable(&self, id: &str) -> Option<&Variable> {
        self.meta.variables.get(id)
    }

    pub fn collection(&self, id: &str) -> Option<&VariableCollection> {
        self.meta.variable_collections.get(id)
    }
}
