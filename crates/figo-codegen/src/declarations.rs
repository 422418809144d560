//! Ordered CSS declaration map.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// CSS property → value, in the order the properties were first set.
///
/// Setting a property again replaces its value in place. Empty values are
/// never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations(IndexMap<String, String>);

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property` unless `value` is empty.
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.0.insert(property.to_string(), value);
        }
    }

    pub fn extend(&mut self, other: Declarations) {
        for (property, value) in other.0 {
            self.0.insert(property, value);
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut declarations = Declarations::new();
        for (property, value) in iter {
            declarations.set(property, value);
        }
        declarations
    }
}

/// Serialized as a list of `[property, value]` pairs so templates see them in
/// insertion order.
impl Serialize for Declarations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for pair in &self.0 {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}
