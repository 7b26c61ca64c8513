//! Field values and per-field error messages

use super::field::FieldName;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// One value per registration field; every field is always present
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRecord {
    values: [String; 10],
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: FieldName) -> &str {
        &self.values[name.index()]
    }

    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        self.values[name.index()] = value.into();
    }

    /// Values paired with their field, in display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL
            .into_iter()
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn has_empty(&self) -> bool {
        self.values.iter().any(String::is_empty)
    }
}

impl Serialize for FormRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name.as_str(), value)?;
        }
        map.end()
    }
}

/// Current error message per touched field ("" means valid)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    messages: BTreeMap<FieldName, String>,
}

impl ErrorMap {
    /// Message for a field, or `None` if it was never validated
    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.messages.get(&name).map(String::as_str)
    }

    /// Message for a field, treating untouched fields as valid
    pub fn message(&self, name: FieldName) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn set(&mut self, name: FieldName, message: String) {
        self.messages.insert(name, message);
    }

    /// Forget a field's message so it reads as untouched
    pub fn clear(&mut self, name: FieldName) {
        self.messages.remove(&name);
    }

    pub fn has_errors(&self) -> bool {
        self.messages.values().any(|m| !m.is_empty())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
