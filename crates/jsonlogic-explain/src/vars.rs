//! Variable references: `{"var": path}` and `{"var": [path, default]}`.

use crate::format::{format_value, plain_text};
use serde_json::Value;
use std::collections::HashMap;

/// Resolves variable paths to display names.
pub struct VarNames<'a> {
    names: &'a HashMap<String, String>,
}

impl<'a> VarNames<'a> {
    pub fn new(names: &'a HashMap<String, String>) -> Self {
        VarNames { names }
    }

    /// Display name for a raw path.
    ///
    /// A configured name is used verbatim. Otherwise the path is lower-cased;
    /// `null` and the empty string render as `"null"`.
    pub fn display_name(&self, path: &Value) -> String {
        let raw = match path {
            Value::Null => return "null".to_string(),
            Value::String(s) if s.is_empty() => return "null".to_string(),
            other => plain_text(other),
        };
        match self.names.get(&raw) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => raw.to_lowercase(),
        }
    }

    /// Renders the value stored under a `var` key.
    pub fn render(&self, path: &Value) -> String {
        match path {
            Value::Array(items) if items.len() == 2 => format!(
                "{} with default value of {}",
                self.display_name(&items[0]),
                format_value(&items[1])
            ),
            Value::Array(items) if items.len() == 1 => self.display_name(&items[0]),
            other => self.display_name(other),
        }
    }
}
