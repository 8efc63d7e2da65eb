//! Explainer configuration.

use crate::error::ExplainError;
use crate::format::{capitalize_first, capitalize_words};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Default nesting limit before sub-expressions are truncated.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Letter case applied to the finished sentence.
///
/// The case change runs over the whole rendered text, so quoted literals and
/// configured variable display names are re-cased too: under `Title`,
/// `"adult"` becomes `"Adult"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputCase {
    /// Leave the text as rendered.
    #[default]
    Preserve,
    /// Upper-case the first character.
    Sentence,
    /// Upper-case the first character of every word.
    Title,
}

impl OutputCase {
    pub fn apply(self, text: String) -> String {
        match self {
            OutputCase::Preserve => text,
            OutputCase::Sentence => capitalize_first(&text),
            OutputCase::Title => capitalize_words(&text),
        }
    }
}

/// Options captured when an [`crate::Explainer`] is built. Immutable afterwards.
///
/// Field names deserialize in camelCase (`variableNames`, `operatorNames`,
/// `includeJsonLogic`, `data`, `outputCase`, `maxDepth`); every field is
/// optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExplainerOptions {
    /// Raw variable path -> display name. Used verbatim; paths without an
    /// entry are lower-cased.
    pub variable_names: HashMap<String, String>,
    /// Operator token -> description, used for tokens that have no registered
    /// handler.
    pub operator_names: HashMap<String, String>,
    /// Append the compact JSON of the input to the top-level sentence.
    pub include_json_logic: bool,
    /// Data context handed to render functions.
    pub data: Value,
    pub output_case: OutputCase,
    pub max_depth: usize,
}

impl Default for ExplainerOptions {
    fn default() -> Self {
        ExplainerOptions {
            variable_names: HashMap::new(),
            operator_names: HashMap::new(),
            include_json_logic: false,
            data: Value::Object(Default::default()),
            output_case: OutputCase::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExplainerOptions {
    /// Parses options from a JSON object.
    pub fn from_json(text: &str) -> Result<Self, ExplainError> {
        serde_json::from_str(text).map_err(|e| ExplainError::InvalidOptions(e.to_string()))
    }

    pub fn with_variable_name(mut self, path: impl Into<String>, name: impl Into<String>) -> Self {
        self.variable_names.insert(path.into(), name.into());
        self
    }

    pub fn with_operator_name(mut self, token: impl Into<String>, name: impl Into<String>) -> Self {
        self.operator_names.insert(token.into(), name.into());
        self
    }

    pub fn with_include_json_logic(mut self, include: bool) -> Self {
        self.include_json_logic = include;
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    pub fn with_output_case(mut self, output_case: OutputCase) -> Self {
        self.output_case = output_case;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let opts = ExplainerOptions::default();
        assert!(opts.variable_names.is_empty());
        assert!(opts.operator_names.is_empty());
        assert!(!opts.include_json_logic);
        assert_eq!(opts.data, json!({}));
        assert_eq!(opts.output_case, OutputCase::Preserve);
        assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn parses_camel_case_json() {
        let opts = ExplainerOptions::from_json(
            r#"{"variableNames": {"AGE": "the age"}, "includeJsonLogic": true, "outputCase": "title"}"#,
        )
        .unwrap();
        assert_eq!(opts.variable_names.get("AGE").map(String::as_str), Some("the age"));
        assert!(opts.include_json_logic);
        assert_eq!(opts.output_case, OutputCase::Title);
        assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(opts.data, json!({}));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ExplainerOptions::from_json(r#"{"includeJsonLogic": "yes"}"#).unwrap_err();
        assert!(matches!(err, ExplainError::InvalidOptions(_)));
    }

    #[test]
    fn output_case() {
        let text = "age is greater than 18".to_string();
        assert_eq!(OutputCase::Preserve.apply(text.clone()), "age is greater than 18");
        assert_eq!(OutputCase::Sentence.apply(text.clone()), "Age is greater than 18");
        assert_eq!(OutputCase::Title.apply(text), "Age Is Greater Than 18");
    }
}
