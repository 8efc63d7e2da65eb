use thiserror::Error;

/// Errors raised while accepting host input.
///
/// Rendering itself never fails; these only come from parsing JSON text
/// handed to [`crate::Explainer::explain_str`] or
/// [`crate::ExplainerOptions::from_json`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExplainError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}
