//! JSONLogic explainer: renders JSONLogic rule trees as English sentences.
//!
//! # Overview
//!
//! A JSONLogic expression is a JSON value where an object with a single key
//! is an operation (`{"operator": payload}`), `{"var": path}` is a reference
//! into external data, and everything else is a literal. The [`Explainer`]
//! walks the tree and asks a registry of per-operator render functions to
//! phrase each node. Nothing is evaluated.
//!
//! # Example
//!
//! ```
//! use jsonlogic_explain::{Explainer, ExplainerOptions};
//! use serde_json::json;
//!
//! let explainer = Explainer::new(ExplainerOptions::default());
//! let text = explainer.explain(&json!({"and": [
//!     {">": [{"var": "age"}, 18]},
//!     {"==": [{"var": "status"}, "active"]}
//! ]}));
//!
//! assert_eq!(text, "age is greater than 18 and status equals \"active\"");
//! ```

pub mod error;
pub mod explain;
pub mod format;
pub mod operators;
pub mod options;
pub mod render_ctx;
pub mod types;
pub mod vars;

// Re-export the core public API
pub use error::ExplainError;
pub use explain::Explainer;
pub use format::{
    capitalize_first, capitalize_words, format_list_with_conjunction, format_value, Conjunction,
};
pub use operators::operators_map;
pub use options::{ExplainerOptions, OutputCase};
pub use render_ctx::RenderCtx;
pub use types::{OperatorDefinition, OperatorMap, RenderFn};
