//! The `var` operator.
//!
//! A lone `{"var": ...}` object is resolved by the explainer itself, which
//! knows the configured display names. This entry only serves objects where
//! `var` is the first of several keys.

use crate::format::{format_value, plain_text};
use crate::render_ctx::RenderCtx;
use crate::types::OperatorDefinition;
use serde_json::Value;
use std::sync::Arc;

fn var_render(payload: &Value, _ctx: &mut RenderCtx<'_>) -> String {
    match payload {
        Value::Null => "null".to_string(),
        Value::String(s) if s.is_empty() => "null".to_string(),
        Value::Array(items) if items.len() == 2 => format!(
            "{} with default {}",
            plain_text(&items[0]).to_lowercase(),
            format_value(&items[1])
        ),
        other => plain_text(other).to_lowercase(),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition { name: "var", aliases: &[], render_fn: var_render })]
}
