//! The `Explainer`: classifies each node of a JSONLogic tree and renders it.

use crate::error::ExplainError;
use crate::format::format_value;
use crate::operators::operators_map;
use crate::options::ExplainerOptions;
use crate::render_ctx::RenderCtx;
use crate::types::{OperatorDefinition, OperatorMap};
use crate::vars::VarNames;
use serde_json::Value;
use std::sync::Arc;

/// Converts JSONLogic expressions into English text.
///
/// Built once with its options and operator registry; both are read-only
/// afterwards, so a single instance may be shared across threads.
pub struct Explainer {
    options: ExplainerOptions,
    operators: Arc<OperatorMap>,
}

impl Explainer {
    /// Creates an explainer with the built-in operator registry.
    pub fn new(options: ExplainerOptions) -> Self {
        Self::with_operators(options, Arc::new(operators_map()))
    }

    /// Creates an explainer over a prebuilt registry, which lets several
    /// explainers share one map.
    pub fn with_operators(options: ExplainerOptions, operators: Arc<OperatorMap>) -> Self {
        tracing::debug!(operators = operators.len(), "explainer built");
        Explainer { options, operators }
    }

    /// Registers a custom operator, replacing any handler for the same token.
    pub fn with_operator(mut self, def: OperatorDefinition) -> Self {
        let def = Arc::new(def);
        let operators = Arc::make_mut(&mut self.operators);
        operators.insert(def.name.to_string(), Arc::clone(&def));
        for alias in def.aliases {
            operators.insert(alias.to_string(), Arc::clone(&def));
        }
        self
    }

    pub fn options(&self) -> &ExplainerOptions {
        &self.options
    }

    pub fn operators(&self) -> &OperatorMap {
        &self.operators
    }

    /// Whether `token` has a registered handler.
    pub fn has_operator(&self, token: &str) -> bool {
        self.operators.contains_key(token)
    }

    /// Renders an expression as English text. Never fails.
    pub fn explain(&self, expr: &Value) -> String {
        let mut ctx = RenderCtx::new(self);
        let mut text = self.options.output_case.apply(ctx.explain(expr));
        if self.options.include_json_logic {
            let json = serde_json::to_string(expr).unwrap_or_default();
            text = format!("{} (JSONLogic: {})", text, json);
        }
        text
    }

    /// Parses JSON text and renders it.
    pub fn explain_str(&self, text: &str) -> Result<String, ExplainError> {
        let expr: Value =
            serde_json::from_str(text).map_err(|e| ExplainError::InvalidJson(e.to_string()))?;
        Ok(self.explain(&expr))
    }

    /// Renders one node. Recursion goes through `ctx` so the depth guard
    /// applies at every level.
    pub(crate) fn render(&self, expr: &Value, ctx: &mut RenderCtx<'_>) -> String {
        match expr {
            Value::Null => "null".to_string(),
            Value::Array(items) => ctx.explain_all(items).join(", "),
            Value::Object(map) => {
                // Only the first key is considered; further keys are ignored.
                let Some((token, payload)) = map.iter().next() else {
                    return "empty expression".to_string();
                };
                if token == "var" && map.len() == 1 {
                    return VarNames::new(&self.options.variable_names).render(payload);
                }
                match self.operators.get(token.as_str()) {
                    Some(def) => {
                        tracing::trace!(operator = %token, depth = ctx.depth(), "render");
                        (def.render_fn)(payload, ctx)
                    }
                    None => match self.options.operator_names.get(token) {
                        Some(description) => ctx.fallback(description, payload),
                        None => {
                            tracing::debug!(operator = %token, "unknown operator");
                            format!("unknown operation: {}", token)
                        }
                    },
                }
            }
            other => format_value(other),
        }
    }
}

impl Default for Explainer {
    fn default() -> Self {
        Self::new(ExplainerOptions::default())
    }
}
