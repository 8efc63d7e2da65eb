use crate::render_ctx::RenderCtx;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// The type of an operator render function.
///
/// `payload` is the value stored under the operator token. Nested
/// expressions are rendered through [`RenderCtx::explain`]. Render functions
/// must accept any payload shape and fall back to a descriptive phrase when
/// the arity does not match.
pub type RenderFn = for<'a> fn(&Value, &mut RenderCtx<'a>) -> String;

/// An operator definition: the token it answers to and how it is phrased.
pub struct OperatorDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub render_fn: RenderFn,
}

impl std::fmt::Debug for OperatorDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorDefinition")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

/// Map of operator token/alias -> definition.
pub type OperatorMap = HashMap<String, Arc<OperatorDefinition>>;

/// Builds an `OperatorMap` from a list of operator definitions.
///
/// Definitions are inserted in list order, so when two definitions claim the
/// same token the later one replaces the earlier one.
pub fn operators_to_map(operators: Vec<Arc<OperatorDefinition>>) -> OperatorMap {
    let mut map = HashMap::new();
    for op in operators {
        map.insert(op.name.to_string(), Arc::clone(&op));
        for alias in op.aliases {
            map.insert(alias.to_string(), Arc::clone(&op));
        }
    }
    map
}

/// Splits an array payload into its elements; `None` for any other shape.
pub fn args(payload: &Value) -> Option<&[Value]> {
    payload.as_array().map(Vec::as_slice)
}
