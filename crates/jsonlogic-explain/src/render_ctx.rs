use crate::explain::Explainer;
use serde_json::Value;

/// Rendered in place of sub-expressions nested deeper than
/// [`crate::ExplainerOptions::max_depth`].
pub const TRUNCATION_MARKER: &str = "...";

/// The context passed to every operator render function.
///
/// Carries the caller's data context and the recursion callback bound to the
/// explainer that started the walk, so configuration reaches every level of
/// the tree.
pub struct RenderCtx<'a> {
    explainer: &'a Explainer,
    depth: usize,
}

impl<'a> RenderCtx<'a> {
    pub fn new(explainer: &'a Explainer) -> Self {
        RenderCtx {
            explainer,
            depth: 0,
        }
    }

    /// The `data` value from the explainer options.
    pub fn data(&self) -> &'a Value {
        &self.explainer.options().data
    }

    /// Current nesting depth; `0` while rendering the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Renders a nested expression.
    pub fn explain(&mut self, expr: &Value) -> String {
        let explainer = self.explainer;
        let max_depth = explainer.options().max_depth;
        if self.depth >= max_depth {
            tracing::debug!(max_depth, "expression truncated at depth limit");
            return TRUNCATION_MARKER.to_string();
        }
        self.depth += 1;
        let text = explainer.render(expr, self);
        self.depth -= 1;
        text
    }

    /// Renders every element of `exprs`.
    pub fn explain_all(&mut self, exprs: &[Value]) -> Vec<String> {
        exprs.iter().map(|e| self.explain(e)).collect()
    }

    /// The shared arity-fallback phrase: `"{label} with {payload}"`.
    pub fn fallback(&mut self, label: &str, payload: &Value) -> String {
        format!("{} with {}", label, self.explain(payload))
    }
}
