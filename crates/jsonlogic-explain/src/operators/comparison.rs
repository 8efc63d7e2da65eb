//! Comparison operators.

use crate::render_ctx::RenderCtx;
use crate::types::{args, OperatorDefinition};
use serde_json::Value;
use std::sync::Arc;

/// Equality family: two or more operands, only the first two are rendered.
fn equality(payload: &Value, ctx: &mut RenderCtx<'_>, phrase: &str, label: &str) -> String {
    match args(payload) {
        Some([a, b, ..]) => format!("{} {} {}", ctx.explain(a), phrase, ctx.explain(b)),
        _ => ctx.fallback(label, payload),
    }
}

/// Exactly two operands.
fn binary(payload: &Value, ctx: &mut RenderCtx<'_>, phrase: &str, label: &str) -> String {
    match args(payload) {
        Some([a, b]) => format!("{} {} {}", ctx.explain(a), phrase, ctx.explain(b)),
        _ => ctx.fallback(label, payload),
    }
}

fn eq_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    equality(payload, ctx, "equals", "equality check")
}

fn strict_eq_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    equality(payload, ctx, "strictly equals", "strict equality check")
}

fn ne_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    equality(payload, ctx, "does not equal", "inequality check")
}

fn strict_ne_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    equality(payload, ctx, "does not strictly equal", "strict inequality check")
}

fn gt_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    binary(payload, ctx, "is greater than", "greater than comparison")
}

fn ge_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    binary(payload, ctx, "is greater than or equal to", "greater than or equal comparison")
}

/// `<` and `<=` also accept three operands: `[low, x, high]` tests that `x`
/// lies between the bounds.
fn between(payload: &Value, ctx: &mut RenderCtx<'_>, inclusive: bool) -> Option<String> {
    let Some([low, x, high]) = args(payload) else {
        return None;
    };
    let (low, x, high) = (ctx.explain(low), ctx.explain(x), ctx.explain(high));
    let suffix = if inclusive { " inclusive" } else { "" };
    Some(format!("{} is between {} and {}{}", x, low, high, suffix))
}

fn lt_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    between(payload, ctx, false)
        .unwrap_or_else(|| binary(payload, ctx, "is less than", "less than comparison"))
}

fn le_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    between(payload, ctx, true).unwrap_or_else(|| {
        binary(payload, ctx, "is less than or equal to", "less than or equal comparison")
    })
}

fn in_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    binary(payload, ctx, "is in", "'in' operation")
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "==", aliases: &[], render_fn: eq_render }),
        Arc::new(OperatorDefinition { name: "===", aliases: &[], render_fn: strict_eq_render }),
        Arc::new(OperatorDefinition { name: "!=", aliases: &[], render_fn: ne_render }),
        Arc::new(OperatorDefinition { name: "!==", aliases: &[], render_fn: strict_ne_render }),
        Arc::new(OperatorDefinition { name: ">", aliases: &[], render_fn: gt_render }),
        Arc::new(OperatorDefinition { name: ">=", aliases: &[], render_fn: ge_render }),
        Arc::new(OperatorDefinition { name: "<", aliases: &[], render_fn: lt_render }),
        Arc::new(OperatorDefinition { name: "<=", aliases: &[], render_fn: le_render }),
        // Replaced by the string family's `in` in the combined registry.
        Arc::new(OperatorDefinition { name: "in", aliases: &[], render_fn: in_render }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::operators_to_map;
    use crate::{Explainer, ExplainerOptions};
    use serde_json::json;

    #[test]
    fn comparison_in_phrasing() {
        let explainer = Explainer::with_operators(
            ExplainerOptions::default(),
            Arc::new(operators_to_map(operators())),
        );
        assert_eq!(explainer.explain(&json!({"in": ["a", ["a", "b"]]})), "\"a\" is in \"a\", \"b\"");
        assert_eq!(explainer.explain(&json!({"in": "a"})), "'in' operation with \"a\"");
    }
}
