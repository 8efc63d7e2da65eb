//! Array and collection operators.

use crate::render_ctx::RenderCtx;
use crate::types::{args, OperatorDefinition};
use serde_json::Value;
use std::sync::Arc;

fn map_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some([array, op]) => format!("map {} with operation {}", ctx.explain(array), ctx.explain(op)),
        _ => ctx.fallback("map operation", payload),
    }
}

fn filter_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some([array, cond]) => format!("filter {} where {}", ctx.explain(array), ctx.explain(cond)),
        _ => ctx.fallback("filter operation", payload),
    }
}

fn reduce_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some([array, op, initial]) => format!(
            "reduce {} with {} starting with {}",
            ctx.explain(array),
            ctx.explain(op),
            ctx.explain(initial)
        ),
        _ => ctx.fallback("reduce operation", payload),
    }
}

/// Shared shape of `all`, `none` and `some`: `[array, condition]`.
fn quantifier(payload: &Value, ctx: &mut RenderCtx<'_>, quantity: &str, label: &str) -> String {
    match args(payload) {
        Some([array, cond]) => format!(
            "{} items in {} satisfy {}",
            quantity,
            ctx.explain(array),
            ctx.explain(cond)
        ),
        _ => ctx.fallback(label, payload),
    }
}

fn all_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    quantifier(payload, ctx, "all", "all operation")
}

fn none_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    quantifier(payload, ctx, "no", "none operation")
}

fn some_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    quantifier(payload, ctx, "some", "some operation")
}

fn merge_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some(items) => format!("merge arrays: {}", ctx.explain_all(items).join(", ")),
        None => ctx.fallback("merge operation", payload),
    }
}

/// Field lists come either flattened (`["a", "b"]`) or wrapped in a single
/// array (`[["a", "b"]]`).
fn field_list<'v>(items: &'v [Value]) -> &'v [Value] {
    match items {
        [Value::Array(inner)] => inner.as_slice(),
        _ => items,
    }
}

fn missing_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some(items) if !items.is_empty() => format!(
            "missing required fields: {}",
            ctx.explain_all(field_list(items)).join(", ")
        ),
        _ => ctx.fallback("check for missing values", payload),
    }
}

fn missing_some_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some([min_required, Value::Array(fields)]) => format!(
            "missing at least {} of these fields: {}",
            ctx.explain(min_required),
            ctx.explain_all(field_list(fields)).join(", ")
        ),
        Some([min_required, field]) => format!(
            "missing at least {} of field {}",
            ctx.explain(min_required),
            ctx.explain(field)
        ),
        _ => ctx.fallback("check for missing some values", payload),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "map", aliases: &[], render_fn: map_render }),
        Arc::new(OperatorDefinition { name: "filter", aliases: &[], render_fn: filter_render }),
        Arc::new(OperatorDefinition { name: "reduce", aliases: &[], render_fn: reduce_render }),
        Arc::new(OperatorDefinition { name: "all", aliases: &[], render_fn: all_render }),
        Arc::new(OperatorDefinition { name: "none", aliases: &[], render_fn: none_render }),
        Arc::new(OperatorDefinition { name: "some", aliases: &[], render_fn: some_render }),
        Arc::new(OperatorDefinition { name: "merge", aliases: &[], render_fn: merge_render }),
        Arc::new(OperatorDefinition { name: "missing", aliases: &[], render_fn: missing_render }),
        Arc::new(OperatorDefinition {
            name: "missing_some",
            aliases: &[],
            render_fn: missing_some_render,
        }),
    ]
}
