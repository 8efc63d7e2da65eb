//! Arithmetic operators.

use crate::render_ctx::RenderCtx;
use crate::types::{args, OperatorDefinition};
use serde_json::Value;
use std::sync::Arc;

/// Renders `a <word> b <word> c ...` for payloads with at least `min` operands.
fn chain(payload: &Value, ctx: &mut RenderCtx<'_>, word: &str, min: usize) -> Option<String> {
    match args(payload) {
        Some(items) if items.len() >= min => {
            Some(ctx.explain_all(items).join(&format!(" {} ", word)))
        }
        _ => None,
    }
}

fn add_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    if let Some([only]) = args(payload) {
        return format!("positive {}", ctx.explain(only));
    }
    chain(payload, ctx, "plus", 2).unwrap_or_else(|| ctx.fallback("addition", payload))
}

fn subtract_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    if let Some([only]) = args(payload) {
        return format!("negative {}", ctx.explain(only));
    }
    chain(payload, ctx, "minus", 2).unwrap_or_else(|| ctx.fallback("subtraction", payload))
}

fn multiply_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    chain(payload, ctx, "times", 2).unwrap_or_else(|| ctx.fallback("multiplication", payload))
}

fn divide_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    chain(payload, ctx, "divided by", 2).unwrap_or_else(|| ctx.fallback("division", payload))
}

fn modulo_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    chain(payload, ctx, "modulo", 2).unwrap_or_else(|| ctx.fallback("modulo", payload))
}

fn abs_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some([only]) => format!("absolute value of {}", ctx.explain(only)),
        _ => ctx.fallback("absolute value", payload),
    }
}

/// `max`/`min` take either scalar operands or a single array operand.
fn extremum(payload: &Value, ctx: &mut RenderCtx<'_>, label: &str) -> String {
    match args(payload) {
        Some([Value::Array(inner)]) => {
            format!("{} of [{}]", label, ctx.explain_all(inner).join(", "))
        }
        Some(items) => format!("{} of {}", label, ctx.explain_all(items).join(", ")),
        None => ctx.fallback(label, payload),
    }
}

fn max_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    extremum(payload, ctx, "maximum")
}

fn min_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    extremum(payload, ctx, "minimum")
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "+", aliases: &[], render_fn: add_render }),
        Arc::new(OperatorDefinition { name: "-", aliases: &[], render_fn: subtract_render }),
        Arc::new(OperatorDefinition { name: "*", aliases: &[], render_fn: multiply_render }),
        Arc::new(OperatorDefinition { name: "/", aliases: &[], render_fn: divide_render }),
        Arc::new(OperatorDefinition { name: "%", aliases: &[], render_fn: modulo_render }),
        Arc::new(OperatorDefinition { name: "abs", aliases: &[], render_fn: abs_render }),
        Arc::new(OperatorDefinition { name: "max", aliases: &[], render_fn: max_render }),
        Arc::new(OperatorDefinition { name: "min", aliases: &[], render_fn: min_render }),
    ]
}
