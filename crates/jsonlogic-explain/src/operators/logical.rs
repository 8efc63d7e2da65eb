//! Logical operators.

use crate::render_ctx::RenderCtx;
use crate::types::{args, OperatorDefinition};
use serde_json::Value;
use std::sync::Arc;

fn junction(payload: &Value, ctx: &mut RenderCtx<'_>, word: &str) -> String {
    match args(payload) {
        Some(items) if !items.is_empty() => ctx.explain_all(items).join(&format!(" {} ", word)),
        _ => ctx.fallback(&format!("{} operation", word), payload),
    }
}

fn and_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    junction(payload, ctx, "and")
}

fn or_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    junction(payload, ctx, "or")
}

fn not_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some([only]) => format!("not {}", ctx.explain(only)),
        _ => format!("not {}", ctx.explain(payload)),
    }
}

fn truthy_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some([only]) => format!("truthy check for {}", ctx.explain(only)),
        _ => format!("double not {}", ctx.explain(payload)),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "and", aliases: &[], render_fn: and_render }),
        Arc::new(OperatorDefinition { name: "or", aliases: &[], render_fn: or_render }),
        Arc::new(OperatorDefinition { name: "!", aliases: &["not"], render_fn: not_render }),
        Arc::new(OperatorDefinition { name: "!!", aliases: &[], render_fn: truthy_render }),
    ]
}
