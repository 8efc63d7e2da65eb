//! String operators.

use crate::format::{format_list_with_conjunction, Conjunction};
use crate::render_ctx::RenderCtx;
use crate::types::{args, OperatorDefinition};
use serde_json::Value;
use std::sync::Arc;

fn substr_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some([s, start]) => {
            format!("substring of {} starting at {}", ctx.explain(s), ctx.explain(start))
        }
        Some([s, start, len]) => format!(
            "substring of {} starting at {} with length {}",
            ctx.explain(s),
            ctx.explain(start),
            ctx.explain(len)
        ),
        _ => ctx.fallback("substring operation", payload),
    }
}

fn cat_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some(items) if !items.is_empty() => {
            let parts = ctx.explain_all(items);
            format!("concatenate {}", format_list_with_conjunction(parts.as_slice(), Conjunction::And))
        }
        _ => ctx.fallback("concatenate", payload),
    }
}

/// Substring test: `[needle, haystack]`.
fn in_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some([needle, haystack]) => {
            format!("{} is found in {}", ctx.explain(needle), ctx.explain(haystack))
        }
        _ => ctx.fallback("'in' operation", payload),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "substr", aliases: &[], render_fn: substr_render }),
        Arc::new(OperatorDefinition { name: "cat", aliases: &[], render_fn: cat_render }),
        Arc::new(OperatorDefinition { name: "in", aliases: &[], render_fn: in_render }),
    ]
}
