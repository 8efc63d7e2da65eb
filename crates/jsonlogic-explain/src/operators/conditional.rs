//! Conditional operators.

use crate::render_ctx::RenderCtx;
use crate::types::{args, OperatorDefinition};
use serde_json::Value;
use std::sync::Arc;

/// `if` takes `[cond, value, cond, value, ..., default?]`.
///
/// Each pair renders as `if A then B`; pairs are joined with `else`. An odd
/// trailing element is the default and renders as `else X`; without one the
/// sentence ends in `else nothing`.
fn if_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    let items = match args(payload) {
        Some(items) if items.len() >= 3 => items,
        _ => return ctx.fallback("if statement", payload),
    };
    let (pairs, default) = if items.len() % 2 == 0 {
        (items, None)
    } else {
        (&items[..items.len() - 1], items.last())
    };
    let clauses: Vec<String> = pairs
        .chunks(2)
        .map(|pair| format!("if {} then {}", ctx.explain(&pair[0]), ctx.explain(&pair[1])))
        .collect();
    let tail = match default {
        Some(default) => ctx.explain(default),
        None => "nothing".to_string(),
    };
    format!("{} else {}", clauses.join(" else "), tail)
}

fn ternary_render(payload: &Value, ctx: &mut RenderCtx<'_>) -> String {
    match args(payload) {
        Some([cond, then, otherwise]) => format!(
            "if {} then {} else {}",
            ctx.explain(cond),
            ctx.explain(then),
            ctx.explain(otherwise)
        ),
        _ => ctx.fallback("ternary operation", payload),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "if", aliases: &[], render_fn: if_render }),
        Arc::new(OperatorDefinition { name: "?:", aliases: &[], render_fn: ternary_render }),
    ]
}
