//! Value formatting and string helpers.

use regex::{Captures, Regex};
use serde_json::{Number, Value};
use std::sync::OnceLock;

// ----------------------------------------------------------------- Values

/// Formats a literal for display.
///
/// Strings are double-quoted, numbers and booleans print as written, arrays
/// are bracketed with each element formatted recursively, and objects fall
/// back to compact JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Formats a number the way a JavaScript engine stringifies it: integral
/// floats drop the trailing `.0`, and magnitudes of at least `1e21` or below
/// `1e-6` use exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f as i128),
        Some(f) if f.is_finite() && (f.abs() >= 1e21 || f.abs() < 1e-6) => exponent_form(f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn exponent_form(f: f64) -> String {
    let text = format!("{:e}", f);
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => text,
    }
}

/// Renders a scalar as plain text (no quotes), used for variable paths.
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(n),
        other => format_value(other),
    }
}

// ----------------------------------------------------------------- Strings

fn word_start_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w").expect("valid regex"))
}

/// Upper-cases the first character.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases the first character of every word.
pub fn capitalize_words(s: &str) -> String {
    word_start_regex()
        .replace_all(s, |caps: &Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

/// The word placed before the last item of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    pub fn as_str(self) -> &'static str {
        match self {
            Conjunction::And => "and",
            Conjunction::Or => "or",
        }
    }
}

/// Joins items as an English list: `a`, `a and b`, `a, b, and c`.
pub fn format_list_with_conjunction<S: AsRef<str>>(items: &[S], conjunction: Conjunction) -> String {
    let word = conjunction.as_str();
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {} {}", first.as_ref(), word, second.as_ref()),
        [rest @ .., last] => {
            let rest: Vec<&str> = rest.iter().map(AsRef::as_ref).collect();
            format!("{}, {} {}", rest.join(", "), word, last.as_ref())
        }
    }
}
