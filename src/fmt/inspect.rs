//! Single-line pretty-printer for structured log arguments.
//!
//! Produces the compact `{ foo: { bar: 'baz' } }` shape people expect from a
//! console. Total over every `serde_json::Value`; there is no failure path.

use serde_json::{Map, Value};

/// Containers nested deeper than this collapse to `[Object]` / `[Array]`.
const MAX_DEPTH: usize = 2;

/// Renders a top-level argument. Top-level strings are emitted verbatim.
#[must_use]
pub fn inspect(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => render(other, 0),
    }
}

fn render(value: &Value, depth: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => render_array(items, depth),
        Value::Object(map) => render_object(map, depth),
    }
}

fn render_array(items: &[Value], depth: usize) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    if depth > MAX_DEPTH {
        return "[Array]".to_string();
    }
    let inner: Vec<String> = items.iter().map(|v| render(v, depth + 1)).collect();
    format!("[ {} ]", inner.join(", "))
}

fn render_object(map: &Map<String, Value>, depth: usize) -> String {
    if map.is_empty() {
        return "{}".to_string();
    }
    if depth > MAX_DEPTH {
        return "[Object]".to_string();
    }
    let inner: Vec<String> = map
        .iter()
        .map(|(k, v)| format!("{}: {}", key(k), render(v, depth + 1)))
        .collect();
    format!("{{ {} }}", inner.join(", "))
}

fn key(k: &str) -> String {
    if is_identifier(k) { k.to_string() } else { quote(k) }
}

fn is_identifier(k: &str) -> bool {
    let mut chars = k.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_object() {
        assert_eq!(
            inspect(&json!({"foo": {"bar": "baz"}})),
            "{ foo: { bar: 'baz' } }"
        );
    }

    #[test]
    fn deep_nesting_collapses() {
        assert_eq!(
            inspect(&json!({"a": {"b": {"c": {"d": 1}}}})),
            "{ a: { b: { c: [Object] } } }"
        );
        assert_eq!(inspect(&json!([[[[1]]]])), "[ [ [ [Array] ] ] ]");
    }

    #[test]
    fn keys_and_strings_are_quoted_when_needed() {
        assert_eq!(
            inspect(&json!({"a-b": "it's"})),
            "{ 'a-b': 'it\\'s' }"
        );
    }

    #[test]
    fn scalars_and_empties() {
        assert_eq!(inspect(&json!(null)), "null");
        assert_eq!(inspect(&json!(42)), "42");
        assert_eq!(inspect(&json!("top")), "top");
        assert_eq!(inspect(&json!({})), "{}");
        assert_eq!(inspect(&json!([])), "[]");
        assert_eq!(inspect(&json!([1, true, "x"])), "[ 1, true, 'x' ]");
    }
}
