//! Permissive field access over untyped JSON.
//!
//! Workflow exports vary between platform versions, so every accessor takes a
//! list of candidate keys and falls back to an empty value instead of failing.

use serde_json::{Map, Value};

/// First candidate key holding a non-empty string.
pub(crate) fn text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// First candidate key holding an array, or an empty slice.
pub(crate) fn array<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> &'a [Value] {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// First candidate key holding an object, cloned, or an empty object.
pub(crate) fn object(obj: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Any non-null value under `key`.
pub(crate) fn present(obj: &Map<String, Value>, key: &str) -> Option<Value> {
    obj.get(key).filter(|v| !v.is_null()).cloned()
}

/// A string or number rendered as text.
pub(crate) fn id_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads an `[x, y]` pair.
pub(crate) fn point(value: Option<&Value>) -> Option<[i64; 2]> {
    let coords = value?.as_array()?;
    match coords.as_slice() {
        [x, y] => Some([coordinate(x)?, coordinate(y)?]),
        _ => None,
    }
}

/// Reads `{ "x": .., "y": .. }`.
pub(crate) fn xy(value: Option<&Value>) -> Option<[i64; 2]> {
    let obj = value?.as_object()?;
    Some([coordinate(obj.get("x")?)?, coordinate(obj.get("y")?)?])
}

fn coordinate(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.round() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn text_skips_blank_and_non_string_candidates() {
        let o = obj(json!({ "title": "  ", "name": 3, "label": "Send" }));
        assert_eq!(text(&o, &["title", "name", "label"]), Some("Send".to_string()));
        assert_eq!(text(&o, &["missing"]), None);
    }

    #[test]
    fn array_defaults_to_empty() {
        let o = obj(json!({ "steps": "oops", "actions": [1, 2] }));
        assert_eq!(array(&o, &["steps", "actions"]).len(), 2);
        assert!(array(&o, &["flow"]).is_empty());
    }

    #[test]
    fn point_accepts_floats_and_rejects_other_shapes() {
        assert_eq!(point(Some(&json!([250.4, 300]))), Some([250, 300]));
        assert_eq!(point(Some(&json!([1, 2, 3]))), None);
        assert_eq!(xy(Some(&json!({ "x": 10, "y": -5 }))), Some([10, -5]));
        assert_eq!(xy(Some(&json!({ "x": 10 }))), None);
    }
}
