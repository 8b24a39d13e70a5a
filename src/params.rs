use crate::platform::Platform;
use serde_json::{Map, Value};

/// Reshapes one step's configuration object between platform conventions.
///
/// Implementations never fail and never warn: any input, including `null`,
/// yields an object.
pub trait ParameterTranslator: Send + Sync {
    fn translate(&self, params: &Map<String, Value>) -> Map<String, Value>;

    /// Convenience for untyped input; anything but an object becomes `{}`.
    fn translate_value(&self, params: Option<&Value>) -> Map<String, Value> {
        match params.and_then(Value::as_object) {
            Some(obj) => self.translate(obj),
            None => Map::new(),
        }
    }
}

/// Copies the structure as is.
pub struct Passthrough;

impl ParameterTranslator for Passthrough {
    fn translate(&self, params: &Map<String, Value>) -> Map<String, Value> {
        params
            .iter()
            .map(|(key, value)| (key.clone(), passthrough_value(value)))
            .collect()
    }
}

fn passthrough_value(value: &Value) -> Value {
    match value {
        Value::Object(obj) => Value::Object(Passthrough.translate(obj)),
        other => other.clone(),
    }
}

/// Strips n8n's `={{ expr }}` interpolation wrapper down to `expr`.
///
/// Objects are walked recursively. Arrays and non-string scalars are copied
/// without looking inside.
pub struct UnwrapExpressions;

impl ParameterTranslator for UnwrapExpressions {
    fn translate(&self, params: &Map<String, Value>) -> Map<String, Value> {
        params
            .iter()
            .map(|(key, value)| (key.clone(), unwrap_value(value)))
            .collect()
    }
}

fn unwrap_value(value: &Value) -> Value {
    match value {
        Value::String(s) => match unwrap_expression(s) {
            Some(inner) => Value::String(inner.to_string()),
            None => value.clone(),
        },
        Value::Object(obj) => Value::Object(UnwrapExpressions.translate(obj)),
        other => other.clone(),
    }
}

/// The trimmed inner text of `={{ ... }}`, or `None` when `s` is not framed that way.
pub fn unwrap_expression(s: &str) -> Option<&str> {
    s.trim()
        .strip_prefix("={{")?
        .strip_suffix("}}")
        .map(str::trim)
}

/// The translator used when moving parameters from `source` to `target`.
///
/// Only n8n to Zapier rewrites anything. Zapier to n8n deliberately does not
/// re-wrap expressions into `={{ }}`.
pub fn translator_for(source: Platform, target: Platform) -> &'static dyn ParameterTranslator {
    match (source, target) {
        (Platform::N8n, Platform::Zapier) => &UnwrapExpressions,
        _ => &Passthrough,
    }
}

/// Translates `params` for the `source` to `target` move.
pub fn translate_parameters(
    params: &Map<String, Value>,
    source: Platform,
    target: Platform,
) -> Map<String, Value> {
    translator_for(source, target).translate(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn unwrap_expression_requires_full_frame() {
        assert_eq!(unwrap_expression("={{ $json.email }}"), Some("$json.email"));
        assert_eq!(unwrap_expression("={{$json.a}}"), Some("$json.a"));
        assert_eq!(unwrap_expression("{{ $json.email }}"), None);
        assert_eq!(unwrap_expression("=plain"), None);
        assert_eq!(unwrap_expression("={{ open"), None);
    }

    #[test]
    fn unwrap_recurses_into_objects_but_not_arrays() {
        let params = obj(json!({
            "to": "={{ $json.email }}",
            "options": { "subject": "={{ $json.subject }}", "retries": 3 },
            "list": ["={{ $json.a }}"],
            "flag": true
        }));
        let out = UnwrapExpressions.translate(&params);
        assert_eq!(out["to"], json!("$json.email"));
        assert_eq!(out["options"]["subject"], json!("$json.subject"));
        assert_eq!(out["options"]["retries"], json!(3));
        assert_eq!(out["list"], json!(["={{ $json.a }}"]));
        assert_eq!(out["flag"], json!(true));
    }

    #[test]
    fn zapier_to_n8n_does_not_rewrap() {
        let params = obj(json!({ "to": "{{steps.1.email}}" }));
        let out = translate_parameters(&params, Platform::Zapier, Platform::N8n);
        assert_eq!(out, params);
    }

    #[test]
    fn non_object_input_becomes_empty() {
        assert!(Passthrough.translate_value(None).is_empty());
        assert!(Passthrough.translate_value(Some(&json!(null))).is_empty());
        assert!(UnwrapExpressions.translate_value(Some(&json!([1]))).is_empty());
    }
}
