use super::lenient;
use serde::Serialize;
use serde_json::{Map, Value};

/// A Zap: a title and an ordered list of steps, the first being the trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ZapierDocument {
    pub title: String,
    pub steps: Vec<ZapierStep>,
}

/// One Zapier step.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ZapierStep {
    pub id: Value,
    pub app: String,
    pub event: String,
    pub label: String,
    pub params: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Value>,
}

impl ZapierDocument {
    /// Reads a Zap, defaulting anything missing.
    ///
    /// Older exports keep the trigger in a separate `trigger` object and the
    /// remaining steps under `actions`; the trigger becomes the first step.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let mut steps = Vec::new();
        if let Some(trigger) = obj.get("trigger").filter(|t| t.is_object()) {
            steps.push(ZapierStep::from_value(trigger));
        }
        steps.extend(
            lenient::array(obj, &["steps", "actions"])
                .iter()
                .map(ZapierStep::from_value),
        );

        Self {
            title: lenient::text(obj, &["title", "name"]).unwrap_or_default(),
            steps,
        }
    }
}

impl ZapierStep {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            id: obj.get("id").cloned().unwrap_or(Value::Null),
            app: lenient::text(obj, &["app", "type"]).unwrap_or_default(),
            event: lenient::text(obj, &["event", "action"]).unwrap_or_default(),
            label: lenient::text(obj, &["label", "title", "name"]).unwrap_or_default(),
            params: lenient::object(obj, &["params", "config", "parameters"]),
            authentication: lenient::present(obj, "authentication"),
        }
    }
}
