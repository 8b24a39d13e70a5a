//! Typed workflow documents for each platform.
//!
//! Exports arrive as untyped JSON. [`WorkflowDocument::coerce`] turns any JSON
//! value into the typed shape of a platform, defaulting whatever is missing,
//! while [`WorkflowDocument::parse`] rejects text whose structure is wrong.

use crate::error::{DetectionError, DocumentError};
use crate::platform::Platform;
use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;

mod lenient;
pub mod make;
pub mod n8n;
pub mod zapier;

pub use make::{Designer, MakeDocument, MakeModule, ModuleMetadata};
pub use n8n::{N8nConnection, N8nDocument, N8nEdge, N8nNode};
pub use zapier::{ZapierDocument, ZapierStep};

/// A workflow in the shape of one platform.
///
/// Serializes to exactly the platform's JSON shape. `Raw` holds a source
/// document that was passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WorkflowDocument {
    Zapier(ZapierDocument),
    N8n(N8nDocument),
    Make(MakeDocument),
    Raw(Value),
}

impl WorkflowDocument {
    /// Reads `value` as a `platform` document. Never fails.
    pub fn coerce(value: &Value, platform: Platform) -> Self {
        match platform {
            Platform::Zapier => Self::Zapier(ZapierDocument::from_value(value)),
            Platform::N8n => Self::N8n(N8nDocument::from_value(value)),
            Platform::Make => Self::Make(MakeDocument::from_value(value)),
        }
    }

    /// Parses JSON text as a `platform` document, rejecting structural mismatches.
    pub fn parse(json: &str, platform: Platform) -> Result<Self, DocumentError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))?;
        check_shape(&value, platform)?;
        Ok(Self::coerce(&value, platform))
    }

    /// The platform whose shape this document has. `None` for raw documents.
    pub fn platform(&self) -> Option<Platform> {
        match self {
            Self::Zapier(_) => Some(Platform::Zapier),
            Self::N8n(_) => Some(Platform::N8n),
            Self::Make(_) => Some(Platform::Make),
            Self::Raw(_) => None,
        }
    }

    /// The workflow's display name, if it has one.
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            Self::Zapier(doc) => doc.title.as_str(),
            Self::N8n(doc) => doc.name.as_str(),
            Self::Make(doc) => doc.name.as_str(),
            Self::Raw(value) => ["name", "title"]
                .iter()
                .find_map(|key| value.get(*key).and_then(Value::as_str))
                .unwrap_or_default(),
        };
        Some(name).filter(|n| !n.is_empty())
    }

    /// The native identifier of every step, in order.
    pub fn step_identifiers(&self) -> Vec<&str> {
        match self {
            Self::Zapier(doc) => doc.steps.iter().map(|s| s.app.as_str()).collect(),
            Self::N8n(doc) => doc.nodes.iter().map(|n| n.node_type.as_str()).collect(),
            Self::Make(doc) => doc.flow.iter().map(|m| m.module.as_str()).collect(),
            Self::Raw(_) => Vec::new(),
        }
    }

    pub fn step_count(&self) -> usize {
        self.step_identifiers().len()
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Guesses which platform exported `value` from its top-level keys.
pub fn detect_platform(value: &Value) -> Result<Platform, DetectionError> {
    let obj = value.as_object().ok_or(DetectionError::NotAnObject)?;
    let has = |key: &str| obj.contains_key(key);

    if has("nodes") && has("connections") {
        Ok(Platform::N8n)
    } else if has("flow") || has("modules") || has("scenario") {
        Ok(Platform::Make)
    } else if has("steps") || has("actions") || has("trigger") {
        Ok(Platform::Zapier)
    } else {
        Err(DetectionError::Unrecognized(obj.keys().join(", ")))
    }
}

fn check_shape(value: &Value, platform: Platform) -> Result<(), DocumentError> {
    let shape_error = |message: String| DocumentError::Shape {
        platform: platform.to_string(),
        message,
    };

    let obj = value
        .as_object()
        .ok_or_else(|| shape_error("expected a JSON object at the top level".to_string()))?;

    let list_keys: &[&str] = match platform {
        Platform::Zapier => &["steps", "actions"],
        Platform::N8n => &["nodes"],
        Platform::Make => &["flow", "modules"],
    };
    let object_keys: &[&str] = match platform {
        Platform::Zapier => &["trigger"],
        Platform::N8n => &["connections", "settings"],
        Platform::Make => &["metadata"],
    };

    for key in list_keys {
        let Some(field) = obj.get(*key) else { continue };
        let items = field
            .as_array()
            .ok_or_else(|| shape_error(format!("'{}' must be an array", key)))?;
        if let Some(index) = items.iter().position(|item| !item.is_object()) {
            return Err(shape_error(format!("'{}[{}]' must be an object", key, index)));
        }
    }

    for key in object_keys {
        match obj.get(*key) {
            Some(field) if !field.is_object() => {
                return Err(shape_error(format!("'{}' must be an object", key)));
            }
            _ => {}
        }
    }

    Ok(())
}
