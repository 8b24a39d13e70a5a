use super::lenient;
use serde::Serialize;
use serde_json::{Map, Value, json};

/// A Make scenario blueprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MakeDocument {
    pub name: String,
    pub flow: Vec<MakeModule>,
    pub metadata: Value,
}

/// One module of a scenario. `module` is `app:action`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MakeModule {
    pub id: Value,
    pub module: String,
    pub version: u64,
    pub parameters: Map<String, Value>,
    pub mapper: Map<String, Value>,
    pub metadata: ModuleMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModuleMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designer: Option<Designer>,
}

/// Canvas placement of a module, plus the display name Make shows on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Designer {
    pub x: i64,
    pub y: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Designer {
    pub fn at(x: i64, y: i64) -> Self {
        Self { x, y, name: None }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl MakeDocument {
    /// The scenario metadata Make writes for a freshly imported blueprint.
    pub fn default_metadata() -> Value {
        json!({
            "instant": false,
            "version": 1,
            "scenario": {
                "roundtrips": 1,
                "maxErrors": 3,
                "autoCommit": true,
                "autoCommitTriggerLast": true,
                "sequential": false,
                "confidential": false,
                "dataloss": false,
                "dlq": false,
                "freshVariables": false
            },
            "designer": { "orphans": [] },
            "zone": "us1.make.com"
        })
    }

    /// Reads a blueprint, defaulting anything missing. `modules` is accepted for `flow`.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            name: lenient::text(obj, &["name"]).unwrap_or_default(),
            flow: lenient::array(obj, &["flow", "modules"])
                .iter()
                .map(MakeModule::from_value)
                .collect(),
            metadata: obj
                .get("metadata")
                .filter(|m| m.is_object())
                .cloned()
                .unwrap_or_else(|| json!({})),
        }
    }
}

impl MakeModule {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        let designer_value = obj.get("metadata").and_then(|m| m.get("designer"));
        let designer = lenient::xy(designer_value).map(|[x, y]| Designer {
            x,
            y,
            name: designer_value
                .and_then(Value::as_object)
                .and_then(|d| lenient::text(d, &["name"])),
        });
        Self {
            id: obj.get("id").cloned().unwrap_or(Value::Null),
            module: lenient::text(obj, &["module"]).unwrap_or_default(),
            version: obj.get("version").and_then(Value::as_u64).unwrap_or(1),
            parameters: lenient::object(obj, &["parameters"]),
            mapper: lenient::object(obj, &["mapper"]),
            metadata: ModuleMetadata { designer },
        }
    }

    /// The action part of `app:action`, if any.
    pub fn action(&self) -> Option<&str> {
        self.module
            .split_once(':')
            .map(|(_, action)| action)
            .filter(|a| !a.is_empty())
    }

    /// The app namespace of the module.
    pub fn app(&self) -> &str {
        self.module.split(':').next().unwrap_or_default()
    }

    /// `parameters` overlaid with `mapper`; mapped values win.
    pub fn merged_parameters(&self) -> Map<String, Value> {
        let mut merged = self.parameters.clone();
        for (key, value) in &self.mapper {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}
