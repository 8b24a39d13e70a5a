use super::lenient;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

/// An n8n workflow export.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct N8nDocument {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub nodes: Vec<N8nNode>,
    pub connections: BTreeMap<String, N8nConnection>,
    pub settings: Map<String, Value>,
    pub active: bool,
    pub pin_data: Map<String, Value>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version_id: String,
    pub tags: Vec<Value>,
}

/// A single n8n node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct N8nNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub type_version: Value,
    pub position: [i64; 2],
    pub parameters: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Value>,
    /// Whether `position` came from the export rather than a default.
    #[serde(skip)]
    pub has_position: bool,
}

/// Outgoing edges of one node, grouped by output index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct N8nConnection {
    pub main: Vec<Vec<N8nEdge>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct N8nEdge {
    pub node: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub index: u32,
}

impl N8nEdge {
    pub fn main(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            kind: "main".to_string(),
            index: 0,
        }
    }
}

impl N8nConnection {
    /// A connection with a single output feeding `target`.
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            main: vec![vec![N8nEdge::main(target)]],
        }
    }

    /// True when the node fans out to more than one downstream node.
    pub fn is_branching(&self) -> bool {
        self.main.iter().map(Vec::len).sum::<usize>() > 1
    }
}

impl N8nDocument {
    /// The settings n8n writes for new workflows.
    pub fn default_settings() -> Map<String, Value> {
        let mut settings = Map::new();
        settings.insert("executionOrder".to_string(), json!("v1"));
        settings
    }

    /// Reads an n8n export, defaulting anything missing.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let nodes = lenient::array(obj, &["nodes"])
            .iter()
            .map(N8nNode::from_value)
            .collect();

        let connections = obj
            .get("connections")
            .and_then(Value::as_object)
            .map(|conns| {
                conns
                    .iter()
                    .map(|(source, outputs)| (source.clone(), N8nConnection::from_value(outputs)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: lenient::id_text(obj.get("id")).unwrap_or_default(),
            name: lenient::text(obj, &["name"]).unwrap_or_default(),
            nodes,
            connections,
            settings: lenient::object(obj, &["settings"]),
            active: obj.get("active").and_then(Value::as_bool).unwrap_or(false),
            pin_data: lenient::object(obj, &["pinData"]),
            version_id: lenient::id_text(obj.get("versionId")).unwrap_or_default(),
            tags: lenient::array(obj, &["tags"]).to_vec(),
        }
    }
}

impl N8nNode {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        let position = lenient::point(obj.get("position"));
        Self {
            id: lenient::id_text(obj.get("id")).unwrap_or_default(),
            name: lenient::text(obj, &["name"]).unwrap_or_default(),
            node_type: lenient::text(obj, &["type"]).unwrap_or_default(),
            type_version: obj
                .get("typeVersion")
                .filter(|v| v.is_number())
                .cloned()
                .unwrap_or(json!(1)),
            position: position.unwrap_or_default(),
            parameters: lenient::object(obj, &["parameters"]),
            credentials: lenient::present(obj, "credentials"),
            has_position: position.is_some(),
        }
    }
}

impl N8nConnection {
    fn from_value(value: &Value) -> Self {
        let main = value
            .get("main")
            .and_then(Value::as_array)
            .map(|outputs| {
                outputs
                    .iter()
                    .map(|output| {
                        output
                            .as_array()
                            .map(|edges| edges.iter().filter_map(N8nEdge::from_value).collect())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { main }
    }
}

impl N8nEdge {
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            node: lenient::text(obj, &["node"])?,
            kind: lenient::text(obj, &["type"]).unwrap_or_else(|| "main".to_string()),
            index: obj
                .get("index")
                .and_then(Value::as_u64)
                .and_then(|i| u32::try_from(i).ok())
                .unwrap_or(0),
        })
    }
}
