//! Common test utilities for building workflow exports.
use flowport::prelude::*;
use serde_json::{Value, json};

/// The two-step Zap from the product docs: one known app, one unknown.
#[allow(dead_code)]
pub fn gmail_and_unknown_zap() -> Value {
    json!({
        "title": "T",
        "steps": [
            { "id": 1, "app": "Gmail", "event": "action", "params": {} },
            { "id": 2, "app": "UnknownApp", "event": "action", "params": {} }
        ]
    })
}

/// A fully mappable Zap with credentials and a templated parameter.
#[allow(dead_code)]
pub fn lead_alert_zap() -> Value {
    json!({
        "title": "New lead alert",
        "steps": [
            {
                "id": 1,
                "app": "gmail",
                "event": "new_email",
                "label": "Watch inbox",
                "params": { "label": "INBOX" },
                "authentication": { "id": "auth-gmail" }
            },
            {
                "id": 2,
                "app": "google-sheets",
                "event": "add_row",
                "label": "Log lead",
                "params": { "sheet": "Leads", "row": { "email": "{{1.from}}" } }
            },
            {
                "id": 3,
                "app": "slack",
                "event": "send_message",
                "label": "Notify team",
                "params": { "channel": "#sales" }
            }
        ]
    })
}

/// An n8n chain `Start -> Mystery` whose second node type is unknown.
#[allow(dead_code)]
pub fn n8n_chain_with_unknown_tail() -> Value {
    json!({
        "name": "Chain",
        "nodes": [
            {
                "id": "1",
                "name": "Start",
                "type": "n8n-nodes-base.webhook",
                "typeVersion": 1,
                "position": [100, 200],
                "parameters": { "path": "incoming" }
            },
            {
                "id": "2",
                "name": "Mystery",
                "type": "n8n-nodes-custom.mystery",
                "typeVersion": 1,
                "position": [300, 200],
                "parameters": {}
            }
        ],
        "connections": {
            "Start": { "main": [[{ "node": "Mystery", "type": "main", "index": 0 }]] }
        }
    })
}

/// An n8n workflow with expressions, credentials and canvas positions.
#[allow(dead_code)]
pub fn n8n_support_flow() -> Value {
    json!({
        "name": "Support triage",
        "nodes": [
            {
                "id": "a",
                "name": "Incoming",
                "type": "n8n-nodes-base.webhook",
                "position": [240, 300],
                "parameters": { "path": "tickets" }
            },
            {
                "id": "b",
                "name": "Summarize",
                "type": "@n8n/n8n-nodes-langchain.openAi",
                "position": [460, 300],
                "parameters": { "prompt": "={{ $json.body }}", "options": { "model": "={{ 'gpt-4' }}" } },
                "credentials": { "openAiApi": { "id": "7", "name": "OpenAI" } }
            },
            {
                "id": "c",
                "name": "Notify",
                "type": "n8n-nodes-base.slack",
                "position": [680, 300],
                "parameters": { "operation": "postMessage", "text": "={{ $json.summary }}" }
            }
        ],
        "connections": {
            "Incoming": { "main": [[{ "node": "Summarize", "type": "main", "index": 0 }]] },
            "Summarize": { "main": [[{ "node": "Notify", "type": "main", "index": 0 }]] }
        }
    })
}

/// A Make scenario with designer coordinates and one unknown module.
#[allow(dead_code)]
pub fn make_scenario() -> Value {
    json!({
        "name": "Form to CRM",
        "flow": [
            {
                "id": 1,
                "module": "gateway:CustomWebHook",
                "version": 1,
                "parameters": { "hook": 42 },
                "mapper": {},
                "metadata": { "designer": { "x": 0, "y": 0 } }
            },
            {
                "id": 2,
                "module": "hubspotcrm:createContact",
                "version": 2,
                "parameters": { "account": 9 },
                "mapper": { "email": "{{1.email}}" },
                "metadata": { "designer": { "x": 300, "y": 0 } }
            },
            {
                "id": 3,
                "module": "legacy-erp:PushOrder",
                "version": 1,
                "parameters": {},
                "mapper": {},
                "metadata": { "designer": { "x": 600, "y": 0 } }
            }
        ],
        "metadata": { "instant": true }
    })
}

/// Every source fixture paired with its platform.
#[allow(dead_code)]
pub fn all_fixtures() -> Vec<(Value, Platform)> {
    vec![
        (gmail_and_unknown_zap(), Platform::Zapier),
        (lead_alert_zap(), Platform::Zapier),
        (n8n_chain_with_unknown_tail(), Platform::N8n),
        (n8n_support_flow(), Platform::N8n),
        (make_scenario(), Platform::Make),
        (json!({}), Platform::Zapier),
        (json!({ "nodes": "oops" }), Platform::N8n),
        (json!(null), Platform::Make),
    ]
}

/// Number of steps in a source export, counted the way each platform stores them.
#[allow(dead_code)]
pub fn source_step_count(value: &Value, platform: Platform) -> usize {
    WorkflowDocument::coerce(value, platform).step_count()
}

/// The converted workflow as JSON, for assertions on the output shape.
#[allow(dead_code)]
pub fn workflow_json(result: &ConversionResult) -> Value {
    result
        .workflow
        .to_value()
        .expect("converted workflow should serialize")
}

/// Replaces every generated `id` and `versionId` with a placeholder.
#[allow(dead_code)]
pub fn strip_generated_ids(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            for key in ["id", "versionId"] {
                if let Some(id) = obj.get_mut(key) {
                    if id.is_string() {
                        *id = json!("<id>");
                    }
                }
            }
            for child in obj.values_mut() {
                strip_generated_ids(child);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(strip_generated_ids),
        _ => {}
    }
}
