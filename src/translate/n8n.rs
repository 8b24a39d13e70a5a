use super::{
    MakeBuilder, Tally, Translation, ZapierBuilder, default_designer, label_or, title_or,
};
use crate::document::{Designer, MakeDocument, N8nDocument, N8nNode, ZapierDocument};
use crate::params::translator_for;
use crate::platform::Platform;
use crate::registry::AppRegistry;
use serde_json::Value;

/// Converts an n8n workflow into a Zap, one step per mapped node in node order.
///
/// Connections are not consulted: the Zap is always a linear sequence.
pub fn n8n_to_zapier(source: &N8nDocument, registry: &AppRegistry) -> Translation<ZapierDocument> {
    let params = translator_for(Platform::N8n, Platform::Zapier);
    let mut tally = Tally::default();
    let mut builder = ZapierBuilder::new(title_or(&source.name, "Imported from n8n"));

    for (index, node) in source.nodes.iter().enumerate() {
        let Some(app) = registry.resolve(&node.node_type, Platform::N8n, Platform::Zapier) else {
            tally.record_unmapped(Platform::N8n, &node.node_type);
            continue;
        };
        builder.push(
            app,
            node_event(node),
            label_or(&node.name, app, index),
            params.translate(&node.parameters),
            node.credentials.clone(),
        );
        tally.record_mapped();
    }

    Translation {
        document: builder.finish(),
        tally,
    }
}

/// Converts an n8n workflow into a Make scenario, keeping canvas positions.
pub fn n8n_to_make(source: &N8nDocument, registry: &AppRegistry) -> Translation<MakeDocument> {
    let params = translator_for(Platform::N8n, Platform::Make);
    let mut tally = Tally::default();
    let mut builder = MakeBuilder::new(title_or(&source.name, "Imported from n8n"));

    for (index, node) in source.nodes.iter().enumerate() {
        let Some(module) = registry.resolve(&node.node_type, Platform::N8n, Platform::Make) else {
            tally.record_unmapped(Platform::N8n, &node.node_type);
            continue;
        };
        let designer = if node.has_position {
            Designer::at(node.position[0], node.position[1])
        } else {
            default_designer(index)
        };
        builder.push(
            module,
            label_or(&node.name, module.split(':').next().unwrap_or(module), index),
            params.translate(&node.parameters),
            designer,
        );
        tally.record_mapped();
    }

    Translation {
        document: builder.finish(),
        tally,
    }
}

/// The Zapier event named by a node's `operation` or `event` parameter.
fn node_event(node: &N8nNode) -> Option<String> {
    ["operation", "event"]
        .iter()
        .filter_map(|key| node.parameters.get(*key))
        .filter_map(Value::as_str)
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}
