use super::{
    N8nBuilder, N8nStep, Tally, Translation, ZapierBuilder, default_n8n_position, label_or,
    title_or,
};
use crate::document::{MakeDocument, MakeModule, N8nDocument, ZapierDocument};
use crate::params::translator_for;
use crate::platform::Platform;
use crate::registry::AppRegistry;

/// Converts a Make scenario into a Zap.
///
/// The module's action becomes the step event, and `mapper` values are
/// folded into the step parameters.
pub fn make_to_zapier(source: &MakeDocument, registry: &AppRegistry) -> Translation<ZapierDocument> {
    let params = translator_for(Platform::Make, Platform::Zapier);
    let mut tally = Tally::default();
    let mut builder = ZapierBuilder::new(title_or(&source.name, "Imported from Make"));

    for (index, module) in source.flow.iter().enumerate() {
        let Some(app) = registry.resolve(&module.module, Platform::Make, Platform::Zapier) else {
            tally.record_unmapped(Platform::Make, &module.module);
            continue;
        };
        builder.push(
            app,
            module.action().map(str::to_string),
            module_label(module, index),
            params.translate(&module.merged_parameters()),
            None,
        );
        tally.record_mapped();
    }

    Translation {
        document: builder.finish(),
        tally,
    }
}

/// Converts a Make scenario into an n8n workflow, keeping designer coordinates.
pub fn make_to_n8n(source: &MakeDocument, registry: &AppRegistry) -> Translation<N8nDocument> {
    let params = translator_for(Platform::Make, Platform::N8n);
    let mut tally = Tally::default();
    let mut builder = N8nBuilder::new(title_or(&source.name, "Imported from Make"));

    for (index, module) in source.flow.iter().enumerate() {
        let Some(node_type) = registry.resolve(&module.module, Platform::Make, Platform::N8n)
        else {
            tally.record_unmapped(Platform::Make, &module.module);
            continue;
        };
        let position = module
            .metadata
            .designer
            .as_ref()
            .map(|d| [d.x, d.y])
            .unwrap_or_else(|| default_n8n_position(index));
        builder.push(N8nStep {
            node_type: node_type.to_string(),
            name: module_label(module, index),
            parameters: params.translate(&module.merged_parameters()),
            credentials: None,
            position,
        });
        tally.record_mapped();
    }

    Translation {
        document: builder.finish(),
        tally,
    }
}

/// The module's designer name, or `"<app> <n>"` when the blueprint has none.
fn module_label(module: &MakeModule, index: usize) -> String {
    let name = module
        .metadata
        .designer
        .as_ref()
        .and_then(|d| d.name.as_deref())
        .unwrap_or_default();
    label_or(name, module.app(), index)
}
