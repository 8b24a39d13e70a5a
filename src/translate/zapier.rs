use super::{
    MakeBuilder, N8nBuilder, N8nStep, Tally, Translation, default_designer, default_n8n_position,
    label_or, title_or,
};
use crate::document::{MakeDocument, N8nDocument, ZapierDocument};
use crate::params::translator_for;
use crate::platform::Platform;
use crate::registry::AppRegistry;

/// Converts a Zap into an n8n workflow with the steps chained in order.
pub fn zapier_to_n8n(source: &ZapierDocument, registry: &AppRegistry) -> Translation<N8nDocument> {
    let params = translator_for(Platform::Zapier, Platform::N8n);
    let mut tally = Tally::default();
    let mut builder = N8nBuilder::new(title_or(&source.title, "Imported from Zapier"));

    for (index, step) in source.steps.iter().enumerate() {
        let Some(node_type) = registry.resolve(&step.app, Platform::Zapier, Platform::N8n) else {
            tally.record_unmapped(Platform::Zapier, &step.app);
            continue;
        };
        builder.push(N8nStep {
            node_type: node_type.to_string(),
            name: label_or(&step.label, &step.app, index),
            parameters: params.translate(&step.params),
            credentials: step.authentication.clone(),
            position: default_n8n_position(index),
        });
        tally.record_mapped();
    }

    Translation {
        document: builder.finish(),
        tally,
    }
}

/// Converts a Zap into a Make scenario.
///
/// Make modules carry no credential reference, so step authentication is dropped.
pub fn zapier_to_make(source: &ZapierDocument, registry: &AppRegistry) -> Translation<MakeDocument> {
    let params = translator_for(Platform::Zapier, Platform::Make);
    let mut tally = Tally::default();
    let mut builder = MakeBuilder::new(title_or(&source.title, "Imported from Zapier"));

    for (index, step) in source.steps.iter().enumerate() {
        let Some(module) = registry.resolve(&step.app, Platform::Zapier, Platform::Make) else {
            tally.record_unmapped(Platform::Zapier, &step.app);
            continue;
        };
        builder.push(
            module,
            label_or(&step.label, &step.app, index),
            params.translate(&step.params),
            default_designer(index),
        );
        tally.record_mapped();
    }

    Translation {
        document: builder.finish(),
        tally,
    }
}
