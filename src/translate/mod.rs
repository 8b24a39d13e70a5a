//! Per-pair translators.
//!
//! Each of the six functions is a single pass over the source steps. A step
//! whose identifier the registry cannot resolve for the target is left out of
//! the output and recorded in the [`Tally`]; every other step is emitted, so
//! one bad step never blocks the rest of the workflow.

use crate::document::{
    Designer, MakeDocument, MakeModule, ModuleMetadata, N8nConnection, N8nDocument, N8nNode,
    ZapierDocument, ZapierStep,
};
use crate::platform::Platform;
use ahash::AHashSet;
use serde_json::{Map, Value, json};
use tracing::debug;
use uuid::Uuid;

mod make;
mod n8n;
mod zapier;

pub use make::{make_to_n8n, make_to_zapier};
pub use n8n::{n8n_to_make, n8n_to_zapier};
pub use zapier::{zapier_to_make, zapier_to_n8n};

/// A translated document together with what happened to each source step.
#[derive(Debug, Clone)]
pub struct Translation<D> {
    pub document: D,
    pub tally: Tally,
}

/// Mapped and unmapped step counts plus one warning per unmapped step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub warnings: Vec<String>,
    pub mapped: usize,
    pub unmapped: usize,
}

impl Tally {
    pub(crate) fn record_mapped(&mut self) {
        self.mapped += 1;
    }

    pub(crate) fn record_unmapped(&mut self, source: Platform, identifier: &str) {
        debug!(%source, identifier, "no registry mapping for step");
        self.unmapped += 1;
        self.warnings.push(unmapped_warning(source, identifier));
    }
}

/// The warning recorded for a step of `source` that could not be mapped.
pub fn unmapped_warning(source: Platform, identifier: &str) -> String {
    format!("Unable to map {}: {}", source.step_noun(), identifier)
}

/// Prefix shared by every unmapped-step warning.
pub const UNMAPPED_WARNING_PREFIX: &str = "Unable to map ";

pub(crate) fn default_n8n_position(index: usize) -> [i64; 2] {
    [250 + index as i64 * 200, 300]
}

pub(crate) fn default_designer(index: usize) -> Designer {
    Designer::at(100 + index as i64 * 200, 100)
}

pub(crate) fn title_or(title: &str, fallback: &str) -> String {
    if title.trim().is_empty() {
        fallback.to_string()
    } else {
        title.to_string()
    }
}

/// A step's label, or `"<app> <n>"` for the step at source position `index`.
pub(crate) fn label_or(label: &str, app: &str, index: usize) -> String {
    if !label.trim().is_empty() {
        label.to_string()
    } else if !app.trim().is_empty() {
        format!("{} {}", app, index + 1)
    } else {
        format!("Step {}", index + 1)
    }
}

/// One resolved step on its way into an n8n workflow.
pub(crate) struct N8nStep {
    pub node_type: String,
    pub name: String,
    pub parameters: Map<String, Value>,
    pub credentials: Option<Value>,
    pub position: [i64; 2],
}

/// Accumulates nodes and wires each one after the previously added node.
pub(crate) struct N8nBuilder {
    document: N8nDocument,
    names: AHashSet<String>,
    previous: Option<String>,
}

impl N8nBuilder {
    pub fn new(name: String) -> Self {
        Self {
            document: N8nDocument {
                id: Uuid::new_v4().to_string(),
                name,
                settings: N8nDocument::default_settings(),
                version_id: Uuid::new_v4().to_string(),
                ..Default::default()
            },
            names: AHashSet::new(),
            previous: None,
        }
    }

    pub fn push(&mut self, step: N8nStep) {
        let name = self.unique_name(step.name);
        if let Some(previous) = self.previous.take() {
            self.document
                .connections
                .insert(previous, N8nConnection::to(name.clone()));
        }
        self.document.nodes.push(N8nNode {
            id: Uuid::new_v4().to_string(),
            name: name.clone(),
            node_type: step.node_type,
            type_version: json!(1),
            position: step.position,
            parameters: step.parameters,
            credentials: step.credentials,
            has_position: true,
        });
        self.previous = Some(name);
    }

    /// n8n keys connections by node name, so names must not repeat.
    fn unique_name(&mut self, base: String) -> String {
        let mut candidate = base.clone();
        let mut suffix = 1;
        while self.names.contains(&candidate) {
            candidate = format!("{} {}", base, suffix);
            suffix += 1;
        }
        self.names.insert(candidate.clone());
        candidate
    }

    pub fn finish(self) -> N8nDocument {
        self.document
    }
}

/// Accumulates Zapier steps with sequential ids.
pub(crate) struct ZapierBuilder {
    document: ZapierDocument,
}

impl ZapierBuilder {
    pub fn new(title: String) -> Self {
        Self {
            document: ZapierDocument {
                title,
                steps: Vec::new(),
            },
        }
    }

    /// Adds a step; without an explicit event the first step is the trigger.
    pub fn push(
        &mut self,
        app: &str,
        event: Option<String>,
        label: String,
        params: Map<String, Value>,
        authentication: Option<Value>,
    ) {
        let position = self.document.steps.len();
        let event = event.unwrap_or_else(|| {
            if position == 0 { "trigger" } else { "action" }.to_string()
        });
        self.document.steps.push(ZapierStep {
            id: json!(position + 1),
            app: app.to_string(),
            event,
            label,
            params,
            authentication,
        });
    }

    pub fn finish(self) -> ZapierDocument {
        self.document
    }
}

/// Accumulates Make modules with sequential ids.
pub(crate) struct MakeBuilder {
    document: MakeDocument,
}

impl MakeBuilder {
    pub fn new(name: String) -> Self {
        Self {
            document: MakeDocument {
                name,
                flow: Vec::new(),
                metadata: MakeDocument::default_metadata(),
            },
        }
    }

    /// Adds a module; `label` is shown as the module name on the Make canvas.
    pub fn push(
        &mut self,
        module: &str,
        label: String,
        parameters: Map<String, Value>,
        designer: Designer,
    ) {
        let id = self.document.flow.len() + 1;
        self.document.flow.push(MakeModule {
            id: json!(id),
            module: module.to_string(),
            version: 1,
            parameters,
            mapper: Map::new(),
            metadata: ModuleMetadata {
                designer: Some(designer.named(label)),
            },
        });
    }

    pub fn finish(self) -> MakeDocument {
        self.document
    }
}
