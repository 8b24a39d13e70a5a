//! The conversion facade: one entry point for every platform pair.

use crate::document::WorkflowDocument;
use crate::error::DocumentError;
use crate::platform::Platform;
use crate::registry::AppRegistry;
use crate::translate::{self, Tally, Translation};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

mod naming;

pub use naming::output_file_name;

/// Warning returned when source and target platform have no translator.
pub const UNSUPPORTED_PAIR_WARNING: &str = "Direct conversion not implemented for this platform pair";

/// The outcome of converting one workflow to one target platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub platform: Platform,
    pub workflow: WorkflowDocument,
    pub validation: Validation,
}

/// How much of the source workflow made it into the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// True only when every step mapped and nothing was worth warning about.
    pub success: bool,
    pub warnings: Vec<String>,
    pub mapped_steps: usize,
    pub unmapped_steps: usize,
}

impl Validation {
    fn from_tally(tally: Tally) -> Self {
        Self {
            success: tally.warnings.is_empty() && tally.unmapped == 0,
            warnings: tally.warnings,
            mapped_steps: tally.mapped,
            unmapped_steps: tally.unmapped,
        }
    }

    fn unsupported() -> Self {
        Self {
            success: false,
            warnings: vec![UNSUPPORTED_PAIR_WARNING.to_string()],
            mapped_steps: 0,
            unmapped_steps: 0,
        }
    }

    /// Fraction of source steps that mapped; `1.0` when there were none.
    pub fn coverage(&self) -> f64 {
        let total = self.mapped_steps + self.unmapped_steps;
        if total == 0 {
            1.0
        } else {
            self.mapped_steps as f64 / total as f64
        }
    }

    /// Coverage as a whole percentage.
    pub fn confidence(&self) -> u8 {
        (self.coverage() * 100.0).round() as u8
    }
}

/// Converts workflows using a particular app registry.
///
/// A `Converter` only borrows its registry, so one registry can serve any
/// number of converters across threads.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'r> {
    registry: &'r AppRegistry,
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new(AppRegistry::global())
    }
}

impl<'r> Converter<'r> {
    pub fn new(registry: &'r AppRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r AppRegistry {
        self.registry
    }

    /// Converts an untyped `source` document from one platform to another.
    ///
    /// Never fails. Missing or malformed parts of `source` are treated as
    /// empty, and a same-platform request returns `source` untouched.
    pub fn convert(&self, source: &Value, from: Platform, to: Platform) -> ConversionResult {
        if from == to {
            return fallback(WorkflowDocument::Raw(source.clone()), to);
        }
        self.convert_document(&WorkflowDocument::coerce(source, from), to)
    }

    /// Converts an already typed document.
    pub fn convert_document(&self, source: &WorkflowDocument, to: Platform) -> ConversionResult {
        let registry = self.registry;
        let (workflow, tally) = match (source, to) {
            (WorkflowDocument::Zapier(doc), Platform::N8n) => {
                typed(translate::zapier_to_n8n(doc, registry), WorkflowDocument::N8n)
            }
            (WorkflowDocument::Zapier(doc), Platform::Make) => {
                typed(translate::zapier_to_make(doc, registry), WorkflowDocument::Make)
            }
            (WorkflowDocument::N8n(doc), Platform::Zapier) => {
                typed(translate::n8n_to_zapier(doc, registry), WorkflowDocument::Zapier)
            }
            (WorkflowDocument::N8n(doc), Platform::Make) => {
                typed(translate::n8n_to_make(doc, registry), WorkflowDocument::Make)
            }
            (WorkflowDocument::Make(doc), Platform::Zapier) => {
                typed(translate::make_to_zapier(doc, registry), WorkflowDocument::Zapier)
            }
            (WorkflowDocument::Make(doc), Platform::N8n) => {
                typed(translate::make_to_n8n(doc, registry), WorkflowDocument::N8n)
            }
            _ => return fallback(source.clone(), to),
        };

        let validation = Validation::from_tally(tally);
        info!(
            from = ?source.platform(),
            %to,
            mapped = validation.mapped_steps,
            unmapped = validation.unmapped_steps,
            "converted workflow"
        );

        ConversionResult {
            platform: to,
            workflow,
            validation,
        }
    }

    /// Converts `source` to every platform other than `from`, in [`Platform::ALL`] order.
    pub fn convert_to_all(&self, source: &Value, from: Platform) -> Vec<ConversionResult> {
        let document = WorkflowDocument::coerce(source, from);
        from.others()
            .map(|to| self.convert_document(&document, to))
            .collect()
    }
}

fn typed<D>(
    translation: Translation<D>,
    wrap: fn(D) -> WorkflowDocument,
) -> (WorkflowDocument, Tally) {
    (wrap(translation.document), translation.tally)
}

fn fallback(workflow: WorkflowDocument, to: Platform) -> ConversionResult {
    warn!(
        from = ?workflow.platform(),
        %to,
        "no translator for platform pair, returning source unchanged"
    );
    ConversionResult {
        platform: to,
        workflow,
        validation: Validation::unsupported(),
    }
}

/// Converts with the built-in registry. See [`Converter::convert`].
pub fn convert(source: &Value, from: Platform, to: Platform) -> ConversionResult {
    Converter::default().convert(source, from, to)
}

/// Converts to every other platform with the built-in registry.
pub fn convert_to_all(source: &Value, from: Platform) -> Vec<ConversionResult> {
    Converter::default().convert_to_all(source, from)
}

/// Parses JSON text, then converts it with the built-in registry.
///
/// The only error is text that is not JSON at all.
pub fn convert_str(json: &str, from: Platform, to: Platform) -> Result<ConversionResult, DocumentError> {
    let source: Value =
        serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))?;
    Ok(convert(&source, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_of_empty_conversion_is_full() {
        let validation = Validation::from_tally(Tally::default());
        assert!(validation.success);
        assert_eq!(validation.coverage(), 1.0);
        assert_eq!(validation.confidence(), 100);
    }

    #[test]
    fn success_requires_no_warnings_and_no_unmapped() {
        let tally = Tally {
            warnings: vec![],
            mapped: 2,
            unmapped: 1,
        };
        let validation = Validation::from_tally(tally);
        assert!(!validation.success);
        assert_eq!(validation.confidence(), 67);
    }
}
