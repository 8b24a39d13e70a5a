//! # flowport - Workflow Conversion Engine
//!
//! **flowport** converts workflow-automation exports between Zapier, n8n and
//! Make. It reads a source platform's workflow JSON, maps every step to the
//! equivalent integration on the target platform, translates step parameters,
//! rebuilds execution order in the target format, and reports exactly which
//! steps could not be carried over.
//!
//! ## Core Workflow
//!
//! 1.  **Load the export**: deserialize the uploaded file into a `serde_json::Value`.
//!     If the caller does not know the source platform, [`document::detect_platform`]
//!     guesses it from the document's top-level keys.
//! 2.  **Convert**: call [`convert`] with the source and target [`Platform`]. The
//!     engine never fails on document content: missing fields are defaulted and
//!     unknown apps are reported, not raised.
//! 3.  **Inspect the validation**: `mapped_steps + unmapped_steps` always equals the
//!     number of source steps, and each unmapped step has exactly one warning.
//! 4.  **Save**: serialize the converted workflow under [`output_file_name`].
//!
//! Which integrations are equivalent is decided by the [`AppRegistry`]. The
//! built-in table covers common email, messaging, CRM, storage, HTTP, code and
//! AI integrations; [`AppRegistry::builder`] extends it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowport::prelude::*;
//! use serde_json::json;
//!
//! let zap = json!({
//!     "title": "New lead alert",
//!     "steps": [
//!         { "id": 1, "app": "Gmail", "event": "new_email", "params": {} },
//!         { "id": 2, "app": "Slack", "event": "send_message", "params": { "channel": "#leads" } },
//!         { "id": 3, "app": "LegacyCRM", "event": "create_lead", "params": {} }
//!     ]
//! });
//!
//! let result = convert(&zap, Platform::Zapier, Platform::N8n);
//!
//! println!("Mapped {} of {} steps", result.validation.mapped_steps,
//!     result.validation.mapped_steps + result.validation.unmapped_steps);
//! for warning in &result.validation.warnings {
//!     println!("  - {}", warning);
//! }
//!
//! let file_name = output_file_name(result.workflow.name().unwrap_or_default(), result.platform);
//! let json = result.workflow.to_json_pretty().expect("workflow serializes");
//! std::fs::write(file_name, json).expect("write converted workflow");
//! ```
//!
//! ## Custom mappings
//!
//! ```rust,no_run
//! use flowport::prelude::*;
//! use serde_json::json;
//!
//! let registry = AppRegistry::builder()
//!     .with_mapping(
//!         CapabilityKey::new("clickup").unwrap(),
//!         AppMapping::new(Some("clickup"), Some("n8n-nodes-base.clickUp"), Some("clickup:createTask")),
//!     )
//!     .build();
//!
//! let converter = Converter::new(&registry);
//! let result = converter.convert(
//!     &json!({ "steps": [{ "app": "ClickUp" }] }),
//!     Platform::Zapier,
//!     Platform::Make,
//! );
//! assert!(result.validation.success);
//! ```

pub mod analysis;
pub mod conversion;
pub mod document;
pub mod error;
pub mod params;
pub mod platform;
pub mod prelude;
pub mod registry;
pub mod translate;

#[cfg(feature = "python-bindings")]
mod python;

pub use conversion::{
    ConversionResult, Converter, Validation, convert, convert_str, convert_to_all,
    output_file_name,
};
pub use platform::Platform;
pub use registry::AppRegistry;
