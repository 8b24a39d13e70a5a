//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions of the
//! flowport crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowport::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let export = std::fs::read_to_string("path/to/workflow.json")?;
//! let source: serde_json::Value = serde_json::from_str(&export)?;
//!
//! let platform = detect_platform(&source)?;
//! for result in convert_to_all(&source, platform) {
//!     println!(
//!         "{}: {}% of steps mapped",
//!         result.platform,
//!         result.validation.confidence()
//!     );
//! }
//! # Ok(())
//! # }
//! ```

// Conversion entry points
pub use crate::conversion::{
    ConversionResult, Converter, UNSUPPORTED_PAIR_WARNING, Validation, convert, convert_str,
    convert_to_all, output_file_name,
};

// Documents and platforms
pub use crate::document::{
    MakeDocument, N8nDocument, WorkflowDocument, ZapierDocument, detect_platform,
};
pub use crate::platform::Platform;

// Registry
pub use crate::registry::{AppMapping, AppRegistry, CapabilityKey};

// Analysis
pub use crate::analysis::{ComplexityLevel, ComplexityReport, analyze};

// Error types
pub use crate::error::{DetectionError, DocumentError, PlatformError, RegistryError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
