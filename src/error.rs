use thiserror::Error;

/// Errors raised when a platform tag outside the supported set is given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Unknown platform '{0}', expected one of: zapier, n8n, make")]
    Unknown(String),
}

/// Errors that can occur while parsing a workflow document strictly.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParseError(String),

    #[error("Document does not match the {platform} workflow shape: {message}")]
    Shape { platform: String, message: String },
}

/// Errors that can occur when guessing the platform of an uploaded document.
#[derive(Error, Debug, Clone)]
pub enum DetectionError {
    #[error("Workflow document must be a JSON object")]
    NotAnObject,

    #[error("Could not recognise the workflow format (top-level keys: {0})")]
    Unrecognized(String),
}

/// Errors that can occur when building an app registry from user mappings.
#[derive(Error, Debug, Clone)]
pub enum RegistryError {
    #[error("Failed to parse app mappings JSON: {0}")]
    JsonParseError(String),

    #[error("Capability key '{0}' is empty after normalization")]
    InvalidCapability(String),
}
