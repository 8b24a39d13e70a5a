use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Engine-internal identifier for an integration concept, e.g. `google-sheets`.
///
/// Keys are always normalized: lowercase ASCII alphanumerics separated by
/// single hyphens, with no leading or trailing hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CapabilityKey(String);

impl CapabilityKey {
    /// Normalizes `raw` into a key. Returns `None` when nothing survives normalization.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CapabilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercases, turns every non-alphanumeric run into one `-`, and trims hyphens.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// One registry row: the native identifier of a capability on each platform.
///
/// A `None` field means the platform has no equivalent integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zapier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n8n: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
}

impl AppMapping {
    pub fn new(zapier: Option<&str>, n8n: Option<&str>, make: Option<&str>) -> Self {
        Self {
            zapier: zapier.map(str::to_string),
            n8n: n8n.map(str::to_string),
            make: make.map(str::to_string),
        }
    }

    pub fn native_id(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Zapier => self.zapier.as_deref(),
            Platform::N8n => self.n8n.as_deref(),
            Platform::Make => self.make.as_deref(),
        }
    }

    /// True when the capability exists on every platform.
    pub fn is_complete(&self) -> bool {
        Platform::ALL.iter().all(|p| self.native_id(*p).is_some())
    }
}

/// The comparable form of a native identifier on `platform`.
///
/// Zapier app names arrive as display text ("Google Sheets") and are compared
/// in normalized form. Make module ids and n8n node types are compared
/// verbatim, apart from surrounding whitespace.
pub(crate) fn lookup_form(native_id: &str, platform: Platform) -> Cow<'_, str> {
    let trimmed = native_id.trim();
    match platform {
        Platform::Zapier => Cow::Owned(normalize(trimmed)),
        Platform::Make | Platform::N8n => Cow::Borrowed(trimmed),
    }
}

/// The app namespace of a Make module id: the text before the first `:`.
pub(crate) fn make_namespace(module: &str) -> &str {
    let trimmed = module.trim();
    trimmed.split(':').next().unwrap_or(trimmed)
}
