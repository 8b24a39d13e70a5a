//! The app schema registry: which native identifier means the same
//! integration on Zapier, n8n and Make.
//!
//! The registry is deliberately finite. A native identifier it does not know
//! is an expected condition that translators report as an unmapped step.

use crate::error::RegistryError;
use crate::platform::Platform;
use ahash::AHashMap;
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

mod defaults;
mod mapping;

pub use defaults::DEFAULT_CAPABILITIES;
pub use mapping::{AppMapping, CapabilityKey, normalize};

use mapping::{lookup_form, make_namespace};

static DEFAULT_REGISTRY: Lazy<AppRegistry> = Lazy::new(|| AppRegistry::builder().build());

/// An immutable capability table with per-platform reverse indexes.
///
/// Build one with [`AppRegistry::builder`], or share the process-wide
/// built-in table through [`AppRegistry::global`].
#[derive(Debug, Clone)]
pub struct AppRegistry {
    entries: Vec<(CapabilityKey, AppMapping)>,
    positions: AHashMap<CapabilityKey, usize>,
    reverse: [AHashMap<String, usize>; 3],
    /// Make app namespace to its row; `None` when several rows share it.
    make_apps: AHashMap<String, Option<usize>>,
}

/// Collects capability rows before the registry indexes are built.
pub struct RegistryBuilder {
    entries: Vec<(CapabilityKey, AppMapping)>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        let entries = defaults::default_mappings()
            .into_iter()
            .filter_map(|(key, mapping)| CapabilityKey::new(key).map(|k| (k, mapping)))
            .collect();
        Self { entries }
    }

    /// Drops the built-in table so only explicitly added rows remain.
    pub fn without_defaults(mut self) -> Self {
        self.entries.clear();
        self
    }

    /// Adds a row, or replaces the row of an existing key in place.
    pub fn with_mapping(mut self, key: CapabilityKey, mapping: AppMapping) -> Self {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = mapping,
            None => self.entries.push((key, mapping)),
        }
        self
    }

    /// Adds every row of a JSON object shaped like
    /// `{ "<capability>": { "zapier": "...", "n8n": "...", "make": "..." } }`.
    pub fn with_json_mappings(mut self, json: &str) -> Result<Self, RegistryError> {
        let rows: BTreeMap<String, AppMapping> =
            serde_json::from_str(json).map_err(|e| RegistryError::JsonParseError(e.to_string()))?;
        for (raw_key, mapping) in rows {
            let key = CapabilityKey::new(&raw_key)
                .ok_or_else(|| RegistryError::InvalidCapability(raw_key.clone()))?;
            self = self.with_mapping(key, mapping);
        }
        Ok(self)
    }

    pub fn build(self) -> AppRegistry {
        let mut positions = AHashMap::with_capacity(self.entries.len());
        let mut reverse: [AHashMap<String, usize>; 3] = Default::default();
        let mut make_apps: AHashMap<String, Option<usize>> = AHashMap::new();

        for (index, (key, mapping)) in self.entries.iter().enumerate() {
            positions.insert(key.clone(), index);
            for platform in Platform::ALL {
                if let Some(native) = mapping.native_id(platform) {
                    let form = lookup_form(native, platform).into_owned();
                    if form.is_empty() {
                        continue;
                    }
                    // First row wins, matching a top-down scan of the table.
                    reverse[slot(platform)].entry(form).or_insert(index);
                }
            }
            if let Some(module) = mapping.make.as_deref() {
                let app = make_namespace(module);
                if !app.is_empty() {
                    make_apps
                        .entry(app.to_string())
                        .and_modify(|row| *row = None)
                        .or_insert(Some(index));
                }
            }
        }

        AppRegistry {
            entries: self.entries,
            positions,
            reverse,
            make_apps,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppRegistry {
    /// Starts from the built-in table.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The built-in table, constructed once per process.
    pub fn global() -> &'static AppRegistry {
        &DEFAULT_REGISTRY
    }

    /// The built-in table extended (or overridden) by JSON mappings.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Ok(Self::builder().with_json_mappings(json)?.build())
    }

    /// The native identifier of `key` on `platform`, if that platform has one.
    pub fn forward(&self, key: &CapabilityKey, platform: Platform) -> Option<&str> {
        self.get(key)?.native_id(platform)
    }

    /// The capability behind a native identifier of `platform`.
    ///
    /// Make module ids are matched whole first. An action the table does not
    /// list (`slack:ListChannels`) falls back to its app namespace, but only
    /// when exactly one row uses that namespace.
    pub fn reverse(&self, native_id: &str, platform: Platform) -> Option<&CapabilityKey> {
        let form = lookup_form(native_id, platform);
        let index = match self.reverse[slot(platform)].get(&*form) {
            Some(&index) => Some(index),
            None if platform == Platform::Make => {
                self.make_apps.get(make_namespace(&form)).copied().flatten()
            }
            None => None,
        };
        index.map(|index| &self.entries[index].0)
    }

    /// The capability a source step refers to.
    ///
    /// A Zapier `app` may name the capability itself (`"http"`, `"Google Drive"`),
    /// so Zapier identifiers are tried as capability keys before the reverse index.
    pub fn capability(&self, native_id: &str, platform: Platform) -> Option<&CapabilityKey> {
        if platform == Platform::Zapier {
            let by_key = CapabilityKey::new(native_id).and_then(|key| self.positions.get(&key).copied());
            if let Some(index) = by_key {
                return Some(&self.entries[index].0);
            }
        }
        self.reverse(native_id, platform)
    }

    /// Translates a native identifier straight from `source` to `target`.
    pub fn resolve(&self, native_id: &str, source: Platform, target: Platform) -> Option<&str> {
        let key = self.capability(native_id, source)?;
        self.forward(key, target)
    }

    pub fn get(&self, key: &CapabilityKey) -> Option<&AppMapping> {
        self.positions.get(key).map(|&index| &self.entries[index].1)
    }

    /// Capability keys in table order.
    pub fn capabilities(&self) -> impl Iterator<Item = &CapabilityKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Every distinct native identifier known for `platform`, sorted.
    pub fn native_ids(&self, platform: Platform) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|(_, mapping)| mapping.native_id(platform))
            .sorted()
            .dedup()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn slot(platform: Platform) -> usize {
    match platform {
        Platform::Zapier => 0,
        Platform::N8n => 1,
        Platform::Make => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> CapabilityKey {
        CapabilityKey::new(raw).unwrap()
    }

    #[test]
    fn default_table_has_every_listed_capability() {
        let registry = AppRegistry::global();
        assert_eq!(registry.len(), DEFAULT_CAPABILITIES.len());
        for raw in DEFAULT_CAPABILITIES {
            assert!(registry.get(&key(raw)).is_some(), "missing {}", raw);
        }
    }

    #[test]
    fn replacing_a_row_keeps_its_position() {
        let registry = AppRegistry::builder()
            .with_mapping(key("gmail"), AppMapping::new(Some("gmail"), None, None))
            .build();
        assert_eq!(registry.capabilities().next(), Some(&key("gmail")));
        assert_eq!(registry.forward(&key("gmail"), Platform::N8n), None);
        assert_eq!(registry.reverse("n8n-nodes-base.gmail", Platform::N8n), None);
    }

    #[test]
    fn shared_native_id_resolves_to_first_row() {
        let registry = AppRegistry::global();
        assert_eq!(
            registry.reverse("webhook", Platform::Zapier),
            Some(&key("webhook"))
        );
    }

    #[test]
    fn native_ids_are_sorted_and_distinct() {
        let ids = AppRegistry::global().native_ids(Platform::Zapier);
        assert_eq!(ids.iter().filter(|id| **id == "webhook").count(), 1);
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn shared_make_namespace_is_not_guessed() {
        let registry = AppRegistry::builder()
            .without_defaults()
            .with_mapping(key("gmail"), AppMapping::new(None, None, Some("google:gmail")))
            .with_mapping(key("google-sheets"), AppMapping::new(None, None, Some("google:sheets")))
            .with_mapping(key("slack"), AppMapping::new(None, None, Some("slack:CreateMessage")))
            .build();
        assert_eq!(registry.reverse("google:sheets", Platform::Make), Some(&key("google-sheets")));
        assert_eq!(registry.reverse("google:gmail", Platform::Make), Some(&key("gmail")));
        assert_eq!(registry.reverse("google:docs", Platform::Make), None);
        assert_eq!(registry.reverse("slack:ListChannels", Platform::Make), Some(&key("slack")));
    }

    #[test]
    fn zapier_app_may_be_a_capability_key() {
        let registry = AppRegistry::global();
        assert_eq!(registry.capability("http", Platform::Zapier), Some(&key("http")));
        assert_eq!(registry.reverse("http", Platform::Zapier), None);
        assert_eq!(registry.capability("webhook", Platform::Zapier), Some(&key("webhook")));
        assert_eq!(
            registry.resolve("http", Platform::Zapier, Platform::N8n),
            Some("n8n-nodes-base.httpRequest")
        );
    }
}
