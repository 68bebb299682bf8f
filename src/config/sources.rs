//! Known publishers (`sources.json`)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Source id used when nothing identifies the publisher
pub const OTHER_SOURCE_ID: &str = "other";

/// A publisher an article can be attributed to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    /// Canonical slug, e.g. `9to5google`
    pub id: String,

    /// Display name
    pub name: String,

    /// Hostname suffixes owned by this publisher, e.g. `9to5google.com`
    #[serde(default)]
    pub domains: Vec<String>,
}

#[cfg(test)]
impl Source {
    pub fn new(id: impl Into<String>, name: impl Into<String>, domains: &[&str]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domains: domains.iter().map(|d| (*d).to_string()).collect(),
        }
    }
}

/// Configured sources in file order, indexed by id.
///
/// Lookups that scan (domain, name) walk the sources in file order so the
/// first configured match wins.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    sources: Vec<Source>,
    by_id: HashMap<String, usize>,
}

impl SourceRegistry {
    /// Build the registry; a repeated id keeps its first definition.
    ///
    /// Domains are trimmed and lowercased so they compare against
    /// lowercase hostnames.
    pub fn new(sources: impl IntoIterator<Item = Source>) -> Self {
        let mut registry = Self::default();
        for mut source in sources {
            if registry.by_id.contains_key(&source.id) {
                tracing::warn!(id = %source.id, "duplicate source id ignored");
                continue;
            }
            source.domains = source
                .domains
                .iter()
                .map(|d| d.trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect();
            registry.by_id.insert(source.id.clone(), registry.sources.len());
            registry.sources.push(source);
        }
        registry
    }

    pub fn is_valid(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Source> {
        self.by_id.get(id).map(|&i| &self.sources[i])
    }

    pub fn ids(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter()
    }
}
