//! Source resolution: map an article's metadata to one canonical source id.
//!
//! Two priority chains exist:
//! - [`SourceRegistry::detect_source_id`]: declared id, then URL domain.
//!   Used when building the page.
//! - [`SourceRegistry::detect_source_id_with_name`]: declared id, URL domain,
//!   then display name. The scaffolder only uses it to hint at `--source`.
//!
//! Both return [`OTHER_SOURCE_ID`] when nothing matches.

use url::Url;

use crate::config::{OTHER_SOURCE_ID, Source, SourceRegistry};

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Lowercase hostname of `url`, if it parses and has one
pub fn hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?;
    if host.is_empty() {
        return None;
    }
    Some(host.to_lowercase())
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

impl SourceRegistry {
    /// Source whose declared id matches after trimming and lowercasing
    fn by_declared_id(&self, declared_id: Option<&str>) -> Option<&Source> {
        let id = normalize(declared_id?);
        if id.is_empty() {
            return None;
        }
        self.get(&id)
    }

    /// First source (in configuration order) owning the URL's hostname
    pub fn source_by_domain(&self, source_url: Option<&str>) -> Option<&Source> {
        let host = hostname(source_url?)?;
        self.iter()
            .find(|source| source.domains.iter().any(|domain| host_matches(&host, domain)))
    }

    /// First source (in configuration order) whose display name matches
    fn source_by_name(&self, source_name: Option<&str>) -> Option<&Source> {
        let name = normalize(source_name?);
        if name.is_empty() {
            return None;
        }
        self.iter().find(|source| normalize(&source.name) == name)
    }

    /// Resolve by declared id, then URL domain, else `"other"`.
    pub fn detect_source_id(&self, declared_id: Option<&str>, source_url: Option<&str>) -> &str {
        self.by_declared_id(declared_id)
            .or_else(|| self.source_by_domain(source_url))
            .map_or(OTHER_SOURCE_ID, |source| source.id.as_str())
    }

    /// Resolve by declared id, then URL domain, then display name, else `"other"`.
    pub fn detect_source_id_with_name(
        &self,
        declared_id: Option<&str>,
        source_url: Option<&str>,
        source_name: Option<&str>,
    ) -> &str {
        self.by_declared_id(declared_id)
            .or_else(|| self.source_by_domain(source_url))
            .or_else(|| self.source_by_name(source_name))
            .map_or(OTHER_SOURCE_ID, |source| source.id.as_str())
    }

    /// Label shown next to an article: configured name, then the article's
    /// own `sourceName`, then the id.
    pub fn source_label<'a>(&'a self, source_id: &'a str, source_name: Option<&'a str>) -> &'a str {
        if let Some(source) = self.get(source_id) {
            if !source.name.is_empty() {
                return &source.name;
            }
        }
        source_name.filter(|n| !n.is_empty()).unwrap_or(source_id)
    }
}
