//! Site settings (`news-fusion.yaml`) and the resolved project layout
//!
//! Every setting is optional. Relative paths are resolved against the
//! project root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CategoryRegistry, SourceRegistry, load_list_or_empty};
use crate::error::{self, Result};

/// Name of the optional settings file in the project root
pub const CONFIG_FILE: &str = "news-fusion.yaml";

const DEFAULT_CONTENT_DIR: &str = "web/content/articles";
const DEFAULT_SOURCES_FILE: &str = "web/content/sources.json";
const DEFAULT_CATEGORIES_FILE: &str = "web/content/categories.json";
const DEFAULT_OUT_DIR: &str = "web/dist";
const DEFAULT_TITLE: &str = "News Fusion — Static";
const DEFAULT_HEADING: &str = "News Fusion (single-file)";
const DEFAULT_LANG: &str = "zh-Hant";

/// Contents of `news-fusion.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// `<title>` of the generated page
    pub title: Option<String>,
    /// `<h1>` of the generated page
    pub heading: Option<String>,
    /// `lang` attribute of the generated page
    pub lang: Option<String>,
    pub content_dir: Option<PathBuf>,
    pub sources_file: Option<PathBuf>,
    pub categories_file: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
}

impl SiteConfig {
    /// Parse site settings from YAML string; blank input means defaults.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load `news-fusion.yaml` from `root`; a missing file means defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content)
            .map_err(|e| error::config::parse_failed(path.display().to_string(), e.to_string()))
    }
}

/// Fully resolved paths and page settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub root: PathBuf,
    pub content_dir: PathBuf,
    pub sources_file: PathBuf,
    pub categories_file: PathBuf,
    pub out_dir: PathBuf,
    pub title: String,
    pub heading: String,
    pub lang: String,
}

impl SiteLayout {
    /// Apply `config` on top of the defaults for `root`
    pub fn resolve(root: &Path, config: &SiteConfig) -> Self {
        let path = |value: &Option<PathBuf>, default: &str| {
            root.join(value.as_deref().unwrap_or_else(|| Path::new(default)))
        };
        let text = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };

        Self {
            root: root.to_path_buf(),
            content_dir: path(&config.content_dir, DEFAULT_CONTENT_DIR),
            sources_file: path(&config.sources_file, DEFAULT_SOURCES_FILE),
            categories_file: path(&config.categories_file, DEFAULT_CATEGORIES_FILE),
            out_dir: path(&config.out_dir, DEFAULT_OUT_DIR),
            title: text(&config.title, DEFAULT_TITLE),
            heading: text(&config.heading, DEFAULT_HEADING),
            lang: text(&config.lang, DEFAULT_LANG),
        }
    }

    /// Read `news-fusion.yaml` under `root` and resolve the layout
    pub fn load(root: &Path) -> Result<Self> {
        let config = SiteConfig::load(root)?;
        Ok(Self::resolve(root, &config))
    }

    pub fn load_sources(&self) -> SourceRegistry {
        SourceRegistry::new(load_list_or_empty(&self.sources_file))
    }

    pub fn load_categories(&self) -> CategoryRegistry {
        CategoryRegistry::new(load_list_or_empty(&self.categories_file))
    }
}
