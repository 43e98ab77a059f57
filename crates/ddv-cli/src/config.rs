//! `ddv.toml` configuration.
//!
//! Every section is optional and defaulted. CLI flags are applied on top of
//! the loaded values by the command layer.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use ddv_advisor::AdvisorSettings;
use ddv_model::ClassWordTypeMap;
use ddv_standards::{StandardsPaths, default_standards_root};
use ddv_validate::TableNameRules;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "ddv.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardsSection {
    /// Directory holding the three reference files.
    pub dir: Option<PathBuf>,
    pub abbreviations: Option<PathBuf>,
    pub class_words: Option<PathBuf>,
    pub domain_rules: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DdvConfig {
    pub standards: StandardsSection,
    pub table_names: TableNameRules,
    /// Extra or replacement `CODE = ["TYPE", ...]` entries.
    pub class_word_types: BTreeMap<String, Vec<String>>,
    pub advisor: AdvisorSettings,
}

impl DdvConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse configuration")
    }

    /// Load `explicit`, or `ddv.toml` from the working directory if present.
    ///
    /// An explicit path must exist; the implicit file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        match fs::read_to_string(&path) {
            Ok(text) => {
                let config = Self::from_toml_str(&text)
                    .with_context(|| format!("load {}", path.display()))?;
                tracing::debug!(path = %path.display(), "loaded configuration");
                Ok(config)
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound && !required => {
                tracing::debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
            Err(error) => Err(error).with_context(|| format!("read {}", path.display())),
        }
    }

    /// Reference file locations: per-file settings, then `dir`, then the
    /// `DDV_STANDARDS_DIR` / `./standards` fallback.
    pub fn standards_paths(&self) -> StandardsPaths {
        let root = self
            .standards
            .dir
            .clone()
            .unwrap_or_else(default_standards_root);
        StandardsPaths::from_root(&root)
            .with_abbreviations(self.standards.abbreviations.clone())
            .with_class_words(self.standards.class_words.clone())
            .with_domain_rules(self.standards.domain_rules.clone())
    }

    pub fn class_word_type_overrides(&self) -> ClassWordTypeMap {
        let mut overrides = ClassWordTypeMap::new();
        for (code, types) in &self.class_word_types {
            overrides.insert(code, types);
        }
        overrides
    }
}
