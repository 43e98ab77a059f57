//! Locations of the persisted reference vocabulary files.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "DDV_STANDARDS_DIR";

pub const ABBREVIATIONS_FILE: &str = "abbreviations.csv";
pub const CLASS_WORDS_FILE: &str = "class_words.csv";
pub const DOMAIN_RULES_FILE: &str = "domain_rules.txt";

/// Get the default standards root directory.
///
/// Checks the `DDV_STANDARDS_DIR` environment variable first, then falls back
/// to `standards/` under the current working directory.
pub fn default_standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR)
        && !root.trim().is_empty()
    {
        return PathBuf::from(root);
    }
    PathBuf::from("standards")
}

/// Paths of the three reference files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardsPaths {
    pub abbreviations: PathBuf,
    pub class_words: PathBuf,
    pub domain_rules: PathBuf,
}

impl StandardsPaths {
    /// Standard file names under `root`.
    pub fn from_root(root: &Path) -> Self {
        Self {
            abbreviations: root.join(ABBREVIATIONS_FILE),
            class_words: root.join(CLASS_WORDS_FILE),
            domain_rules: root.join(DOMAIN_RULES_FILE),
        }
    }

    #[must_use]
    pub fn with_abbreviations(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.abbreviations = path;
        }
        self
    }

    #[must_use]
    pub fn with_class_words(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.class_words = path;
        }
        self
    }

    #[must_use]
    pub fn with_domain_rules(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.domain_rules = path;
        }
        self
    }
}

impl Default for StandardsPaths {
    fn default() -> Self {
        Self::from_root(&default_standards_root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_paths() {
        let paths = StandardsPaths::from_root(Path::new("/ref"))
            .with_class_words(Some(PathBuf::from("/tmp/cw.csv")))
            .with_abbreviations(None);
        assert_eq!(paths.abbreviations, PathBuf::from("/ref/abbreviations.csv"));
        assert_eq!(paths.class_words, PathBuf::from("/tmp/cw.csv"));
        assert_eq!(paths.domain_rules, PathBuf::from("/ref/domain_rules.txt"));
    }
}
