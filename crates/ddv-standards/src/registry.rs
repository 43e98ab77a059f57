use tracing::info_span;

use ddv_model::{AbbreviationDictionary, ClassWordSet, ClassWordTypeMap};

use crate::class_word_types::default_class_word_type_map;
use crate::error::Result;
use crate::loaders::{load_abbreviations, load_class_words, load_domain_rules};
use crate::paths::StandardsPaths;

/// Session-scoped reference vocabulary, read-only during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub abbreviations: AbbreviationDictionary,
    pub class_words: ClassWordSet,
    pub class_word_types: ClassWordTypeMap,
    /// Opaque naming rules text handed to the correction advisor.
    pub domain_rules: String,
}

impl ReferenceData {
    /// Load all reference files. The class-word type map starts from the
    /// built-in table; `type_overrides` replaces or adds codes on top of it.
    pub fn load(paths: &StandardsPaths, type_overrides: &ClassWordTypeMap) -> Result<Self> {
        let span = info_span!("load_standards");
        let _guard = span.enter();

        let abbreviations = load_abbreviations(&paths.abbreviations)?;
        let class_words = load_class_words(&paths.class_words)?;
        let domain_rules = load_domain_rules(&paths.domain_rules)?;
        let mut class_word_types = default_class_word_type_map();
        class_word_types.merge(type_overrides);

        Ok(Self {
            abbreviations,
            class_words,
            class_word_types,
            domain_rules,
        })
    }
}
