#![deny(unsafe_code)]

pub mod class_word_types;
pub mod csv_utils;
pub mod error;
pub mod loaders;
pub mod paths;
pub mod registry;

pub use crate::class_word_types::{DEFAULT_CLASS_WORD_TYPES, default_class_word_type_map};
pub use crate::error::StandardsError;
pub use crate::loaders::{
    load_abbreviations, load_class_words, load_domain_rules, save_abbreviations,
    save_class_words, save_domain_rules,
};
pub use crate::paths::{STANDARDS_ENV_VAR, StandardsPaths, default_standards_root};
pub use crate::registry::ReferenceData;
