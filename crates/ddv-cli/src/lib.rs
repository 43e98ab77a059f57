//! CLI library components for the data dictionary validator.

pub mod config;
pub mod logging;
pub mod summary;
