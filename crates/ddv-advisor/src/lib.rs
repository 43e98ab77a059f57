//! Chat-model collaborators for the naming rule engine.

mod advisor;
mod client;
pub mod prompts;
pub mod response;
pub mod settings;

pub use advisor::{ModelAdvisor, OfflineAdvisor};
pub use client::ChatClient;
pub use prompts::{build_correction_prompt, build_sample_prompt};
pub use settings::AdvisorSettings;
