use ddv_model::{
    AdvisorError, CorrectionAdvisor, CorrectionRequest, CorrectionSuggestion, SampleGenerator,
    SampleRequest, SampleValues,
};
use tracing::debug;

use crate::client::ChatClient;
use crate::prompts::{build_correction_prompt, build_sample_prompt};
use crate::response::{parse_samples, parse_suggestion};

/// Correction advisor and sample generator backed by a chat model.
pub struct ModelAdvisor {
    client: ChatClient,
}

impl ModelAdvisor {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }
}

impl CorrectionAdvisor for ModelAdvisor {
    fn suggest(&self, request: &CorrectionRequest) -> Result<CorrectionSuggestion, AdvisorError> {
        let reply = self.client.complete(&build_correction_prompt(request))?;
        debug!(column = %request.column_name, "received correction");
        parse_suggestion(&reply)
    }
}

impl SampleGenerator for ModelAdvisor {
    fn generate(&self, request: &SampleRequest) -> Result<SampleValues, AdvisorError> {
        let reply = self.client.complete(&build_sample_prompt(request))?;
        parse_samples(&reply)
    }
}

/// Stand-in used with `--offline` or when no API key is configured.
///
/// Every call fails with [`AdvisorError::Disabled`], so failing rows keep
/// their names and unclassified columns get placeholder samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAdvisor;

impl CorrectionAdvisor for OfflineAdvisor {
    fn suggest(&self, _: &CorrectionRequest) -> Result<CorrectionSuggestion, AdvisorError> {
        Err(AdvisorError::Disabled)
    }
}

impl SampleGenerator for OfflineAdvisor {
    fn generate(&self, _: &SampleRequest) -> Result<SampleValues, AdvisorError> {
        Err(AdvisorError::Disabled)
    }
}
