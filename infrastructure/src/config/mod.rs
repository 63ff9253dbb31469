//! Configuration loading and provider assembly

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGeminiConfig, FileOpenAiConfig, FileOrchestratorConfig, FileProvidersConfig,
    FileSimulatedConfig,
};
pub use loader::ConfigLoader;

use crate::providers::{GeminiProvider, OpenAiProvider, SimulatedProvider};
use medley_application::ModelProvider;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Assemble the enabled provider adapters from configuration.
///
/// Credentials are resolved here, once, at process start. A provider
/// with a missing credential is still constructed — it reports
/// `Unconfigured` per invocation and never joins the response map.
pub fn build_providers(config: &FileConfig) -> Vec<Arc<dyn ModelProvider>> {
    let mut providers: Vec<Arc<dyn ModelProvider>> = Vec::new();

    if config.providers.openai.enabled {
        let c = &config.providers.openai;
        providers.push(Arc::new(OpenAiProvider::from_settings(
            c.id.as_str(),
            c.model.as_str(),
            c.base_url.as_str(),
            c.api_key.as_deref(),
            &c.api_key_env,
        )));
    }

    if config.providers.gemini.enabled {
        let c = &config.providers.gemini;
        providers.push(Arc::new(GeminiProvider::from_settings(
            c.id.as_str(),
            c.model.as_str(),
            c.base_url.as_str(),
            c.api_key.as_deref(),
            &c.api_key_env,
        )));
    }

    if config.providers.simulated.enabled {
        let c = &config.providers.simulated;
        providers.push(Arc::new(SimulatedProvider::new(
            c.id.as_str(),
            Duration::from_millis(c.delay_ms),
        )));
    }

    info!(count = providers.len(), "assembled provider cohort");
    providers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_assembles_all_three_providers() {
        let config = FileConfig::default();
        let providers = build_providers(&config);
        assert_eq!(providers.len(), 3);

        let ids: Vec<_> = providers.iter().map(|p| p.id().to_string()).collect();
        assert_eq!(ids, vec!["openai", "gemini", "grok"]);
    }

    #[test]
    fn disabled_providers_are_skipped() {
        let mut config = FileConfig::default();
        config.providers.openai.enabled = false;
        config.providers.simulated.enabled = false;

        let providers = build_providers(&config);
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].id().as_str(), "gemini");
    }
}
