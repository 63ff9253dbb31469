//! Simulated provider
//!
//! Stands in for a backend without a public API: no network call, just
//! a fixed artificial delay followed by a canned response quoting the
//! start of the user message. Also serves as a deterministic fixture
//! when exercising the orchestrator end to end.

use async_trait::async_trait;
use medley_application::{ModelProvider, ProviderError};
use medley_domain::{ProviderId, Turn};
use std::time::Duration;
use tracing::debug;

const QUOTED_PREFIX_CHARS: usize = 30;

pub struct SimulatedProvider {
    id: ProviderId,
    delay: Duration,
}

impl SimulatedProvider {
    pub fn new(id: impl Into<ProviderId>, delay: Duration) -> Self {
        Self {
            id: id.into(),
            delay,
        }
    }

    fn canned_response(user_message: &str) -> String {
        let prefix: String = user_message.chars().take(QUOTED_PREFIX_CHARS).collect();
        format!(
            "[SIMULATED RESPONSE] This provider has no public API yet; \
             this canned reply demonstrates the comparison flow.\n\n\
             Regarding \"{prefix}...\": general guidance would appear here, \
             along with a recommendation to consult a healthcare provider \
             for a proper assessment."
        )
    }
}

#[async_trait]
impl ModelProvider for SimulatedProvider {
    fn id(&self) -> &ProviderId {
        &self.id
    }

    async fn generate(
        &self,
        _system_prompt: &str,
        _history: &[Turn],
        user_message: &str,
    ) -> Result<String, ProviderError> {
        debug!(provider = %self.id, delay = ?self.delay, "simulating provider latency");
        tokio::time::sleep(self.delay).await;
        Ok(Self::canned_response(user_message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_after_the_configured_delay() {
        let provider = SimulatedProvider::new("grok", Duration::from_millis(1));
        let reply = provider
            .generate("persona", &[], "I have mild cramping, is that normal?")
            .await
            .unwrap();

        assert!(reply.contains("[SIMULATED RESPONSE]"));
        assert!(reply.contains("I have mild cramping, is that n"));
    }

    #[tokio::test]
    async fn short_messages_are_quoted_whole() {
        let provider = SimulatedProvider::new("grok", Duration::ZERO);
        let reply = provider.generate("persona", &[], "hi").await.unwrap();
        assert!(reply.contains("\"hi...\""));
    }
}
