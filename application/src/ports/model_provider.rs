//! Model provider port
//!
//! Defines the uniform capability wrapping one model backend: given a
//! system prompt, conversation history, and a new user message, return
//! text or a typed failure.

use async_trait::async_trait;
use medley_domain::{ProviderId, Turn};
use std::time::Duration;
use thiserror::Error;

/// Failure taxonomy for one provider invocation
///
/// Every variant is absorbed by the orchestrator; none of them reach
/// the caller of `handle_turn`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Credential missing at construction time. A deployment condition,
    /// never a crash, and never shown to the end user.
    #[error("provider is not configured (missing credential)")]
    Unconfigured,

    /// The backend returned an error status, a malformed payload, or the
    /// transport failed.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// No reply within the budget.
    #[error("timed out")]
    Timeout,
}

/// A capability wrapping exactly one model backend
///
/// Adapters make at most one outbound attempt per invocation — no
/// retries. Each adapter owns its history-format translation but must
/// preserve turn order and role semantics.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Stable identity of this provider within a deployment.
    fn id(&self) -> &ProviderId;

    /// Produce one response to the user message, in context.
    async fn generate(
        &self,
        system_prompt: &str,
        history: &[Turn],
        user_message: &str,
    ) -> Result<String, ProviderError>;
}

/// Outcome of one provider invocation, with timing
///
/// Created per fan-out task and consumed into the aggregate result.
#[derive(Debug)]
pub struct ProviderResult {
    pub provider: ProviderId,
    pub outcome: Result<String, ProviderError>,
    pub elapsed: Duration,
}
