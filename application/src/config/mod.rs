//! Orchestrator configuration — fan-out control and selection policy.
//!
//! [`OrchestratorConfig`] groups the static parameters that control one
//! `handle_turn` pass. These are application-layer concerns; how they
//! are read from a file or the environment belongs to infrastructure.

use medley_domain::ProviderId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Message shown when every provider failed. Deliberately generic:
/// no attribution, no error detail.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "I'm sorry, assistance is unavailable right now. \
     Please try again shortly, or consult a healthcare professional directly.";

/// How a winner is picked from the successful responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// First provider of the ranked list present in the response map wins.
    /// Deterministic, no extra network call.
    #[default]
    Priority,
    /// A designated judge provider ranks the candidates. Falls back to
    /// priority ordering on any judge failure.
    Judge,
}

/// Static parameters for one orchestrated turn
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Global budget for the whole dispatch+await phase (and, separately,
    /// for the judge call).
    pub timeout: Duration,
    /// Selection policy for this deployment.
    pub policy: SelectionMode,
    /// Ranked provider ids for priority selection and judge fallback.
    pub priority: Vec<ProviderId>,
    /// Provider that arbitrates when `policy` is `Judge`.
    pub judge: Option<ProviderId>,
    /// Text returned when every provider failed.
    pub fallback_message: String,
    /// User messages longer than this are truncated before dispatch.
    pub max_message_chars: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            policy: SelectionMode::Priority,
            priority: Vec::new(),
            judge: None,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            max_message_chars: 4000,
        }
    }
}

impl OrchestratorConfig {
    // ==================== Builder Methods ====================

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_policy(mut self, policy: SelectionMode) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_priority(mut self, priority: Vec<ProviderId>) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_judge(mut self, judge: ProviderId) -> Self {
        self.judge = Some(judge);
        self
    }

    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    pub fn with_max_message_chars(mut self, max: usize) -> Self {
        self.max_message_chars = max;
        self
    }
}
