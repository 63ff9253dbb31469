//! Orchestration value objects - immutable result types for one fan-out pass.
//!
//! - [`ProviderId`] - Identity of a configured model provider
//! - [`OrchestrationResult`] - Aggregate outcome the caller persists

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identity of a model provider (Value Object)
///
/// Keys the response map, the priority ordering, and judge verdicts.
/// Comparison is case-sensitive; use [`ProviderId::matches`] for the
/// tolerant matching judge replies need.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a free-form token.
    pub fn matches(&self, token: &str) -> bool {
        self.0.eq_ignore_ascii_case(token.trim())
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProviderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Aggregate outcome of one orchestrated turn
///
/// The only object the orchestrator returns. Invariant: whenever
/// `responses` is non-empty, `selected_provider` names one of its keys;
/// when it is empty, `selected_provider` is `None` and `selected_text`
/// carries the deployment's fallback message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationResult {
    /// Raw text from every provider that succeeded, keyed by provider id.
    pub responses: BTreeMap<ProviderId, String>,
    /// The winning provider, if any provider succeeded.
    pub selected_provider: Option<ProviderId>,
    /// The winning text (or the fallback message when all failed).
    pub selected_text: String,
    /// Human-readable reason for the selection.
    pub rationale: String,
}

impl OrchestrationResult {
    /// A result with a winner drawn from the response map.
    pub fn selected(
        responses: BTreeMap<ProviderId, String>,
        provider: ProviderId,
        rationale: impl Into<String>,
    ) -> Self {
        let selected_text = responses.get(&provider).cloned().unwrap_or_default();
        Self {
            responses,
            selected_provider: Some(provider),
            selected_text,
            rationale: rationale.into(),
        }
    }

    /// The degenerate all-providers-failed result.
    pub fn fallback(message: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            responses: BTreeMap::new(),
            selected_provider: None,
            selected_text: message.into(),
            rationale: rationale.into(),
        }
    }

    /// Returns `true` if at least one provider produced a response.
    pub fn has_responses(&self) -> bool {
        !self.responses.is_empty()
    }
}
