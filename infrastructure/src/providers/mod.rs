//! Concrete model provider adapters
//!
//! Each adapter owns its request shaping and credential handling.
//! Request bodies are built by pure functions so payload shape can be
//! tested without a network.

pub mod gemini;
pub mod openai;
pub mod simulated;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use simulated::SimulatedProvider;

use medley_application::ProviderError;
use std::time::Duration;

/// Transport-level client timeout. The orchestrator's global budget is
/// the real bound; this only keeps an abandoned request from holding a
/// connection indefinitely.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(60);

pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(CLIENT_TIMEOUT)
        .build()
        // Building with static options cannot fail at runtime; fall back
        // to the default client rather than propagate a constructor error.
        .unwrap_or_default()
}

pub(crate) fn map_transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Upstream(e.to_string())
    }
}

/// Resolve a credential once, at adapter construction time. A direct
/// key in config wins over the environment variable; absence is stored,
/// not raised.
pub(crate) fn resolve_api_key(direct: Option<&str>, env_var: &str) -> Option<String> {
    direct
        .map(str::to_string)
        .or_else(|| std::env::var(env_var).ok())
        .filter(|key| !key.is_empty())
}
