//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the config file.
//! Every field has a default so a missing file means a fully usable
//! configuration.

use medley_application::{OrchestratorConfig, SelectionMode};
use medley_domain::ProviderId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Deployment persona used verbatim as the system instruction for every
/// provider and for the judge call.
const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a virtual health assistant providing supportive, concise guidance. \
Be direct: lead with the most important point and keep responses short. \
When symptoms are likely benign, say so clearly and early. \
Always include a brief recommendation to consult a healthcare provider. \
You inform and support; you never diagnose.";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub orchestrator: FileOrchestratorConfig,
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Convert the `[orchestrator]` section into the application-layer
    /// configuration the use case consumes.
    pub fn orchestrator_config(&self) -> OrchestratorConfig {
        let o = &self.orchestrator;
        let mut config = OrchestratorConfig::default()
            .with_timeout(Duration::from_secs(o.timeout_secs))
            .with_policy(o.policy)
            .with_priority(o.priority.iter().map(|s| ProviderId::from(s.as_str())).collect())
            .with_fallback_message(&o.fallback_message)
            .with_max_message_chars(o.max_message_chars);
        if let Some(judge) = &o.judge {
            config = config.with_judge(ProviderId::from(judge.as_str()));
        }
        config
    }

    pub fn system_prompt(&self) -> &str {
        &self.orchestrator.system_prompt
    }
}

/// Raw `[orchestrator]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOrchestratorConfig {
    /// Global budget for the fan-out, in seconds.
    pub timeout_secs: u64,
    /// "priority" or "judge".
    pub policy: SelectionMode,
    /// Ranked provider ids, best first.
    pub priority: Vec<String>,
    /// Provider id that arbitrates under the judge policy.
    pub judge: Option<String>,
    /// Text returned when every provider failed.
    pub fallback_message: String,
    /// Persona/policy text sent as the system instruction.
    pub system_prompt: String,
    /// User messages longer than this are truncated.
    pub max_message_chars: usize,
}

impl Default for FileOrchestratorConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            policy: SelectionMode::Priority,
            priority: vec![
                "openai".to_string(),
                "gemini".to_string(),
                "grok".to_string(),
            ],
            judge: Some("openai".to_string()),
            fallback_message: medley_application::config::DEFAULT_FALLBACK_MESSAGE.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_message_chars: 4000,
        }
    }
}

/// Raw `[providers]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub openai: FileOpenAiConfig,
    pub gemini: FileGeminiConfig,
    pub simulated: FileSimulatedConfig,
}

/// `[providers.openai]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    pub enabled: bool,
    /// Provider id within this deployment.
    pub id: String,
    pub model: String,
    /// Base URL (can be overridden for compatible gateways).
    pub base_url: String,
    /// Environment variable name for the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            id: "openai".to_string(),
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
        }
    }
}

/// `[providers.gemini]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    pub enabled: bool,
    pub id: String,
    pub model: String,
    pub base_url: String,
    pub api_key_env: String,
    pub api_key: Option<String>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            id: "gemini".to_string(),
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
        }
    }
}

/// `[providers.simulated]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulatedConfig {
    pub enabled: bool,
    pub id: String,
    /// Artificial latency before the canned reply.
    pub delay_ms: u64,
}

impl Default for FileSimulatedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            id: "grok".to_string(),
            delay_ms: 1000,
        }
    }
}
