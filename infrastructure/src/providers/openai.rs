//! OpenAI-style chat completions adapter
//!
//! Translates a turn into the flat `role`/`content` message list the
//! chat completions endpoint expects: system prompt first, then history
//! in order, then the new user message.

use super::{http_client, map_transport_error, resolve_api_key};
use async_trait::async_trait;
use medley_application::{ModelProvider, ProviderError};
use medley_domain::{ProviderId, Role, Turn};
use serde_json::{Value, json};
use tracing::debug;

// Adapter-local sampling constants, not part of the public contract.
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 500;

pub struct OpenAiProvider {
    id: ProviderId,
    model: String,
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(
        id: impl Into<ProviderId>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            base_url: base_url.into(),
            api_key,
            client: http_client(),
        }
    }

    /// Construct from config values, reading the credential once.
    pub fn from_settings(
        id: impl Into<ProviderId>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        api_key: Option<&str>,
        api_key_env: &str,
    ) -> Self {
        Self::new(id, model, base_url, resolve_api_key(api_key, api_key_env))
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn request_body(&self, system_prompt: &str, history: &[Turn], user_message: &str) -> Value {
        let mut messages = vec![json!({"role": "system", "content": system_prompt})];

        for turn in history {
            let role = match turn.role {
                Role::System => "system",
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            messages.push(json!({"role": role, "content": turn.content}));
        }

        messages.push(json!({"role": "user", "content": user_message}));

        json!({
            "model": self.model,
            "messages": messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        })
    }

    fn extract_text(body: &Value) -> Result<String, ProviderError> {
        body.pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ProviderError::Upstream("no message content in reply".to_string()))
    }
}

#[async_trait]
impl ModelProvider for OpenAiProvider {
    fn id(&self) -> &ProviderId {
        &self.id
    }

    async fn generate(
        &self,
        system_prompt: &str,
        history: &[Turn],
        user_message: &str,
    ) -> Result<String, ProviderError> {
        let Some(api_key) = &self.api_key else {
            return Err(ProviderError::Unconfigured);
        };

        debug!(provider = %self.id, model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&self.request_body(system_prompt, history, user_message))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Upstream(format!("status {status}")));
        }

        let body: Value = response.json().await.map_err(map_transport_error)?;
        Self::extract_text(&body)
    }
}
