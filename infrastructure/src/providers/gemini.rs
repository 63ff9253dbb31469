//! Gemini-style generateContent adapter
//!
//! Translates a turn into structured `role`/`parts` contents. The
//! system prompt is prepended as a user-role part; prior assistant
//! turns map to the `model` role. Turn order is preserved throughout.

use super::{http_client, map_transport_error, resolve_api_key};
use async_trait::async_trait;
use medley_application::{ModelProvider, ProviderError};
use medley_domain::{ProviderId, Role, Turn};
use serde_json::{Value, json};
use tracing::debug;

const TEMPERATURE: f64 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 500;

pub struct GeminiProvider {
    id: ProviderId,
    model: String,
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl GeminiProvider {
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

    fn endpoint(&self, api_key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            api_key
        )
    }

    fn request_body(&self, system_prompt: &str, history: &[Turn], user_message: &str) -> Value {
        let mut contents = vec![json!({
            "role": "user",
            "parts": [{"text": system_prompt}],
        })];

        for turn in history {
            let role = match turn.role {
                Role::Assistant => "model",
                Role::User | Role::System => "user",
            };
            contents.push(json!({
                "role": role,
                "parts": [{"text": turn.content}],
            }));
        }

        contents.push(json!({
            "role": "user",
            "parts": [{"text": user_message}],
        }));

        json!({
            "contents": contents,
            "generationConfig": {
                "temperature": TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            },
        })
    }

    fn extract_text(body: &Value) -> Result<String, ProviderError> {
        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ProviderError::Upstream("no candidate text in reply".to_string()))
    }
}

#[async_trait]
impl ModelProvider for GeminiProvider {
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

        debug!(provider = %self.id, model = %self.model, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint(api_key))
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
