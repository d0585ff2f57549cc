use reqwest::{Response, StatusCode};

use crate::domain::{
    common::{LLMConfig, LLMProvider, entities::app_errors::CoreError},
    recommendation::ports::LLMClient,
};

pub mod gemini_client;
pub mod openai_client;

pub use gemini_client::GeminiLLMClient;
pub use openai_client::OpenAILLMClient;

/// Runtime-selected LLM backend.
#[derive(Debug, Clone)]
pub enum LLMClientAdapter {
    Gemini(GeminiLLMClient),
    OpenAI(OpenAILLMClient),
}

impl LLMClientAdapter {
    /// Builds the configured client, or `None` when no provider is usable.
    pub fn from_config(config: &LLMConfig) -> Option<Self> {
        let provider = config.provider?;
        let model_name = config.model_name()?;

        let Some(api_key) = config.api_key.clone().filter(|k| !k.trim().is_empty()) else {
            tracing::warn!(
                provider = provider.as_str(),
                "LLM provider selected without an API key, serving from the knowledge base only"
            );
            return None;
        };

        let client = match provider {
            LLMProvider::Gemini => LLMClientAdapter::Gemini(GeminiLLMClient::new(
                api_key,
                model_name,
                config.base_url.clone(),
            )),
            LLMProvider::OpenAI => LLMClientAdapter::OpenAI(OpenAILLMClient::new(
                api_key,
                model_name,
                config.base_url.clone(),
            )),
        };

        Some(client)
    }
}

impl LLMClient for LLMClientAdapter {
    fn provider_name(&self) -> &'static str {
        match self {
            LLMClientAdapter::Gemini(client) => client.provider_name(),
            LLMClientAdapter::OpenAI(client) => client.provider_name(),
        }
    }

    fn model_name(&self) -> String {
        match self {
            LLMClientAdapter::Gemini(client) => client.model_name(),
            LLMClientAdapter::OpenAI(client) => client.model_name(),
        }
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        match self {
            LLMClientAdapter::Gemini(client) => {
                client.generate_with_text(prompt, response_schema).await
            }
            LLMClientAdapter::OpenAI(client) => {
                client.generate_with_text(prompt, response_schema).await
            }
        }
    }
}

/// Maps a non-success provider response onto the core error taxonomy.
pub(crate) async fn status_error(provider: &str, response: Response) -> CoreError {
    let status = response.status();
    let retry_after_secs = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok());
    let error_text = response.text().await.unwrap_or_default();

    tracing::error!("{} API error: {} - {}", provider, status, error_text);

    match status {
        StatusCode::TOO_MANY_REQUESTS => CoreError::RateLimited { retry_after_secs },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CoreError::Unauthorized,
        s if s.is_server_error() => {
            CoreError::UpstreamUnavailable(format!("{} returned {}", provider, status))
        }
        _ => CoreError::ExternalServiceError(format!(
            "LLM API returned error: {} - {}",
            status, error_text
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: Option<LLMProvider>, api_key: Option<&str>) -> LLMConfig {
        LLMConfig {
            provider,
            api_key: api_key.map(str::to_string),
            ..LLMConfig::default()
        }
    }

    #[test]
    fn test_no_provider_builds_nothing() {
        assert!(LLMClientAdapter::from_config(&config(None, Some("key"))).is_none());
    }

    #[test]
    fn test_missing_api_key_builds_nothing() {
        assert!(LLMClientAdapter::from_config(&config(Some(LLMProvider::Gemini), None)).is_none());
        assert!(
            LLMClientAdapter::from_config(&config(Some(LLMProvider::OpenAI), Some("  "))).is_none()
        );
    }

    #[test]
    fn test_default_models_per_provider() {
        let gemini = LLMClientAdapter::from_config(&config(Some(LLMProvider::Gemini), Some("k")))
            .expect("gemini client");
        assert_eq!(gemini.provider_name(), "gemini");
        assert_eq!(gemini.model_name(), "gemini-2.5-flash");

        let openai = LLMClientAdapter::from_config(&LLMConfig {
            model: Some("gpt-4o-mini".to_string()),
            ..config(Some(LLMProvider::OpenAI), Some("k"))
        })
        .expect("openai client");
        assert_eq!(openai.provider_name(), "openai");
        assert_eq!(openai.model_name(), "gpt-4o-mini");
    }
}
