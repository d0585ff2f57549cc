use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{common::entities::app_errors::CoreError, recommendation::ports::LLMClient},
    infrastructure::llm::status_error,
};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchema,
}

#[derive(Debug, Serialize)]
struct JsonSchema {
    name: &'static str,
    schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAILLMClient {
    pub fn new(api_key: String, model_name: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            client: Client::new(),
        }
    }
}

impl LLMClient for OpenAILLMClient {
    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> String {
        self.model_name.clone()
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchema {
                    name: "supplement_recommendations",
                    schema: response_schema,
                },
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(status_error("OpenAI", response).await);
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::InvalidProviderResponse(format!("Failed to parse LLM response: {}", e))
        })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CoreError::InvalidProviderResponse("No response from LLM".to_string()))
    }
}
