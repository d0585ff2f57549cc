use std::time::Duration;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutriwiseConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LLMProvider {
    Gemini,
    OpenAI,
}

impl LLMProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LLMProvider::Gemini => "gemini",
            LLMProvider::OpenAI => "openai",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            LLMProvider::Gemini => "gemini-2.5-flash",
            LLMProvider::OpenAI => "gpt-4o",
        }
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// `None` keeps the service on the knowledge base only.
    pub provider: Option<LLMProvider>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: None,
            api_key: None,
            model: None,
            base_url: None,
            timeout: Duration::from_millis(15_000),
        }
    }
}

impl LLMConfig {
    pub fn model_name(&self) -> Option<String> {
        let provider = self.provider?;
        Some(
            self.model
                .clone()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| provider.default_model().to_string()),
        )
    }
}
