use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{
        entities::RecommendationRecord,
        value_objects::{RecommendInput, Recommendation},
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn provider_name(&self) -> &'static str;

    fn model_name(&self) -> String;

    /// Returns the raw text of the first completion, expected to be JSON
    /// matching `response_schema`.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Anything able to turn a symptom description into a recommendation.
pub trait RecommendationProvider: Send + Sync {
    /// `Infallible` for providers that always answer.
    type Error;

    fn provider_name(&self) -> &str;

    fn recommend(
        &self,
        symptoms: &str,
    ) -> impl Future<Output = Result<Recommendation, Self::Error>> + Send;
}

pub trait RecommendationService: Send + Sync {
    /// Never fails: provider errors fall back to the knowledge base.
    fn recommend(&self, input: RecommendInput) -> impl Future<Output = Recommendation> + Send;

    /// Exact, case-sensitive knowledge base lookup.
    fn lookup(&self, symptom: &str) -> Result<RecommendationRecord, CoreError>;

    fn symptoms(&self) -> Vec<String>;
}
