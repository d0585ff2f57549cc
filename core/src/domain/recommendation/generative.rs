use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{
        entities::RecommendationRecord,
        ports::{LLMClient, RecommendationProvider},
        prompt::render_advisor_prompt,
        schema::get_recommendation_schema,
        value_objects::{Recommendation, RecommendationSource},
    },
};

/// Recommendation provider backed by an external LLM.
#[derive(Debug, Clone)]
pub struct GenerativeAdvisor<LLM>
where
    LLM: LLMClient,
{
    llm_client: LLM,
}

impl<LLM> GenerativeAdvisor<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }

    pub fn model_name(&self) -> String {
        self.llm_client.model_name()
    }
}

/// Parses raw LLM output into a validated record.
pub fn parse_generated_record(raw_response: &str) -> Result<RecommendationRecord, CoreError> {
    let record: RecommendationRecord = serde_json::from_str(raw_response).map_err(|e| {
        tracing::error!("Failed to parse LLM response: {}", e);
        CoreError::InvalidProviderResponse(format!("Failed to parse LLM response: {}", e))
    })?;

    record.validated()
}

impl<LLM> RecommendationProvider for GenerativeAdvisor<LLM>
where
    LLM: LLMClient,
{
    type Error = CoreError;

    fn provider_name(&self) -> &str {
        self.llm_client.provider_name()
    }

    async fn recommend(&self, symptoms: &str) -> Result<Recommendation, CoreError> {
        let prompt = render_advisor_prompt(symptoms);
        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_recommendation_schema())
            .await?;

        Ok(Recommendation {
            record: parse_generated_record(&raw_response)?,
            source: RecommendationSource::Generative {
                provider: self.llm_client.provider_name().to_string(),
                model: self.llm_client.model_name(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::ports::MockLLMClient;
    use serde_json::json;

    #[test]
    fn test_parse_generated_record() {
        let raw = json!({
            "recommendations": [{
                "name": "Vitamin D3",
                "dosage": "1000-2000 IU daily",
                "benefits": ["Supports immune function"],
                "reasoning": "Low vitamin D is common in winter.",
                "precautions": ["Take with a meal containing fat"],
                "confidence": 78.5
            }],
            "summary": "Vitamin D may support immunity.",
            "disclaimer": "Consult a healthcare provider."
        })
        .to_string();

        let record = parse_generated_record(&raw).unwrap();
        assert_eq!(record.recommendations.len(), 1);
        assert_eq!(record.recommendations[0].confidence, 78.5);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_generated_record("Sure! Here are some supplements:").unwrap_err();
        assert!(matches!(err, CoreError::InvalidProviderResponse(_)));
    }

    #[test]
    fn test_parse_rejects_missing_disclaimer() {
        let raw = json!({
            "recommendations": [],
            "summary": "Nothing to add."
        })
        .to_string();
        assert!(parse_generated_record(&raw).is_err());
    }

    #[tokio::test]
    async fn test_recommend_sends_prompt_and_schema() {
        let mut client = MockLLMClient::new();
        client.expect_provider_name().return_const("mock");
        client
            .expect_model_name()
            .return_const("mock-1".to_string());
        client
            .expect_generate_with_text()
            .withf(|prompt, schema| {
                prompt.contains("\"restless legs\"")
                    && schema["required"] == json!(["recommendations", "summary", "disclaimer"])
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok::<_, CoreError>(json!({
                        "recommendations": [{
                            "name": "Iron Bisglycinate",
                            "dosage": "18mg daily",
                            "benefits": ["Supports oxygen transport"],
                            "reasoning": "Low ferritin is linked to restless legs.",
                            "precautions": [],
                            "confidence": 70
                        }],
                        "summary": "Iron may help.",
                        "disclaimer": "Test ferritin before supplementing."
                    })
                    .to_string())
                })
            });

        let advisor = GenerativeAdvisor::new(client);
        assert_eq!(advisor.provider_name(), "mock");

        let recommendation = advisor.recommend("restless legs").await.unwrap();
        assert_eq!(
            recommendation.record.recommendations[0].name,
            "Iron Bisglycinate"
        );
        assert_eq!(
            recommendation.source,
            RecommendationSource::Generative {
                provider: "mock".to_string(),
                model: "mock-1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_recommend_propagates_client_error() {
        let mut client = MockLLMClient::new();
        client
            .expect_generate_with_text()
            .returning(|_, _| Box::pin(async { Err::<String, _>(CoreError::Unauthorized) }));

        let advisor = GenerativeAdvisor::new(client);
        assert_eq!(
            advisor.recommend("anything").await.unwrap_err(),
            CoreError::Unauthorized
        );
    }
}
