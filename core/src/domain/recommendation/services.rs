use std::convert::Infallible;

use tokio::time::timeout;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recommendation::{
        entities::RecommendationRecord,
        ports::{LLMClient, RecommendationProvider, RecommendationService},
        resolver::Resolver,
        value_objects::{RecommendInput, Recommendation, RecommendationMode, RecommendationSource},
    },
};

impl RecommendationProvider for Resolver {
    type Error = Infallible;

    fn provider_name(&self) -> &str {
        "knowledge_base"
    }

    async fn recommend(&self, symptoms: &str) -> Result<Recommendation, Infallible> {
        let resolution = self.resolve_match(symptoms);

        Ok(Recommendation {
            record: resolution.record.clone(),
            source: RecommendationSource::from(resolution.match_kind()),
        })
    }
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    async fn recommend_within_timeout<P>(
        &self,
        provider: &P,
        symptoms: &str,
    ) -> Result<Recommendation, CoreError>
    where
        P: RecommendationProvider<Error = CoreError>,
    {
        timeout(self.llm_timeout, provider.recommend(symptoms))
            .await
            .map_err(|_| CoreError::Timeout)?
    }
}

impl<LLM> RecommendationService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn recommend(&self, input: RecommendInput) -> Recommendation {
        if input.mode == RecommendationMode::Auto {
            if let Some(advisor) = &self.generative {
                match self
                    .recommend_within_timeout(advisor, &input.symptoms)
                    .await
                {
                    Ok(recommendation) => return recommendation,
                    Err(e) => tracing::warn!(
                        provider = advisor.provider_name(),
                        fallback = self.resolver.provider_name(),
                        transient = e.is_transient(),
                        "Generative recommendation failed: {}",
                        e
                    ),
                }
            }
        }

        let Ok(recommendation) = self.resolver.recommend(&input.symptoms).await;
        recommendation
    }

    fn lookup(&self, symptom: &str) -> Result<RecommendationRecord, CoreError> {
        self.resolver
            .knowledge_base()
            .get(symptom)
            .cloned()
            .ok_or_else(|| CoreError::UnknownSymptom(symptom.to_string()))
    }

    fn symptoms(&self) -> Vec<String> {
        self.resolver
            .knowledge_base()
            .keys()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::domain::recommendation::{generative::GenerativeAdvisor, ports::MockLLMClient};

    fn generated_reply() -> String {
        json!({
            "recommendations": [{
                "name": "Vitamin D3",
                "dosage": "2000 IU daily",
                "benefits": ["Supports immune function"],
                "reasoning": "Common deficiency.",
                "precautions": ["Check levels first"],
                "confidence": 72
            }],
            "summary": "Vitamin D may help.",
            "disclaimer": "Consult a healthcare provider."
        })
        .to_string()
    }

    fn replying_client(reply: String) -> MockLLMClient {
        let mut client = MockLLMClient::new();
        client.expect_provider_name().return_const("mock");
        client
            .expect_model_name()
            .return_const("mock-1".to_string());
        client.expect_generate_with_text().times(1).returning(move |_, _| {
            let reply = reply.clone();
            Box::pin(async move { Ok::<_, CoreError>(reply) })
        });
        client
    }

    fn failing_client(error: CoreError) -> MockLLMClient {
        let mut client = MockLLMClient::new();
        client.expect_provider_name().return_const("mock");
        client.expect_generate_with_text().times(1).returning(move |_, _| {
            let error = error.clone();
            Box::pin(async move { Err::<String, _>(error) })
        });
        client
    }

    fn service(client: Option<MockLLMClient>) -> Service<MockLLMClient> {
        Service::new(
            Resolver::default(),
            client.map(GenerativeAdvisor::new),
            Duration::from_millis(50),
        )
    }

    fn input(symptoms: &str, mode: RecommendationMode) -> RecommendInput {
        RecommendInput {
            symptoms: symptoms.to_string(),
            mode,
        }
    }

    #[tokio::test]
    async fn test_resolver_as_provider_reports_match() {
        let resolver = Resolver::default();
        assert_eq!(resolver.provider_name(), "knowledge_base");

        let Ok(recommendation) = resolver.recommend("xyzzyplugh").await;
        assert_eq!(recommendation.source, RecommendationSource::Default);
        assert_eq!(recommendation.record.recommendations[0].name, "Multivitamin");

        let Ok(recommendation) = resolver.recommend("bad headache").await;
        assert_eq!(
            recommendation.source,
            RecommendationSource::KnowledgeBase {
                symptom: "Headache".to_string(),
                exact: false
            }
        );
    }

    #[tokio::test]
    async fn test_without_provider_uses_knowledge_base() {
        let service = service(None);
        let recommendation = service
            .recommend(input("Joint Pain", RecommendationMode::Auto))
            .await;

        assert_eq!(
            recommendation.source,
            RecommendationSource::KnowledgeBase {
                symptom: "Joint Pain".to_string(),
                exact: true
            }
        );
        assert_eq!(
            recommendation.record.recommendations[0].name,
            "Curcumin (with Piperine)"
        );
    }

    #[tokio::test]
    async fn test_unmatched_reports_default_source() {
        let service = service(None);
        let recommendation = service
            .recommend(input("xyzzyplugh", RecommendationMode::Auto))
            .await;

        assert_eq!(recommendation.source, RecommendationSource::Default);
        assert_eq!(recommendation.record.recommendations.len(), 1);
    }

    #[tokio::test]
    async fn test_generative_provider_used_in_auto_mode() {
        let service = service(Some(replying_client(generated_reply())));

        let recommendation = service
            .recommend(input("winter blues", RecommendationMode::Auto))
            .await;

        assert_eq!(
            recommendation.source,
            RecommendationSource::Generative {
                provider: "mock".to_string(),
                model: "mock-1".to_string()
            }
        );
        assert_eq!(recommendation.record.recommendations[0].name, "Vitamin D3");
    }

    #[tokio::test]
    async fn test_knowledge_base_mode_skips_provider() {
        let mut client = MockLLMClient::new();
        client.expect_generate_with_text().never();
        let service = service(Some(client));

        let recommendation = service
            .recommend(input("fatigue", RecommendationMode::KnowledgeBase))
            .await;

        assert_eq!(
            recommendation.source,
            RecommendationSource::KnowledgeBase {
                symptom: "Fatigue".to_string(),
                exact: true
            }
        );
    }

    #[tokio::test]
    async fn test_provider_errors_fall_back_to_knowledge_base() {
        let failures = [
            CoreError::RateLimited {
                retry_after_secs: Some(20),
            },
            CoreError::UpstreamUnavailable("503".to_string()),
            CoreError::Unauthorized,
            CoreError::ExternalServiceError("connection reset".to_string()),
        ];

        for failure in failures {
            let service = service(Some(failing_client(failure)));
            let recommendation = service
                .recommend(input("my stress levels", RecommendationMode::Auto))
                .await;

            assert_eq!(
                recommendation.source,
                RecommendationSource::KnowledgeBase {
                    symptom: "Stress".to_string(),
                    exact: false
                }
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_provider_output_falls_back() {
        let reply = json!({
            "recommendations": [],
            "summary": "none",
            "disclaimer": "none"
        })
        .to_string();
        let mut client = MockLLMClient::new();
        client.expect_provider_name().return_const("mock");
        client
            .expect_generate_with_text()
            .times(1)
            .returning(move |_, _| {
                let reply = reply.clone();
                Box::pin(async move { Ok::<_, CoreError>(reply) })
            });
        let service = service(Some(client));

        let recommendation = service
            .recommend(input("xyzzyplugh", RecommendationMode::Auto))
            .await;

        assert_eq!(recommendation.source, RecommendationSource::Default);
    }

    #[tokio::test(start_paused = true)]
    async fn test_provider_timeout_falls_back() {
        let mut client = MockLLMClient::new();
        client.expect_provider_name().return_const("mock");
        client
            .expect_generate_with_text()
            .times(1)
            .returning(|_, _| Box::pin(std::future::pending::<Result<String, CoreError>>()));
        let service = service(Some(client));

        let recommendation = service
            .recommend(input("headache", RecommendationMode::Auto))
            .await;

        assert_eq!(
            recommendation.source,
            RecommendationSource::KnowledgeBase {
                symptom: "Headache".to_string(),
                exact: true
            }
        );
    }

    #[test]
    fn test_lookup_and_symptoms() {
        let service = service(None);

        assert!(service.lookup("Stress").is_ok());
        assert_eq!(
            service.lookup("stress"),
            Err(CoreError::UnknownSymptom("stress".to_string()))
        );
        assert_eq!(service.symptoms().first().map(String::as_str), Some("Headache"));
        assert_eq!(service.symptoms().len(), 6);
    }
}
