use crate::domain::{
    common::services::Service,
    health::{entities::HealthStatus, ports::HealthCheckService},
    recommendation::ports::{LLMClient, RecommendationProvider},
};

impl<LLM> HealthCheckService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn health(&self) -> HealthStatus {
        let knowledge_base = self.resolver.knowledge_base();

        HealthStatus {
            status: if knowledge_base.is_empty() {
                "degraded".to_string()
            } else {
                "ok".to_string()
            },
            knowledge_base_entries: knowledge_base.len(),
            generative_provider: self
                .generative
                .as_ref()
                .map(|advisor| advisor.provider_name().to_string()),
        }
    }
}
