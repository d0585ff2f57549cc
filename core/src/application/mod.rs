use std::sync::Arc;

use crate::{
    domain::{
        common::{NutriwiseConfig, services::Service},
        recommendation::{
            generative::GenerativeAdvisor, knowledge_base::KnowledgeBase,
            ports::RecommendationProvider, resolver::Resolver,
        },
    },
    infrastructure::llm::LLMClientAdapter,
};

pub type NutriwiseService = Service<LLMClientAdapter>;

pub fn create_service(config: NutriwiseConfig) -> NutriwiseService {
    create_service_with_knowledge_base(config, KnowledgeBase::builtin())
}

pub fn create_service_with_knowledge_base(
    config: NutriwiseConfig,
    knowledge_base: KnowledgeBase,
) -> NutriwiseService {
    let resolver = Resolver::new(Arc::new(knowledge_base));
    let generative = LLMClientAdapter::from_config(&config.llm).map(GenerativeAdvisor::new);

    match &generative {
        Some(advisor) => tracing::info!(
            provider = advisor.provider_name(),
            model = %advisor.model_name(),
            timeout_ms = config.llm.timeout.as_millis() as u64,
            "generative recommendations enabled"
        ),
        None => tracing::info!("serving recommendations from the knowledge base only"),
    }

    Service::new(resolver, generative, config.llm.timeout)
}
