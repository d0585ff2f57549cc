use std::time::Duration;

use crate::domain::recommendation::{
    generative::GenerativeAdvisor, ports::LLMClient, resolver::Resolver,
};

/// Composes the deterministic resolver with an optional generative advisor.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) resolver: Resolver,
    pub(crate) generative: Option<GenerativeAdvisor<LLM>>,
    pub(crate) llm_timeout: Duration,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(
        resolver: Resolver,
        generative: Option<GenerativeAdvisor<LLM>>,
        llm_timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            generative,
            llm_timeout,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn has_generative_provider(&self) -> bool {
        self.generative.is_some()
    }
}
