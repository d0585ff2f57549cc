use axum::extract::State;
use nutriwise_core::domain::common::NutriwiseConfig;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PublicConfig {
    pub root_path: String,
    pub generative_provider: Option<String>,
    pub generative_model: Option<String>,
    pub llm_timeout_ms: u64,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Public runtime configuration",
    responses(
        (status = 200, body = PublicConfig)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Response<PublicConfig> {
    let enabled = state.service.has_generative_provider();
    let llm = NutriwiseConfig::from(state.args.as_ref().clone()).llm;

    Response::OK(PublicConfig {
        root_path: state.args.server.root_path.clone(),
        generative_provider: llm
            .provider
            .filter(|_| enabled)
            .map(|p| p.as_str().to_string()),
        generative_model: llm.model_name().filter(|_| enabled),
        llm_timeout_ms: llm.timeout.as_millis() as u64,
    })
}
