use axum::extract::State;
use chrono::{DateTime, Utc};
use nutriwise_core::domain::recommendation::{
    entities::RecommendationRecord,
    ports::RecommendationService,
    value_objects::{RecommendInput, RecommendationSource},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recommendation::validators::SupplementRecommendationRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SupplementRecommendationResponse {
    pub recommendations: RecommendationRecord,
    pub source: RecommendationSource,
    pub generated_at: DateTime<Utc>,
}

#[utoipa::path(
    post,
    path = "/supplement-recommendations",
    tag = "recommendations",
    summary = "Recommend supplements for a symptom description",
    description = "Resolves free-text symptoms against the knowledge base, or asks the configured LLM provider and falls back to the knowledge base on failure",
    responses(
        (status = 200, body = SupplementRecommendationResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = SupplementRecommendationRequest
)]
pub async fn recommend_supplements(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SupplementRecommendationRequest>,
) -> Result<Response<SupplementRecommendationResponse>, ApiError> {
    let recommendation = state
        .service
        .recommend(RecommendInput {
            symptoms: payload.symptoms,
            mode: payload.mode,
        })
        .await;

    tracing::info!(source = ?recommendation.source, "served supplement recommendation");

    Ok(Response::OK(SupplementRecommendationResponse {
        recommendations: recommendation.record,
        source: recommendation.source,
        generated_at: Utc::now(),
    }))
}
