use axum::extract::{Path, State};
use nutriwise_core::domain::recommendation::{
    entities::RecommendationRecord, ports::RecommendationService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSymptomResponse {
    pub data: RecommendationRecord,
}

#[utoipa::path(
    get,
    path = "/symptoms/{symptom}",
    tag = "symptoms",
    summary = "Get the record stored under a symptom key",
    description = "Exact, case-sensitive lookup without any matching heuristics",
    params(
        ("symptom" = String, Path, description = "Symptom key, e.g. `Joint Pain`"),
    ),
    responses(
        (status = 200, body = GetSymptomResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn get_symptom(
    Path(symptom): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetSymptomResponse>, ApiError> {
    let record = state.service.lookup(&symptom)?;

    Ok(Response::OK(GetSymptomResponse { data: record }))
}
