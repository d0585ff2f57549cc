use axum::extract::State;
use nutriwise_core::domain::recommendation::ports::RecommendationService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSymptomsResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/symptoms",
    tag = "symptoms",
    summary = "List known symptoms",
    description = "Symptom keys of the knowledge base in priority order",
    responses(
        (status = 200, body = GetSymptomsResponse)
    )
)]
pub async fn get_symptoms(State(state): State<AppState>) -> Response<GetSymptomsResponse> {
    Response::OK(GetSymptomsResponse {
        data: state.service.symptoms(),
    })
}
