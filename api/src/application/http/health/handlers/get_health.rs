use axum::extract::State;
use nutriwise_core::domain::health::{entities::HealthStatus, ports::HealthCheckService};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Service health",
    responses(
        (status = 200, body = HealthStatus)
    )
)]
pub async fn get_health(State(state): State<AppState>) -> Response<HealthStatus> {
    Response::OK(state.service.health().await)
}
