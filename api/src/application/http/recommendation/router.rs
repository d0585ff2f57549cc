use super::handlers::recommend_supplements::{
    __path_recommend_supplements, recommend_supplements,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(recommend_supplements))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!(
            "{}/supplement-recommendations",
            state.args.server.root_path
        ),
        post(recommend_supplements),
    )
}
