use super::handlers::{
    get_symptom::{__path_get_symptom, get_symptom},
    get_symptoms::{__path_get_symptoms, get_symptoms},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_symptoms, get_symptom))]
pub struct SymptomApiDoc;

pub fn symptom_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/symptoms", state.args.server.root_path),
            get(get_symptoms),
        )
        .route(
            &format!("{}/symptoms/{{symptom}}", state.args.server.root_path),
            get(get_symptom),
        )
}
