use crate::application::http::{
    health::router::HealthApiDoc,
    recommendation::router::RecommendationApiDoc,
    server::config::{__path_get_config, get_config},
    symptom::router::SymptomApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutriwise API",
        description = "Supplement recommendations from free-text symptom descriptions. Not medical advice."
    ),
    paths(get_config)
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(RecommendationApiDoc::openapi());
        openapi.merge(SymptomApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
