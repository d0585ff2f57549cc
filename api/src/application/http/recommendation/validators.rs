use nutriwise_core::domain::recommendation::value_objects::RecommendationMode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SupplementRecommendationRequest {
    #[validate(length(min = 1, message = "symptoms must not be empty"))]
    #[schema(example = "Trouble falling asleep and stressed at work")]
    pub symptoms: String,
    #[serde(default)]
    pub mode: RecommendationMode,
}
