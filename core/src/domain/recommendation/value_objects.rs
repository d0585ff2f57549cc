use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recommendation::entities::RecommendationRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchKind {
    Exact { symptom: String },
    Partial { symptom: String },
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecommendationSource {
    KnowledgeBase { symptom: String, exact: bool },
    Default,
    Generative { provider: String, model: String },
}

impl From<MatchKind> for RecommendationSource {
    fn from(kind: MatchKind) -> Self {
        match kind {
            MatchKind::Exact { symptom } => RecommendationSource::KnowledgeBase {
                symptom,
                exact: true,
            },
            MatchKind::Partial { symptom } => RecommendationSource::KnowledgeBase {
                symptom,
                exact: false,
            },
            MatchKind::Default => RecommendationSource::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationMode {
    /// Generative provider when configured, knowledge base otherwise.
    #[default]
    Auto,
    KnowledgeBase,
}

#[derive(Debug, Clone)]
pub struct RecommendInput {
    pub symptoms: String,
    pub mode: RecommendationMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub record: RecommendationRecord,
    pub source: RecommendationSource,
}
