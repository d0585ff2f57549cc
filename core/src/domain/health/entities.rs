use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub knowledge_base_entries: usize,
    /// `None` when only the knowledge base is serving.
    pub generative_provider: Option<String>,
}
