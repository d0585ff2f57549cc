use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("Generative provider timed out")]
    Timeout,

    #[error("Generative provider is rate limited")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Generative provider rejected the credentials")]
    Unauthorized,

    #[error("Upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid provider response: {0}")]
    InvalidProviderResponse(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Failures worth retrying later against the same provider.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CoreError::Timeout | CoreError::RateLimited { .. } | CoreError::UpstreamUnavailable(_)
        )
    }
}
