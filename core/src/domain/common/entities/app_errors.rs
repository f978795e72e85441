use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Internal server error")]
    InternalServerError,

    #[error("Not found")]
    NotFound,

    #[error("Invalid request")]
    Invalid,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Pipeline exceeded {0} transitions")]
    PipelineLimitExceeded(usize),
}
