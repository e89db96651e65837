/// Error type shared by the form session, catalog sources, and validation.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Source error: {0}")]
    SourceError(String),

    #[error("Event error: {0}")]
    EventError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for FormError {
    fn from(err: validator::ValidationErrors) -> Self {
        FormError::ValidationError(err.to_string())
    }
}
