use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AssistantError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
