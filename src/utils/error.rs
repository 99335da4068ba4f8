use thiserror::Error;

#[derive(Error, Debug)]
pub enum NfeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No authorization code available")]
    MissingAuthCode,

    #[error("Authorization code could not be exchanged for an access token")]
    MissingAccessToken,
}

pub type Result<T> = std::result::Result<T, NfeError>;
