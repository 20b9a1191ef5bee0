use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorankError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },
}

pub type Result<T> = std::result::Result<T, TutorankError>;
