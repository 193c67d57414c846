use thiserror::Error;

#[derive(Debug, Error)]
pub enum CockpitError {
    #[error("config file not found: {0}")]
    ConfigNotFound(std::path::PathBuf),

    #[error("invalid tender config: {0}")]
    InvalidConfig(String),

    #[error("unknown announcement scenario: {0}")]
    UnknownScenario(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
