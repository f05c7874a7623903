use thiserror::Error;

#[derive(Debug, Error)]
pub enum GoalieError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The crash-source API answered with an explicit error indicator.
    #[error("Crash source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Notification delivery failed: {0}")]
    Delivery(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
