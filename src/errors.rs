use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Construction error: {0}")]
    Construction(String),

    #[error("Executor error: {0}")]
    Executor(String),

    #[error("Config error: {0}")]
    Config(String),
}
