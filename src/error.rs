use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML deserialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Speaker not found: {0}")]
    SpeakerNotFound(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Session key is used more than once: {0}")]
    DuplicateSession(String),

    #[error("Session key cannot be used as a page path: {0}")]
    InvalidSessionKey(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
