use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatRowError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse Error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Config Error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Validation Error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, StatRowError>;
