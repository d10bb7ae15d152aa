use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlinkError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Not authenticated")]
    NotAuthenticated(),
}

pub type Result<T> = std::result::Result<T, BlinkError>;
