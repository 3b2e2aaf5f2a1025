use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyPoolError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ProxyPoolError>;
