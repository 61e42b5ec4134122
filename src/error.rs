use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Missing required parameter: {0}")]
    MissingCredential(&'static str),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Processor responded with HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
