use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API returned {status}")]
    Remote { status: u16 },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;
