use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    // Upstream errors
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Decoding upstream response failed: {0}")]
    Decode(#[from] serde_json::Error),

    // Feed errors
    #[error("Serializing feed failed: {0}")]
    Serialization(String),

    // Storage errors
    #[error("Feed file error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rss::Error> for FeedError {
    fn from(err: rss::Error) -> Self {
        FeedError::Serialization(err.to_string())
    }
}

impl From<time::error::Format> for FeedError {
    fn from(err: time::error::Format) -> Self {
        FeedError::Serialization(err.to_string())
    }
}

pub type FeedResult<T> = Result<T, FeedError>;
