use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Failed to read graph source: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed graph source: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
