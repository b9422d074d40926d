use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
