use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyzError {
    #[error("Entry not found: {0}")]
    EntryNotFound(usize),

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error(transparent)]
    Grid(#[from] termgrid::GridError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TallyzError>;
