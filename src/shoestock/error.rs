use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Inventory file not found: {0}")]
    ResourceNotFound(String),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid restock amount: {0} (must be a positive whole number)")]
    InvalidDelta(i64),

    #[error("No shoes in stock")]
    EmptyStore,

    #[error("Record handle {0} is out of range")]
    UnknownRecord(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
