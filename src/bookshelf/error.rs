use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    /// The persistence target could not be read or written.
    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    /// A persisted entry (or the document holding it) has the wrong shape.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// The id counter cannot advance past its current value.
    #[error("No ids left to assign (counter at {0})")]
    IdsExhausted(u64),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
