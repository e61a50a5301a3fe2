//! Error type shared by every drill operation.

use thiserror::Error;

/// Result alias using [`DrillError`].
pub type Result<T> = std::result::Result<T, DrillError>;

#[derive(Debug, Error)]
pub enum DrillError {
    #[error("pool is empty")]
    EmptyPool,

    #[error("pool has {distinct} distinct entries, need at least {required}")]
    InsufficientPool { distinct: usize, required: usize },

    #[error("sample count must be at least 1 (got {0})")]
    InvalidCount(usize),

    #[error("duplicate entry id {0}")]
    DuplicateId(u32),

    #[error("entry {id} has an empty {field}")]
    EmptyField { id: u32, field: &'static str },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown level: {0}")]
    UnknownLevel(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
