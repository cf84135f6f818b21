use thiserror::Error;

/// Internal storage failure taxonomy. None of these variants ever crosses the
/// store API: reads collapse to empty collections, writes to no-ops.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage medium unavailable")]
    Unavailable,
    #[error("io error: {0}")]
    Io(String),
    #[error("serialize error: {0}")]
    Serialize(String),
}
