use thiserror::Error;

/// Failure of a single persistence statement. Recovered locally by the
/// action layer into a user-facing message; never retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Statement failed: {0}")]
    Statement(String),
}
