// tradenotex-core/src/error.rs
// Error taxonomy for the provisioning run

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, SetupError>;

#[derive(Debug, Error)]
pub enum SetupError {
    /// Missing or unusable configuration (connection string, database name)
    #[error("configuration error: {0}")]
    Config(String),

    /// Any driver-level failure: connectivity, permissions, write errors
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A model failed to serialize into BSON
    #[error("BSON serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    /// A document read back from the server is missing an expected field
    #[error("malformed document: {0}")]
    Document(#[from] mongodb::bson::document::ValueAccessError),
}

impl SetupError {
    /// True when the underlying failure is a unique-index violation
    /// (server code 11000), e.g. inserting a second user named "demo".
    pub fn is_duplicate_key(&self) -> bool {
        use mongodb::error::{ErrorKind, WriteFailure};

        let SetupError::Database(err) = self else {
            return false;
        };
        match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
            ErrorKind::BulkWrite(failure) => failure
                .write_errors
                .as_ref()
                .is_some_and(|errors| errors.iter().any(|e| e.code == 11000)),
            _ => false,
        }
    }
}
