use thiserror::Error;

/// Error type that captures setup and persistence failures.
///
/// Validation outcomes are deliberately absent: a failing section predicate
/// is an ordinary `false`, never an error.
#[derive(Debug, Error)]
pub enum AdmissionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("no active session; log in before opening the wizard")]
    SessionRequired,
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
}
