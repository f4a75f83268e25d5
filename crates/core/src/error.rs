use std::time::Duration;

/// Domain error taxonomy for planet operations.
///
/// Callers classify failures by variant. Display strings are for logs; HTTP
/// bodies use the inner message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field is missing or malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The supplied identifier is not well-formed.
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// No resource matched the identifier.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backing store rejected or failed the operation.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// A store operation exceeded its time budget.
    #[error("Timeout: {operation} did not complete within {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}

impl CoreError {
    /// The user-facing message carried by this error.
    pub fn message(&self) -> String {
        match self {
            CoreError::Validation(msg)
            | CoreError::InvalidId(msg)
            | CoreError::NotFound(msg)
            | CoreError::Persistence(msg) => msg.clone(),
            CoreError::Timeout { operation, after } => {
                format!("{operation} timed out after {}s", after.as_secs())
            }
        }
    }
}
