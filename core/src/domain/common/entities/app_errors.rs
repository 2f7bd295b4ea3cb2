use thiserror::Error;

/// Error taxonomy shared by every domain. Errors are values returned to the
/// caller; nothing in the core terminates the process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Malformed date, invalid category, missing required field. Recovered
    /// locally by rejecting the offending record, never by aborting a batch.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Record absent or not owned by the requester.
    #[error("resource not found")]
    NotFound,

    /// An external collaborator (LLM, push gateway) is unavailable or
    /// returned an unparsable payload. Triggers fallback behavior where one
    /// is defined.
    #[error("external service error: {0}")]
    ExternalService(String),

    #[error("internal server error")]
    InternalServerError,
}
