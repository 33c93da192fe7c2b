// Error handling framework for custom job execution

use thiserror::Error;

/// Parameter validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field value for {field}: {reason}")]
    InvalidFieldValue { field: String, reason: String },
}

/// Job execution errors
///
/// Every variant is caught at the `process_job` boundary and downgraded to a
/// Failure result carrying the error message; none propagate to the host.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error(transparent)]
    Parameter(#[from] ValidationError),

    #[error("HTTP request failed: {0}")]
    HttpRequestFailed(String),

    #[error("Token request failed: {0}")]
    TokenRequestFailed(String),

    #[error("API request failed with status {status}: {body}")]
    ApiRequestFailed { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
