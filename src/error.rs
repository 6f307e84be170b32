use http::StatusCode;
use thiserror::Error;
pub use url::ParseError as UrlParseError;

/// Error types for the Collins API client.
#[derive(Error, Debug)]
pub enum CollinsError {
    /// A required argument was missing or empty.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    /// The HTTP request could not be carried out.
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    /// The server answered with a status code the operation does not accept.
    /// The response body is kept for context.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// The response body was not the expected JSON shape.
    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// The server reported success at the HTTP layer but signaled a logical
    /// failure inside the response envelope.
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// Error parsing URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),
}

/// Result type for Collins API operations.
pub type CollinsResult<T> = Result<T, CollinsError>;
