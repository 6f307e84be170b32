use serde::Deserialize;

/// Logical-success sentinel carried in the envelope `status` field.
pub const STATUS_SUCCESS: &str = "success:ok";

/// Standard response envelope from the Collins server.
///
/// Every endpoint wraps its payload in a lower-case `status` string plus a
/// `data` payload whose keys are upper-case. The status string carries the
/// logical outcome independently of the HTTP status code, so callers should
/// check it for operations where a 2xx answer does not imply success.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Logical outcome, e.g. "success:ok".
    #[serde(default)]
    pub status: String,

    /// The decoded payload.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Whether the envelope reports logical success.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Envelope fields alone, for mutation endpoints whose payload carries no
/// information beyond the outcome string.
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
}

impl StatusResponse {
    /// Whether the envelope reports logical success.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
