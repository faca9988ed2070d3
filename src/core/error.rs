//! Custom error types for the application.
//!
//! - [`UploadError`] - Network/fetch-related errors for the multipart upload

use thiserror::Error;

/// Errors raised while sending a submission to the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Configured endpoint is not an absolute URL
    #[error("Invalid upload endpoint: {0}")]
    InvalidEndpoint(String),
    /// Failed to build the multipart body
    #[error("Failed to build form data for part '{0}'")]
    FormDataFailed(&'static str),
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(UploadError::HttpError(502).to_string(), "HTTP error: 502");
        assert_eq!(
            UploadError::NetworkError("Failed to fetch".into()).to_string(),
            "Network error: Failed to fetch"
        );
        assert_eq!(
            UploadError::InvalidEndpoint("path/to/api".into()).to_string(),
            "Invalid upload endpoint: path/to/api"
        );
        assert_eq!(
            UploadError::FormDataFailed("file").to_string(),
            "Failed to build form data for part 'file'"
        );
    }
}
