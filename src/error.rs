//! Error types for the mite client library.
//!
//! Only local configuration problems and transport failures are errors.
//! Response-level failures (unexpected status code, missing envelope key,
//! undecodable body) are reported by the client as an absent result instead.

use thiserror::Error;

/// The main error type for all mite client operations.
#[derive(Error, Debug)]
pub enum MiteError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization error for a request body
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query string encoding error
    #[error("Query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// Base URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// A credential or user agent is not a valid HTTP header value
    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),

    /// Missing required credentials
    #[error("Missing credentials: account name and API key required")]
    MissingCredentials,
}

impl MiteError {
    /// Whether this error came from the network layer rather than local configuration.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpMiddleware(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_header_display() {
        let error = MiteError::InvalidHeader("X-MiteApiKey");
        assert_eq!(error.to_string(), "Invalid header value for X-MiteApiKey");
        assert!(!error.is_transport());
    }

    #[test]
    fn test_url_error_from() {
        let error: MiteError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(error, MiteError::Url(_)));
    }
}
