//! Error type shared by the HTTP client and the session facade.

/// Failure of a call against the travel API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure, or a response body that could not be decoded.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },

    /// An authenticated call was attempted without a session token.
    #[error("not authenticated")]
    NotAuthenticated,

    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_includes_body() {
        let err = ApiError::Status {
            status: 400,
            body: "{\"non_field_errors\":[\"bad\"]}".to_string(),
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("non_field_errors"));
    }
}
