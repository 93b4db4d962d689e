//! OSRM client error types.

/// Errors from the OSRM routing client.
#[derive(Debug, thiserror::Error)]
pub enum OsrmError {
    /// OSRM could not produce a route between the endpoints
    #[error("no route found between the given locations")]
    NoRoute,

    /// API returned an error status code
    #[error("routing API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be interpreted
    #[error("routing response parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = OsrmError::NoRoute;
        assert_eq!(err.to_string(), "no route found between the given locations");

        let err = OsrmError::ApiError {
            status: 502,
            message: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "routing API error 502: bad gateway");
    }
}
