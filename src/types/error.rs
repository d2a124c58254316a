use thiserror::Error;

/// Failures talking to the WakaTime-compatible API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication failed (401). Check your API key")]
    Unauthorized,

    #[error("Access forbidden (403). Your API key might not have permission")]
    Forbidden,

    #[error("Endpoint not found (404). Verify the API URL")]
    NotFound,

    #[error("Rate limit exceeded (429). Please try again later")]
    RateLimited,

    /// 502/503/504
    #[error("Server unavailable ({0}). Please try again later")]
    Unavailable(u16),

    #[error("Api request failed: {0}")]
    Status(u16),

    #[error("Request timed out after {0}s while contacting server")]
    Timeout(u64),

    #[error("Unable to reach server. Check your internet connection")]
    Unreachable,

    #[error("Invalid response from server (failed to decode JSON)")]
    InvalidBody,
}

impl ApiError {
    /// Classify a non-success HTTP status code
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            502..=504 => Self::Unavailable(status),
            _ => Self::Status(status),
        }
    }
}

/// wakastat error types
#[derive(Error, Debug)]
pub enum WakaError {
    /// Config file or credential problem
    #[error("config error: {0}")]
    Config(String),

    /// Remote API answered with an error
    #[error("failed to fetch stats: {0}")]
    Api(#[from] ApiError),

    /// HTTP client could not be built
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Range not available on the per-day endpoint
    #[error("{0}")]
    UnsupportedRange(String),
}

/// Result type alias for wakastat
pub type Result<T> = std::result::Result<T, WakaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WakaError::Config("api_key not found in config".into());
        assert_eq!(err.to_string(), "config error: api_key not found in config");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WakaError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }

    #[test]
    fn test_api_error_from_status() {
        assert!(matches!(ApiError::from_status(401), ApiError::Unauthorized));
        assert!(matches!(ApiError::from_status(403), ApiError::Forbidden));
        assert!(matches!(ApiError::from_status(404), ApiError::NotFound));
        assert!(matches!(ApiError::from_status(429), ApiError::RateLimited));
        assert!(matches!(ApiError::from_status(503), ApiError::Unavailable(503)));
        assert!(matches!(ApiError::from_status(500), ApiError::Status(500)));
    }

    #[test]
    fn test_api_error_wraps_into_waka_error() {
        let err: WakaError = ApiError::Unauthorized.into();
        assert_eq!(
            err.to_string(),
            "failed to fetch stats: Authentication failed (401). Check your API key"
        );
    }
}
