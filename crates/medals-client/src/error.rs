use std::fmt;

/// Result type for medals-client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error types returned by the REST client
#[derive(Debug)]
pub enum ApiError {
    /// Server answered 404 for the resource
    NotFound { url: String },

    /// Any other non-success status
    Status { status: u16, url: String },

    /// Connection, timeout or other transport failure
    Network(reqwest::Error),

    /// Response body was not the expected JSON
    Decode(reqwest::Error),

    /// Configured base URL does not parse
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// HTTP status, when the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::InvalidUrl(_) => None,
        }
    }

    /// Short transport description without request internals.
    fn describe_network(error: &reqwest::Error) -> &'static str {
        if error.is_connect() {
            "connection refused or unreachable"
        } else if error.is_timeout() {
            "connection timed out"
        } else if error.is_request() {
            "request failed"
        } else if error.is_body() {
            "response body error"
        } else if error.is_redirect() {
            "too many redirects"
        } else {
            "network error"
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { url } => write!(f, "Not found: {}", url),
            ApiError::Status { status, url } => {
                write!(f, "Server returned HTTP {} for {}", status, url)
            }
            ApiError::Network(err) => write!(f, "Network error: {}", Self::describe_network(err)),
            ApiError::Decode(err) => write!(f, "Invalid response body: {}", err),
            ApiError::InvalidUrl(msg) => write!(f, "Invalid API URL: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(err) | ApiError::Decode(err) => Some(err),
            ApiError::NotFound { .. } | ApiError::Status { .. } | ApiError::InvalidUrl(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Network(err)
        }
    }
}
