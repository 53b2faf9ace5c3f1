use std::fmt;

use medals_client::ApiError;
use medals_types::{CountryId, MedalKind};

/// Result type for medals-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Remote API call failed
    Api(ApiError),

    /// No local record with this id
    UnknownCountry(CountryId),

    /// Local adjustment would leave the `i64` range
    CountOutOfRange { id: CountryId, medal: MedalKind },

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api(err) => write!(f, "API error: {}", err),
            Error::UnknownCountry(id) => write!(f, "No country with id {}", id),
            Error::CountOutOfRange { id, medal } => {
                write!(f, "{} count of country {} is already at its limit", medal, id)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Api(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::UnknownCountry(_) | Error::CountOutOfRange { .. } | Error::Config(_) => None,
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
