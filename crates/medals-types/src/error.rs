use std::fmt;

/// Result type for medals-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Medal name outside of the fixed gold/silver/bronze catalog
    UnknownMedal(String),

    /// Appearance other than light or dark
    UnknownAppearance(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownMedal(name) => {
                write!(f, "Unknown medal '{}' (expected gold, silver or bronze)", name)
            }
            Error::UnknownAppearance(name) => {
                write!(f, "Unknown appearance '{}' (expected light or dark)", name)
            }
        }
    }
}

impl std::error::Error for Error {}
