use std::fmt;

/// Result type for feedline-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Locale tag is not one of the supported locales
    UnknownLocale(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownLocale(tag) => {
                write!(f, "Unknown locale '{}' (expected one of: pt-br, en)", tag)
            }
        }
    }
}

impl std::error::Error for Error {}
