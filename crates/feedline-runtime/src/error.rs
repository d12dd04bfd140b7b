use feedline_types::PostId;
use std::fmt;
use std::path::PathBuf;

/// Result type for feedline-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Post data could not be parsed
    Parse { path: PathBuf, message: String },

    /// Post data file has an extension we cannot read
    UnsupportedFormat(PathBuf),

    /// Two records share the same post id
    DuplicatePost(PostId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Parse { path, message } => {
                write!(f, "Failed to parse {}: {}", path.display(), message)
            }
            Error::UnsupportedFormat(path) => write!(
                f,
                "Unsupported post file format: {} (expected .json or .toml)",
                path.display()
            ),
            Error::DuplicatePost(id) => write!(f, "Duplicate post id: {}", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_)
            | Error::Parse { .. }
            | Error::UnsupportedFormat(_)
            | Error::DuplicatePost(_) => None,
        }
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
