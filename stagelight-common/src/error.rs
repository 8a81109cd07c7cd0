//! Common error types for Stagelight

use thiserror::Error;

/// Common result type for Stagelight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Stagelight crates
#[derive(Error, Debug)]
pub enum Error {
    /// Requested resource not found
    ///
    /// For content lookups the message names the `section/name` pair and
    /// never the underlying cause; callers see a uniform failure while the
    /// cause goes to the log.
    #[error("Content not found: {0}")]
    NotFound(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Uniform not-found error for a content key.
    pub fn content_not_found(section: &str, name: &str) -> Self {
        Error::NotFound(format!("{}/{}", section, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_key() {
        let err = Error::content_not_found("home", "hero");
        assert_eq!(err.to_string(), "Content not found: home/hero");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
