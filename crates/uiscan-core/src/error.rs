//! Error types for uiscan.

use thiserror::Error;

/// Main error type for uiscan operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Command invoked without a screenshot path
    #[error("usage: {0}")]
    Usage(String),

    /// Screenshot file could not be read or decoded
    #[error("Failed to load image {path}: {message}")]
    ImageLoad {
        /// Path as given on the command line
        path: String,
        /// Decoder or filesystem message
        message: String,
    },

    /// Pixel data does not match the declared dimensions
    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(String),

    /// Invalid detection settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error() {
        let err = Error::Usage("uiscan <screenshot>".to_string());
        assert_eq!(err.to_string(), "usage: uiscan <screenshot>");
    }

    #[test]
    fn test_image_load_error() {
        let err = Error::ImageLoad {
            path: "shot.png".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load image shot.png: No such file or directory"
        );
    }

    #[test]
    fn test_invalid_buffer_error() {
        let err = Error::InvalidBuffer("expected 300 bytes, got 299".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid pixel buffer: expected 300 bytes, got 299"
        );
    }

    #[test]
    fn test_config_error() {
        let err = Error::Config("fusion.cell_size must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: fusion.cell_size must be > 0"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_result_type() {
        let success: Result<i32> = Ok(42);
        assert!(success.is_ok());

        let failure: Result<i32> = Err(Error::Config("bad".to_string()));
        assert!(failure.is_err());
    }
}
