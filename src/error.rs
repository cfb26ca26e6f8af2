//! Error types and handling for instpatch

/// Result type alias for instpatch operations
pub type Result<T> = std::result::Result<T, InstPatchError>;

/// Error types for the instpatch library
///
/// Querying the compiled-in version never fails. Errors only arise when a
/// caller hands the library a version string to interpret, or when the CLI
/// cannot write its output.
#[derive(Debug, thiserror::Error)]
pub enum InstPatchError {
    /// Input could not be read as a `major.minor.micro` triple
    #[error("Invalid version '{input}': {message}")]
    InvalidVersion { input: String, message: String },

    /// I/O errors while writing output
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl InstPatchError {
    /// Create an invalid version error
    pub fn invalid_version(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidVersion {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error from a standard I/O error
    pub fn from_io(source: std::io::Error, context: &str) -> Self {
        Self::Io {
            message: format!("{}: {}", context, source),
            source: Some(source),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for InstPatchError {
    fn from(err: std::io::Error) -> Self {
        Self::from_io(err, "I/O operation failed")
    }
}

impl From<serde_json::Error> for InstPatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = InstPatchError::invalid_version("1.x", "bad component");
        assert!(matches!(err, InstPatchError::InvalidVersion { .. }));

        let err = InstPatchError::serialization("oops");
        assert!(matches!(err, InstPatchError::Serialization { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = InstPatchError::from(io);
        assert!(matches!(err, InstPatchError::Io { source: Some(_), .. }));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_error_display() {
        let err = InstPatchError::invalid_version("1.x", "minor component is not a number");
        let display = format!("{}", err);
        assert!(display.contains("Invalid version '1.x'"));
        assert!(display.contains("minor component is not a number"));
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: InstPatchError = json_err.into();
        assert!(err.to_string().starts_with("Serialization error: JSON error"));
    }
}
