//! Error types for hgvs-coords
//!
//! A single error enum covers the whole crate. Each variant maps to an
//! [`ErrorCode`] so callers can branch on the category without matching
//! message text.

use std::fmt;
use thiserror::Error;

/// Error codes for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Input errors (E1xxx)
    /// No variant descriptors were supplied
    NoDescriptors = 1001,
    /// The backend could not parse the descriptor
    InvalidVariant = 1002,

    // Backend errors (E2xxx)
    /// Connection to the transcript data source failed
    ConnectionFailed = 2001,
    /// Coordinate mapping failed inside the backend
    MappingFailed = 2002,
    /// Backend validation rejected the variant
    ValidationFailed = 2003,

    // Conversion errors (E3xxx)
    /// Accession could not be turned into a chromosome label
    InvalidAccession = 3001,
    /// Variant has no usable start/end position
    MissingPosition = 3002,

    // IO errors (E9xxx)
    /// File IO error
    IoError = 9001,
    /// JSON error
    JsonError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::NoDescriptors => "no variant descriptors supplied",
            ErrorCode::InvalidVariant => "invalid HGVS variant",
            ErrorCode::ConnectionFailed => "data provider connection failed",
            ErrorCode::MappingFailed => "coordinate mapping failed",
            ErrorCode::ValidationFailed => "variant validation failed",
            ErrorCode::InvalidAccession => "invalid chromosome accession",
            ErrorCode::MissingPosition => "variant position not available",
            ErrorCode::IoError => "file I/O error",
            ErrorCode::JsonError => "JSON error",
            ErrorCode::ConfigError => "configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for hgvs-coords
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// No descriptors were given to a conversion call
    #[error("Must provide at least one variant descriptor")]
    NoDescriptors,

    /// Descriptor rejected by the backend parser, or by the validator
    #[error("Invalid HGVS variant {variant}: {msg}")]
    InvalidVariant { variant: String, msg: String },

    /// Backend parser failure
    #[error("Parse error: {msg}")]
    Parse { msg: String },

    /// Backend validation failure
    #[error("Validation error: {msg}")]
    Validation { msg: String },

    /// Coordinate mapping failure
    #[error("Mapping error for {variant}: {msg}")]
    Mapping { variant: String, msg: String },

    /// The data provider could not be reached or set up
    #[error("Connection error: {msg}")]
    Connection { msg: String },

    /// Accession whose chromosome index is not numeric
    #[error("Cannot derive chromosome from accession {accession}")]
    Accession { accession: String },

    /// Variant location without a definite start or end
    #[error("No definite start/end position for {variant}")]
    MissingPosition { variant: String },

    /// Configuration problem
    #[error("Config error: {msg}")]
    Config { msg: String },

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON error
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl ConvertError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            ConvertError::NoDescriptors => ErrorCode::NoDescriptors,
            ConvertError::InvalidVariant { .. } | ConvertError::Parse { .. } => {
                ErrorCode::InvalidVariant
            }
            ConvertError::Validation { .. } => ErrorCode::ValidationFailed,
            ConvertError::Mapping { .. } => ErrorCode::MappingFailed,
            ConvertError::Connection { .. } => ErrorCode::ConnectionFailed,
            ConvertError::Accession { .. } => ErrorCode::InvalidAccession,
            ConvertError::MissingPosition { .. } => ErrorCode::MissingPosition,
            ConvertError::Config { .. } => ErrorCode::ConfigError,
            ConvertError::Io { .. } => ErrorCode::IoError,
            ConvertError::Json { .. } => ErrorCode::JsonError,
        }
    }

    /// Message prefixed with the error code, e.g. `[E3001] Cannot derive ...`
    pub fn detailed_message(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Json {
            msg: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ConvertError {
    fn from(err: toml::de::Error) -> Self {
        ConvertError::Config {
            msg: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_format() {
        assert_eq!(ErrorCode::NoDescriptors.as_str(), "E1001");
        assert_eq!(ErrorCode::InvalidAccession.to_string(), "E3001");
        assert_eq!(ErrorCode::ConfigError.as_str(), "E9003");
    }

    #[test]
    fn test_error_codes_by_variant() {
        let err = ConvertError::Accession {
            accession: "NC_0000XX.1".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidAccession);

        let err = ConvertError::Parse {
            msg: "bad".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidVariant);
    }

    #[test]
    fn test_detailed_message() {
        let err = ConvertError::MissingPosition {
            variant: "NC_000001.10:g.?".to_string(),
        };
        assert_eq!(
            err.detailed_message(),
            "[E3002] No definite start/end position for NC_000001.10:g.?"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConvertError = io.into();
        assert!(matches!(err, ConvertError::Io { .. }));
        assert_eq!(err.code().description(), "file I/O error");
    }
}
