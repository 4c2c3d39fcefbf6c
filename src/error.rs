//! Error types for docpipe.
//!
//! All fallible operations in the crate return [`DocpipeError`].
//!
//! **System errors bubble up unchanged:**
//! - `DocpipeError::Io` (from `std::io::Error`) - file system errors,
//!   permission errors. These indicate real system problems and are never
//!   wrapped or suppressed.
//!
//! **Application errors are wrapped with context:**
//! - `Parsing` - corrupt or unparseable documents
//! - `Validation` - invalid paths or parameters
//! - `Serialization` - malformed configuration mappings
//! - `MissingDependency` - the parsing capability is unavailable
use thiserror::Error;

/// Result type alias using [`DocpipeError`].
pub type Result<T> = std::result::Result<T, DocpipeError>;

/// Main error type for all docpipe operations.
///
/// Application variants preserve their error chain through the optional
/// `source` field; IO errors convert transparently via `From`.
#[derive(Debug, Error)]
pub enum DocpipeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Missing dependency: {0}")]
    MissingDependency(String),
}

impl From<serde_json::Error> for DocpipeError {
    fn from(err: serde_json::Error) -> Self {
        DocpipeError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<crate::pdf::PdfError> for DocpipeError {
    fn from(err: crate::pdf::PdfError) -> Self {
        DocpipeError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl DocpipeError {
    /// Create a Parsing error.
    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Parsing error with source.
    pub fn parsing_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parsing {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Validation error with source.
    pub fn validation_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Serialization error.
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Serialization error with source.
    pub fn serialization_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
