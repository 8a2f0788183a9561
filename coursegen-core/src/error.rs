//! Error types for the Coursegen library

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

/// Boxed source error carried by the wrapping variants
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// The main error type for all Coursegen operations
///
/// Failures from the transport or the remote provider are wrapped once and
/// handed back to the caller untouched; nothing in the library retries or
/// recovers from them.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request never reached the provider, or the connection broke
    Network {
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<BoxError>,
    },

    /// The provider answered with an error
    Provider {
        /// Provider name (e.g., "openai")
        provider: String,
        /// Error message, usually the provider's own
        message: String,
        /// Time the provider asked us to wait (rate limits)
        retry_after: Option<Duration>,
        /// Underlying error if available
        source: Option<BoxError>,
    },

    /// Serialization/deserialization errors
    Serialization {
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<BoxError>,
    },

    /// Prompt template registration or rendering failed
    Template {
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<BoxError>,
    },

    /// Validation errors
    Validation(String),

    /// The transport gave up waiting for the provider
    Timeout,

    /// Missing or rejected credentials
    Authentication(String),

    /// Configuration errors
    Configuration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network { message, .. } => write!(f, "Network error: {message}"),
            Error::Provider {
                provider, message, ..
            } => write!(f, "Provider error ({provider}): {message}"),
            Error::Serialization { message, .. } => write!(f, "Serialization error: {message}"),
            Error::Template { message, .. } => write!(f, "Template error: {message}"),
            Error::Validation(msg) => write!(f, "Validation error: {msg}"),
            Error::Timeout => write!(f, "Operation timed out"),
            Error::Authentication(msg) => write!(f, "Authentication error: {msg}"),
            Error::Configuration(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Network { source, .. }
            | Error::Provider { source, .. }
            | Error::Serialization { source, .. }
            | Error::Template { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn StdError + 'static)),
            _ => None,
        }
    }
}

impl Error {
    /// Build a provider error without an underlying source
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Provider {
            provider: provider.into(),
            message: message.into(),
            retry_after: None,
            source: None,
        }
    }

    /// How long the provider asked the caller to back off, if it said so
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::Provider { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

/// Result type alias for Coursegen operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
