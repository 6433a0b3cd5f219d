//! Error types for the classic SES client.
//!
//! Every failure is surfaced to the immediate caller; nothing is retried or
//! classified internally. The variants map onto where the failure happened:
//!
//! - [`SesError::Configuration`]: missing credentials or a malformed endpoint
//! - [`SesError::Signing`]: the authorization value is not a valid header
//! - [`SesError::Transport`]: the HTTP exchange itself failed
//! - [`SesError::Remote`]: the service answered with a status other than 200
//! - [`SesError::Serialization`]: an XML response shape could not be parsed
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_classic::error::SesError;
//! use http::StatusCode;
//!
//! let error = SesError::Remote {
//!     status: StatusCode::FORBIDDEN,
//!     body: "AccessDenied".to_string(),
//! };
//!
//! assert_eq!(error.to_string(), "AccessDenied");
//! assert_eq!(error.status(), Some(StatusCode::FORBIDDEN));
//! ```

mod mapping;

pub use mapping::{parse_error_response, AwsErrorResponse};

use http::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;

/// Boxed error produced by a [`Transport`](crate::http::Transport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for SES operations.
pub type SesResult<T> = Result<T, SesError>;

/// Top-level error type for the classic SES client.
#[derive(Debug, Error)]
pub enum SesError {
    /// Configuration-related errors.
    ///
    /// Raised at construction time when credentials are missing or the
    /// endpoint cannot be used.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The signed authorization value could not be turned into a header.
    #[error("Signing error: {message}")]
    Signing {
        /// Description of the signing error.
        message: String,
    },

    /// Transport and network errors.
    ///
    /// The underlying error is kept as-is: its text is this error's text and
    /// it is reachable through [`std::error::Error::source`].
    #[error("{source}")]
    Transport {
        /// The error reported by the transport.
        #[source]
        source: TransportError,
    },

    /// The service answered with a status other than 200.
    ///
    /// The message is the verbatim response body.
    #[error("{body}")]
    Remote {
        /// HTTP status returned by the service.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// Serialization errors.
    ///
    /// These errors occur when parsing one of the XML response shapes fails.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error.
        message: String,
    },
}

impl SesError {
    /// Returns the HTTP status for remote errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SesError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body for remote errors.
    pub fn body(&self) -> Option<&str> {
        match self {
            SesError::Remote { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Returns the underlying transport error, if this is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_classic::error::SesError;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    /// let error = SesError::Transport { source: Box::new(io) };
    ///
    /// let inner = error.transport_error().unwrap();
    /// assert!(inner.downcast_ref::<std::io::Error>().is_some());
    /// ```
    pub fn transport_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            SesError::Transport { source } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<ConfigError> for SesError {
    fn from(err: ConfigError) -> Self {
        SesError::Configuration {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<quick_xml::DeError> for SesError {
    fn from(err: quick_xml::DeError) -> Self {
        SesError::Serialization {
            message: err.to_string(),
        }
    }
}
