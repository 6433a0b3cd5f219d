//! Configuration error types for the SES client.

use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration field is missing or empty.
    #[error("Missing required configuration: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// The endpoint is not a parseable URL.
    #[error("Invalid endpoint URL '{endpoint}': {source}")]
    InvalidEndpoint {
        /// The endpoint as configured.
        endpoint: String,
        /// The parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The endpoint parsed but cannot address an HTTP service.
    #[error("Unsupported endpoint URL '{endpoint}': expected an http or https URL with a host")]
    UnsupportedEndpoint {
        /// The endpoint as configured.
        endpoint: String,
    },
}
