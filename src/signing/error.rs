//! Signing error types.

use thiserror::Error;

use crate::error::SesError;

/// Errors that can occur while stamping the signing headers.
#[derive(Debug, Error)]
pub enum SigningError {
    /// A computed value cannot be carried in an HTTP header.
    ///
    /// # Examples
    ///
    /// ```
    /// use integrations_aws_ses_classic::signing::SigningError;
    ///
    /// let error = SigningError::InvalidHeaderValue {
    ///     header: "X-Amzn-Authorization".to_string(),
    ///     message: "failed to parse header value".to_string(),
    /// };
    /// assert_eq!(
    ///     error.to_string(),
    ///     "Invalid value for header X-Amzn-Authorization: failed to parse header value"
    /// );
    /// ```
    #[error("Invalid value for header {header}: {message}")]
    InvalidHeaderValue {
        /// The header being set.
        header: String,
        /// Details about the rejected value.
        message: String,
    },
}

impl From<SigningError> for SesError {
    fn from(err: SigningError) -> Self {
        SesError::Signing {
            message: err.to_string(),
        }
    }
}
