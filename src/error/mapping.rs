//! Opt-in parsing of the service's error documents.
//!
//! [`SesError::Remote`] only carries the raw body. When the body is one of
//! the service's `ErrorResponse` documents, [`parse_error_response`] pulls
//! out the error code and message.
//!
//! ```rust
//! use integrations_aws_ses_classic::error::parse_error_response;
//!
//! let body = "<ErrorResponse><Error><Type>Sender</Type>\
//!     <Code>MessageRejected</Code><Message>Email address is not verified.</Message>\
//!     </Error><RequestId>abc-123</RequestId></ErrorResponse>";
//!
//! let error = parse_error_response(body).unwrap();
//! assert_eq!(error.code, "MessageRejected");
//! ```

use serde::Deserialize;

use super::{SesError, SesResult};

/// AWS error response structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsErrorResponse {
    /// Fault side reported by the service (`Sender` or `Receiver`).
    pub error_type: String,
    /// The AWS error code, e.g. `MessageRejected`.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// AWS request ID for debugging.
    pub request_id: Option<String>,
}

/// Parse an `ErrorResponse` document.
///
/// # Errors
///
/// Returns [`SesError::Serialization`] if the body is not an `ErrorResponse`.
pub fn parse_error_response(body: &str) -> SesResult<AwsErrorResponse> {
    let wire: ErrorResponseXml = quick_xml::de::from_str(body)?;
    Ok(AwsErrorResponse {
        error_type: wire.error.error_type,
        code: wire.error.code,
        message: wire.error.message,
        request_id: wire.request_id,
    })
}

impl SesError {
    /// Parse the body of a remote error as an `ErrorResponse` document.
    ///
    /// Returns `None` for other variants and for bodies that do not parse.
    pub fn aws_error_response(&self) -> Option<AwsErrorResponse> {
        self.body().and_then(|body| parse_error_response(body).ok())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorResponseXml {
    error: ErrorXml,
    #[serde(default)]
    request_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorXml {
    #[serde(rename = "Type", default)]
    error_type: String,
    code: String,
    #[serde(default)]
    message: String,
}
