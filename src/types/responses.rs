//! Response shapes of the `SendEmail` action.
//!
//! The client hands back the raw response body. Callers that want the
//! identifiers inside it can parse the body with [`SendEmailResponse::from_xml`].

use serde::Deserialize;

use crate::error::SesResult;

/// Identifiers returned for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEmailResponse {
    /// Message ID assigned by SES (`SendEmailResult > MessageId`).
    pub message_id: String,
    /// Request ID for support cases (`ResponseMetadata > RequestId`).
    pub request_id: String,
}

impl SendEmailResponse {
    /// Parse a `SendEmailResponse` document.
    ///
    /// ```
    /// use integrations_aws_ses_classic::types::SendEmailResponse;
    ///
    /// let body = "<SendEmailResponse>\
    ///     <SendEmailResult><MessageId>msg-1</MessageId></SendEmailResult>\
    ///     <ResponseMetadata><RequestId>req-1</RequestId></ResponseMetadata>\
    ///     </SendEmailResponse>";
    ///
    /// let response = SendEmailResponse::from_xml(body).unwrap();
    /// assert_eq!(response.message_id, "msg-1");
    /// assert_eq!(response.request_id, "req-1");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `SesError::Serialization` if the document is malformed or an
    /// identifier is missing.
    pub fn from_xml(xml: &str) -> SesResult<Self> {
        let wire: SendEmailResponseXml = quick_xml::de::from_str(xml)?;
        Ok(Self {
            message_id: wire.send_email_result.message_id,
            request_id: wire.response_metadata.request_id,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailResponseXml {
    send_email_result: SendEmailResultXml,
    response_metadata: ResponseMetadataXml,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailResultXml {
    message_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ResponseMetadataXml {
    request_id: String,
}
