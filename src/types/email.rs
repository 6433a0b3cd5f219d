//! Outgoing message types and their query-parameter encoding.

use std::collections::BTreeMap;
use std::fmt;

/// `Action` value for sending a single message.
pub const SEND_EMAIL_ACTION: &str = "SendEmail";

/// Query parameter names of the `SendEmail` action.
pub mod params {
    /// Operation selector.
    pub const ACTION: &str = "Action";
    /// Sender address.
    pub const SOURCE: &str = "Source";
    /// The single recipient.
    pub const TO_ADDRESS: &str = "Destination.ToAddresses.member.1";
    /// Subject line.
    pub const SUBJECT: &str = "Message.Subject.Data";
    /// Plain-text body.
    pub const TEXT_BODY: &str = "Message.Body.Text.Data";
    /// HTML body.
    pub const HTML_BODY: &str = "Message.Body.Html.Data";
    /// Access key identifier.
    pub const ACCESS_KEY_ID: &str = "AWSAccessKeyId";
}

/// Body format of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyFormat {
    /// Plain text.
    Text,
    /// HTML.
    Html,
}

impl BodyFormat {
    /// The format name as used in parameter names.
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyFormat::Text => "Text",
            BodyFormat::Html => "Html",
        }
    }

    /// The query parameter that carries a body of this format.
    pub fn body_parameter(&self) -> &'static str {
        match self {
            BodyFormat::Text => params::TEXT_BODY,
            BodyFormat::Html => params::HTML_BODY,
        }
    }
}

impl fmt::Display for BodyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-recipient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// How `body` is to be interpreted.
    pub format: BodyFormat,
}

impl Email {
    /// Create a message with an explicit body format.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        format: BodyFormat,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            format,
        }
    }

    /// Create a plain-text message.
    pub fn text(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::new(from, to, subject, body, BodyFormat::Text)
    }

    /// Create an HTML message.
    pub fn html(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::new(from, to, subject, body, BodyFormat::Html)
    }

    /// Build the `SendEmail` query parameters, sorted by name.
    ///
    /// ```
    /// use integrations_aws_ses_classic::types::Email;
    ///
    /// let email = Email::text("a@example.com", "b@example.com", "Hi", "Hello");
    /// let params = email.query_params("AKID");
    ///
    /// assert_eq!(params["Action"], "SendEmail");
    /// assert_eq!(params["Message.Body.Text.Data"], "Hello");
    /// assert!(!params.contains_key("Message.Body.Html.Data"));
    /// ```
    pub fn query_params(&self, access_key: &str) -> BTreeMap<String, String> {
        let mut query = BTreeMap::new();
        query.insert(params::ACTION.to_string(), SEND_EMAIL_ACTION.to_string());
        query.insert(params::SOURCE.to_string(), self.from.clone());
        query.insert(params::TO_ADDRESS.to_string(), self.to.clone());
        query.insert(params::SUBJECT.to_string(), self.subject.clone());
        query.insert(self.format.body_parameter().to_string(), self.body.clone());
        query.insert(params::ACCESS_KEY_ID.to_string(), access_key.to_string());
        query
    }
}
