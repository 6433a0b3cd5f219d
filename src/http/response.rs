//! HTTP response type returned by a [`Transport`](super::Transport).

use http::{HeaderMap, StatusCode};

/// A response from the SES endpoint with its body fully read.
#[derive(Debug, Clone)]
pub struct SesResponse {
    /// HTTP status code
    status: StatusCode,

    /// Response headers
    headers: HeaderMap,

    /// Response body
    body: Vec<u8>,
}

impl SesResponse {
    /// Create a new response.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_classic::http::SesResponse;
    /// use http::{HeaderMap, StatusCode};
    ///
    /// let response = SesResponse::new(StatusCode::OK, HeaderMap::new(), b"body".to_vec());
    /// assert_eq!(response.text(), "body");
    /// ```
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Shorthand for a response without headers.
    pub fn with_body(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, HeaderMap::new(), body.into())
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text. Invalid UTF-8 sequences are replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Consume the response and return the body as text.
    pub fn into_text(self) -> String {
        match String::from_utf8(self.body) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    /// AWS request ID from the `x-amzn-RequestId` header, if present.
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-amzn-requestid")
            .and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_response_accessors() {
        let response = SesResponse::with_body(StatusCode::FORBIDDEN, "AccessDenied");

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(response.body(), b"AccessDenied");
        assert_eq!(response.text(), "AccessDenied");
        assert_eq!(response.into_text(), "AccessDenied");
    }

    #[test]
    fn test_request_id_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-requestid", HeaderValue::from_static("req-42"));
        let response = SesResponse::new(StatusCode::OK, headers, Vec::new());

        assert_eq!(response.request_id(), Some("req-42"));
        assert_eq!(SesResponse::with_body(StatusCode::OK, "").request_id(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let response = SesResponse::with_body(StatusCode::OK, vec![b'o', b'k', 0xff]);
        assert_eq!(response.into_text(), "ok\u{fffd}");
    }
}
