//! HTTP request type handed to a [`Transport`](super::Transport).

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;
use url::Url;

/// A fully built request to the SES endpoint.
///
/// The query string is part of the URL; the client stamps the signing
/// headers before the request reaches the transport.
#[derive(Debug, Clone)]
pub struct SesRequest {
    /// HTTP method
    method: Method,

    /// Endpoint URL including the query string
    url: Url,

    /// HTTP headers
    headers: HeaderMap,
}

impl SesRequest {
    /// Create a new GET request.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_classic::http::SesRequest;
    /// use url::Url;
    ///
    /// let url = Url::parse("https://email.us-east-1.amazonaws.com").unwrap();
    /// let request = SesRequest::get(url).query([("Action", "SendEmail")]);
    ///
    /// assert_eq!(request.query_param("Action").as_deref(), Some("SendEmail"));
    /// ```
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Create a new request with the specified method.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
        }
    }

    /// Append form-encoded query parameters to the URL.
    pub fn query<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.url.query_pairs_mut().extend_pairs(params);
        self
    }

    /// Set a header, replacing any previous value.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Get the HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get mutable access to the headers.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Decoded query parameters in URL order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Look up a decoded query parameter.
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}
