//! Transport layer abstraction for HTTP communication.
//!
//! The client builds and signs a [`SesRequest`] and hands it to a
//! [`Transport`]. The default implementation uses reqwest's blocking client;
//! tests substitute their own implementation.

use http::header::{HeaderValue, CONNECTION};
use reqwest::blocking::Client;
use std::time::Duration;

use super::request::SesRequest;
use super::response::SesResponse;
use crate::error::{SesError, SesResult, TransportError};

/// Trait for HTTP transport implementations.
///
/// A transport performs exactly one exchange per call and reads the whole
/// response body before returning. Errors are returned as produced by the
/// underlying HTTP stack; the client passes them to its caller unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    /// Send an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established, the
    /// exchange fails or the body cannot be read.
    fn send(&self, request: SesRequest) -> Result<SesResponse, TransportError>;
}

/// Reqwest-based HTTP transport implementation.
///
/// Connections are not reused: idle pooling is disabled and every request
/// carries `Connection: close`. No timeout applies unless one is configured
/// through [`ReqwestTransport::builder`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    /// The reqwest HTTP client
    client: Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport with default settings.
    ///
    /// # Errors
    ///
    /// Returns `SesError::Configuration` if the TLS backend cannot be initialized.
    pub fn new() -> SesResult<Self> {
        Self::builder().build()
    }

    /// Create a transport builder.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::time::Duration;
    /// use integrations_aws_ses_classic::http::ReqwestTransport;
    ///
    /// let transport = ReqwestTransport::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .connect_timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Get a reference to the underlying reqwest client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: SesRequest) -> Result<SesResponse, TransportError> {
        let response = self
            .client
            .request(request.method().clone(), request.url().clone())
            .headers(request.headers().clone())
            .header(CONNECTION, HeaderValue::from_static("close"))
            .send()?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();

        Ok(SesResponse::new(status, headers, body))
    }
}

/// Builder for [`ReqwestTransport`].
#[derive(Debug, Default)]
pub struct ReqwestTransportBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ReqwestTransportBuilder {
    /// Set a timeout for the whole exchange.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set a timeout for establishing the connection.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Set a custom user agent string.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// Returns `SesError::Configuration` if the client cannot be created,
    /// e.g. for an invalid user agent.
    pub fn build(self) -> SesResult<ReqwestTransport> {
        let mut builder = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(0);

        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(|e| SesError::Configuration {
            message: format!("Failed to create HTTP client: {}", e),
            source: Some(Box::new(e)),
        })?;

        Ok(ReqwestTransport { client })
    }
}
