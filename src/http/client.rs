//! Signed dispatch of query requests.
//!
//! [`SesHttpClient`] turns a set of query parameters into one signed GET,
//! hands it to the transport and maps the outcome:
//!
//! - status exactly 200: the body text is returned
//! - any other status: `SesError::Remote` carrying the verbatim body
//! - transport failure: `SesError::Transport` carrying the original error

use chrono::{DateTime, Utc};
use http::StatusCode;
use std::fmt;
use std::sync::Arc;
use url::Url;

use crate::config::SesConfig;
use crate::error::{SesError, SesResult};
use crate::signing::sign_request;

use super::request::SesRequest;
use super::transport::{ReqwestTransport, Transport};

/// HTTP client for the classic SES query API.
///
/// Cheap to clone; clones share the configuration and the transport.
#[derive(Clone)]
pub struct SesHttpClient {
    /// Key pair and endpoint
    config: Arc<SesConfig>,

    /// HTTP transport
    transport: Arc<dyn Transport>,
}

impl SesHttpClient {
    /// Create a client using the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns `SesError::Configuration` if the transport cannot be created.
    pub fn new(config: Arc<SesConfig>) -> SesResult<Self> {
        let transport = Arc::new(ReqwestTransport::new()?) as Arc<dyn Transport>;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client with a custom transport.
    ///
    /// This is useful for testing or for transports with caller-specific
    /// timeouts and TLS settings.
    pub fn with_transport(config: Arc<SesConfig>, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Build the signed request for `params` at `timestamp`.
    pub fn build_request<I, K, V>(&self, params: I, timestamp: &DateTime<Utc>) -> SesResult<SesRequest>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = SesRequest::get(self.endpoint().clone()).query(params);
        sign_request(request.headers_mut(), self.config.credentials(), timestamp)?;
        Ok(request)
    }

    /// Sign `params` with the current time and send them.
    ///
    /// # Errors
    ///
    /// See the module documentation.
    pub fn send_query<I, K, V>(&self, params: I) -> SesResult<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.send_query_at(params, &Utc::now())
    }

    /// Sign `params` with the given instant and send them.
    pub(crate) fn send_query_at<I, K, V>(
        &self,
        params: I,
        timestamp: &DateTime<Utc>,
    ) -> SesResult<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let request = self.build_request(params, timestamp)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(endpoint = %self.endpoint(), "Sending SES request");

        let response = match self.transport.send(request) {
            Ok(response) => response,
            Err(source) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %source, "SES transport error");

                return Err(SesError::Transport { source });
            }
        };

        let status = response.status();
        let body = response.into_text();

        if status != StatusCode::OK {
            #[cfg(feature = "tracing")]
            tracing::warn!(status = %status, body = %body, "SES request rejected");

            return Err(SesError::Remote { status, body });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(status = %status, "SES request accepted");

        Ok(body)
    }

    /// Get the configuration requests are signed with.
    pub fn config(&self) -> &SesConfig {
        &self.config
    }

    /// Get the endpoint URL requests are sent to.
    pub fn endpoint(&self) -> &Url {
        self.config.endpoint_url()
    }
}

impl fmt::Debug for SesHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SesHttpClient")
            .field("credentials", self.config.credentials())
            .field("endpoint", &self.endpoint().as_str())
            .finish_non_exhaustive()
    }
}
