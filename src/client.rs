//! SES Client implementation.
//!
//! `SesClient` is the entry point of the crate. It owns an immutable
//! configuration and an [`SesHttpClient`], and exposes the two send
//! operations of the classic API:
//!
//! - [`SesClient::send_text`] fills `Message.Body.Text.Data`
//! - [`SesClient::send_html`] fills `Message.Body.Html.Data`
//!
//! Both perform exactly one blocking HTTP exchange and return the raw
//! response body.
//!
//! # Example
//!
//! ```rust,no_run
//! use integrations_aws_ses_classic::SesClient;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SesClient::new("AKID", "SECRET", "")?;
//!
//! let body = client.send_text(
//!     "sender@example.com",
//!     "recipient@example.com",
//!     "Hello",
//!     "Email body",
//! )?;
//! println!("{}", body);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::SesConfig;
use crate::error::SesResult;
use crate::http::{SesHttpClient, Transport};
use crate::types::{BodyFormat, Email};

/// Main client for the classic SES query API.
///
/// # Thread Safety
///
/// `SesClient` is `Send + Sync`. Configuration is immutable and every call
/// builds its own request, so one client can be used from several threads
/// at once without locking.
///
/// # Cloning
///
/// The client can be cloned cheaply; clones share the configuration and
/// the transport.
#[derive(Clone)]
pub struct SesClient {
    /// Client configuration
    config: Arc<SesConfig>,

    /// HTTP client for making requests
    http_client: SesHttpClient,
}

impl SesClient {
    /// Create a client from an access key pair and an endpoint.
    ///
    /// An empty `endpoint` selects
    /// [`DEFAULT_ENDPOINT`](crate::config::DEFAULT_ENDPOINT).
    ///
    /// # Errors
    ///
    /// Returns `SesError::Configuration` if either key is empty or the
    /// endpoint is not a usable http(s) URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use integrations_aws_ses_classic::SesClient;
    ///
    /// let client = SesClient::new("key", "secret", "").unwrap();
    /// assert_eq!(client.endpoint(), "https://email.us-east-1.amazonaws.com");
    ///
    /// assert!(SesClient::new("", "secret", "").is_err());
    /// ```
    pub fn new(access_key: &str, secret_key: &str, endpoint: &str) -> SesResult<Self> {
        Self::with_config(SesConfig::new(access_key, secret_key, endpoint)?)
    }

    /// Create a client from a built configuration and the default transport.
    ///
    /// # Errors
    ///
    /// Returns `SesError::Configuration` if the HTTP client cannot be initialized.
    pub fn with_config(config: SesConfig) -> SesResult<Self> {
        let config = Arc::new(config);
        let http_client = SesHttpClient::new(Arc::clone(&config))?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a client that sends through `transport`.
    pub fn with_transport(config: SesConfig, transport: Arc<dyn Transport>) -> Self {
        let config = Arc::new(config);
        let http_client = SesHttpClient::with_transport(Arc::clone(&config), transport);
        Self {
            config,
            http_client,
        }
    }

    /// Create a new SES client builder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use integrations_aws_ses_classic::SesClient;
    ///
    /// let client = SesClient::builder()
    ///     .credentials("AKID", "SECRET")
    ///     .endpoint("https://email.eu-west-1.amazonaws.com")
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder() -> SesClientBuilder {
        SesClientBuilder::default()
    }

    /// Get the client configuration.
    pub fn config(&self) -> &SesConfig {
        &self.config
    }

    /// The endpoint as configured, or the default endpoint.
    pub fn endpoint(&self) -> &str {
        self.config.endpoint()
    }

    /// Get the HTTP client.
    pub fn http_client(&self) -> &SesHttpClient {
        &self.http_client
    }

    /// Send a plain-text email and return the raw response body.
    ///
    /// # Errors
    ///
    /// - `SesError::Transport` if the HTTP exchange fails
    /// - `SesError::Remote` if the service answers with a status other than 200
    /// - `SesError::Signing` if the access key cannot be sent as a header
    pub fn send_text(&self, from: &str, to: &str, subject: &str, body: &str) -> SesResult<String> {
        self.send_mail(from, to, subject, body, BodyFormat::Text)
    }

    /// Send an HTML email and return the raw response body.
    ///
    /// # Errors
    ///
    /// Same as [`SesClient::send_text`].
    pub fn send_html(&self, from: &str, to: &str, subject: &str, body: &str) -> SesResult<String> {
        self.send_mail(from, to, subject, body, BodyFormat::Html)
    }

    /// Send a prepared [`Email`] and return the raw response body.
    ///
    /// The body can be parsed with
    /// [`SendEmailResponse::from_xml`](crate::types::SendEmailResponse::from_xml).
    pub fn send_email(&self, email: &Email) -> SesResult<String> {
        self.send_email_at(email, &Utc::now())
    }

    fn send_mail(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
        format: BodyFormat,
    ) -> SesResult<String> {
        self.send_email(&Email::new(from, to, subject, body, format))
    }

    pub(crate) fn send_email_at(&self, email: &Email, timestamp: &DateTime<Utc>) -> SesResult<String> {
        let params = email.query_params(self.config.credentials().access_key_id());
        self.http_client.send_query_at(params, timestamp)
    }
}

impl std::fmt::Debug for SesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SesClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for creating SES clients.
///
/// # Example
///
/// ```rust
/// use integrations_aws_ses_classic::{SesClient, SesConfig};
///
/// let config = SesConfig::builder()
///     .credentials("AKID", "SECRET")
///     .build()
///     .unwrap();
///
/// let client = SesClient::builder().config(config).build().unwrap();
/// ```
#[derive(Default)]
pub struct SesClientBuilder {
    config: Option<SesConfig>,
    access_key: Option<String>,
    secret_key: Option<String>,
    endpoint: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl SesClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the provided configuration.
    ///
    /// Takes precedence over `credentials` and `endpoint`.
    pub fn config(mut self, config: SesConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the access key pair.
    pub fn credentials(mut self, access_key: &str, secret_key: &str) -> Self {
        self.access_key = Some(access_key.to_string());
        self.secret_key = Some(secret_key.to_string());
        self
    }

    /// Set a custom endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Send through a custom transport instead of the default reqwest one.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the SES client.
    ///
    /// # Errors
    ///
    /// Returns `SesError::Configuration` if credentials are missing, the
    /// endpoint is unusable or the default transport cannot be created.
    pub fn build(self) -> SesResult<SesClient> {
        let config = match self.config {
            Some(config) => config,
            None => {
                let mut builder = SesConfig::builder();
                if let (Some(access_key), Some(secret_key)) = (&self.access_key, &self.secret_key) {
                    builder = builder.credentials(access_key, secret_key);
                }
                if let Some(endpoint) = self.endpoint {
                    builder = builder.endpoint(endpoint);
                }
                builder.build()?
            }
        };

        match self.transport {
            Some(transport) => Ok(SesClient::with_transport(config, transport)),
            None => SesClient::with_config(config),
        }
    }
}
