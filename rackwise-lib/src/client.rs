//! Main RackClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use url::Url;

use crate::error::ApiError;
use crate::error::Error;

/// The main client for the warehouse rack API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```ignore
/// use rackwise_lib::RackClient;
///
/// let client = RackClient::builder()
///     .base_url("https://wms.example.com/api")
///     .timeout(Duration::from_secs(30))
///     .build()?;
///
/// let page = client.list_racks(1, 20).await?;
/// ```
#[derive(Clone)]
pub struct RackClient {
    inner: Arc<RackClientInner>,
}

struct RackClientInner {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl RackClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> RackClientBuilder<Missing> {
        RackClientBuilder::new()
    }

    /// Returns the base URL of the rack service.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url.trim_end_matches('/'), path)
    }

    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers
    }

    /// Makes an HTTP request and maps non-success responses to errors.
    ///
    /// This is the low-level request method used by all API operations.
    /// Failures are terminal: there is no retry at this layer.
    pub(crate) async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<reqwest::Response, Error> {
        log::debug!("{} {}", method, url);

        let mut request = self
            .inner
            .http_client
            .request(method, url)
            .headers(self.default_headers());

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                let limit = self.inner.timeout.unwrap_or(Duration::ZERO);
                Error::Api(ApiError::Timeout(limit))
            } else {
                Error::Api(ApiError::from(e))
            }
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            log::warn!("request failed with HTTP {}: {}", status.as_u16(), body);
            Err(Error::Api(ApiError::http(status.as_u16(), body)))
        }
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`RackClient`].
///
/// Uses the typestate pattern to ensure the base URL is set at compile time.
pub struct RackClientBuilder<UrlField> {
    base_url: UrlField,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl RackClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the base URL of the rack service.
    pub fn base_url(self, url: impl Into<String>) -> RackClientBuilder<Set<String>> {
        RackClientBuilder {
            base_url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for RackClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> RackClientBuilder<U> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl RackClientBuilder<Set<String>> {
    /// Builds the [`RackClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the base URL does not parse.
    pub fn build(self) -> Result<RackClient, Error> {
        let base_url = self.base_url.0;
        Url::parse(&base_url).map_err(|e| {
            Error::Api(ApiError::InvalidUrl(format!("{}: {}", base_url, e)))
        })?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(|e| Error::Api(ApiError::from(e)))?
            }
        };

        Ok(RackClient {
            inner: Arc::new(RackClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
