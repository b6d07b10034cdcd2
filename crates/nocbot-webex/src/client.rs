//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::api::{MembershipsApi, MessagesApi, RoomsApi, TeamsApi};
use crate::error::{Error, ErrorResponse, Result};

/// Default base URL for the public Webex API.
pub const DEFAULT_BASE_URL: &str = "https://webexapis.com/v1";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Webex Teams API client.
///
/// Provides typed access to the teams, rooms, memberships and messages
/// endpoints used by NOC notification workflows.
///
/// # Example
///
/// ```no_run
/// use nocbot_webex::WebexClient;
///
/// # async fn example() -> nocbot_webex::Result<()> {
/// let client = WebexClient::builder()
///     .bearer_token("secret")
///     .build()?;
///
/// client.messages().post("NOC Alerts", "core-sw-1 unreachable").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WebexClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

impl WebexClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the teams API.
    pub fn teams(&self) -> TeamsApi {
        TeamsApi::new(self.clone())
    }

    /// Access the rooms API.
    pub fn rooms(&self) -> RoomsApi {
        RoomsApi::new(self.clone())
    }

    /// Access the memberships API.
    pub fn memberships(&self) -> MembershipsApi {
        MembershipsApi::new(self.clone())
    }

    /// Access the messages API.
    pub fn messages(&self) -> MessagesApi {
        MessagesApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    ///
    /// The base URL already carries the API version (`/v1`), so paths join
    /// directly onto it.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .get(url)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .get(url)
            .query(query)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a multipart POST request (file attachments).
    pub(crate) async fn post_multipart<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .post(url)
            .multipart(form)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .delete(url)
            .timeout(self.inner.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        Ok(())
    }

    /// Handle a response, extracting the body or error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Extract an error from a failed response.
    async fn extract_error(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();

        // Try to parse error response
        match response.json::<ErrorResponse>().await {
            Ok(err) => {
                if status == 404 {
                    Error::NotFound(err.message)
                } else if status == 401 {
                    Error::Auth(err.message)
                } else {
                    Error::Api {
                        status,
                        message: err.message,
                    }
                }
            }
            Err(_) => Error::Api {
                status,
                message: format!("HTTP {}", status),
            },
        }
    }
}

/// Builder for creating a WebexClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    bearer_token: Option<String>,
    timeout: Duration,
    accept_invalid_certs: bool,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            bearer_token: None,
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
            user_agent: None,
        }
    }

    /// Set the base URL. Defaults to the public Webex endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token. Required.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Accept invalid TLS certificates.
    ///
    /// Only meaningful for on-prem proxies with self-signed certs; the
    /// public Webex endpoint never needs this.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<WebexClient> {
        let token = self
            .bearer_token
            .ok_or_else(|| Error::Config("bearer_token is required".to_string()))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::Config("Invalid bearer token".to_string()))?;
        headers.insert(AUTHORIZATION, value);

        // Build HTTP client
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("nocbot-webex/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()?;

        Ok(WebexClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_token() {
        let result = ClientBuilder::new().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_defaults_to_public_endpoint() {
        let client = ClientBuilder::new()
            .bearer_token("secret")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "https://webexapis.com/v1/");
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080/v1/")
            .bearer_token("secret")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:8080/v1/");
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080/v1")
            .bearer_token("secret")
            .build()
            .unwrap();

        let url = client.url("rooms").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/rooms");

        let url = client.url("/rooms").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/rooms");
    }
}
