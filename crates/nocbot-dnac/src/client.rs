//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use url::Url;

use crate::api::{
    AuthApi, DevicesApi, HostsApi, Ipv4Api, PathTraceApi, SitesApi, TasksApi, TemplatesApi,
};
use crate::error::{Error, Result};
use crate::types::AuthToken;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// DNA Center API client.
///
/// All operations except [`AuthApi::login`] require an [`AuthToken`]
/// obtained from the login endpoint. The token is passed per call rather
/// than stored, so one client can serve several sessions.
///
/// # Example
///
/// ```no_run
/// use nocbot_dnac::DnacClient;
///
/// # async fn example() -> nocbot_dnac::Result<()> {
/// let client = DnacClient::builder()
///     .base_url("https://10.93.130.20")
///     .credentials("admin", "secret")
///     .danger_accept_invalid_certs(true)
///     .build()?;
///
/// let token = client.auth().login().await?;
/// let devices = client.devices().list(&token).await?;
/// println!("{} devices in inventory", devices.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DnacClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL of the controller.
    pub(crate) base_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// Basic auth username for the login endpoint.
    pub(crate) username: String,
    /// Basic auth password for the login endpoint.
    pub(crate) password: String,
}

impl DnacClient {
    /// Get access to the inner client state (for API implementations).
    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }
}

impl DnacClient {
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

    /// Access the auth API.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access the device inventory API.
    pub fn devices(&self) -> DevicesApi {
        DevicesApi::new(self.clone())
    }

    /// Access the wired host API.
    pub fn hosts(&self) -> HostsApi {
        HostsApi::new(self.clone())
    }

    /// Access the CLI template programmer API.
    pub fn templates(&self) -> TemplatesApi {
        TemplatesApi::new(self.clone())
    }

    /// Access the site hierarchy API.
    pub fn sites(&self) -> SitesApi {
        SitesApi::new(self.clone())
    }

    /// Access the task polling API.
    pub fn tasks(&self) -> TasksApi {
        TasksApi::new(self.clone())
    }

    /// Access the path trace API.
    pub fn path_trace(&self) -> PathTraceApi {
        PathTraceApi::new(self.clone())
    }

    /// Access the IPv4 address lookup API.
    pub fn ipv4(&self) -> Ipv4Api {
        Ipv4Api::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Session cookie header for a token.
    fn cookie_header(token: &AuthToken) -> Result<HeaderValue> {
        HeaderValue::from_str(token.as_str())
            .map_err(|_| Error::Auth("session token contains invalid header bytes".to_string()))
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        token: &AuthToken,
        path: &str,
    ) -> Result<T> {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .get(url)
            .header(COOKIE, Self::cookie_header(token)?)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(
        &self,
        token: &AuthToken,
        path: &str,
        query: &Q,
    ) -> Result<T>
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
            .header(COOKIE, Self::cookie_header(token)?)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, token: &AuthToken, path: &str, body: &B) -> Result<T>
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
            .header(COOKIE, Self::cookie_header(token)?)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request, discarding the response body.
    pub(crate) async fn post_no_content<B>(
        &self,
        token: &AuthToken,
        path: &str,
        body: &B,
    ) -> Result<()>
    where
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .header(COOKIE, Self::cookie_header(token)?)
            .timeout(self.inner.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        Ok(())
    }

    /// Make a PUT request.
    pub(crate) async fn put<T, B>(&self, token: &AuthToken, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .put(url)
            .json(body)
            .header(COOKIE, Self::cookie_header(token)?)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a PUT request, discarding the response body.
    pub(crate) async fn put_no_content<B>(
        &self,
        token: &AuthToken,
        path: &str,
        body: &B,
    ) -> Result<()>
    where
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .put(url)
            .json(body)
            .header(COOKIE, Self::cookie_header(token)?)
            .timeout(self.inner.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        Ok(())
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, token: &AuthToken, path: &str) -> Result<()> {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .delete(url)
            .header(COOKIE, Self::cookie_header(token)?)
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
    ///
    /// The controller nests error details inconsistently, so this probes
    /// the usual spots before falling back to the bare status code.
    pub(crate) async fn extract_error(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();

        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => error_message(&body).unwrap_or_else(|| format!("HTTP {}", status)),
            Err(_) => format!("HTTP {}", status),
        };

        if status == 404 {
            Error::NotFound(message)
        } else if status == 401 || status == 403 {
            Error::Auth(message)
        } else {
            Error::Api { status, message }
        }
    }
}

/// Pull a human-readable message out of a controller error body.
fn error_message(body: &serde_json::Value) -> Option<String> {
    let candidates = [
        &body["response"]["message"],
        &body["response"]["detail"],
        &body["message"],
        &body["detail"],
    ];
    for candidate in candidates {
        if let Some(s) = candidate.as_str() {
            return Some(s.to_string());
        }
    }
    None
}

/// Builder for creating a DnacClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    timeout: Duration,
    accept_invalid_certs: bool,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            username: None,
            password: None,
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
            user_agent: None,
        }
    }

    /// Set the controller base URL. Required.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the basic auth credentials for login. Required.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Accept invalid TLS certificates.
    ///
    /// Controller appliances commonly ship with self-signed certificates,
    /// so lab deployments usually need this.
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
    pub fn build(self) -> Result<DnacClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;
        let username = self
            .username
            .ok_or_else(|| Error::Config("credentials are required".to_string()))?;
        let password = self
            .password
            .ok_or_else(|| Error::Config("credentials are required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("nocbot-dnac/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()?;

        Ok(DnacClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
                username,
                password,
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
    fn test_builder_requires_base_url() {
        let result = ClientBuilder::new().credentials("admin", "secret").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = ClientBuilder::new().base_url("https://10.0.0.1").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .base_url("https://10.0.0.1")
            .credentials("admin", "secret")
            .build()
            .unwrap();

        let url = client.url("api/v1/network-device").unwrap();
        assert_eq!(url.as_str(), "https://10.0.0.1/api/v1/network-device");

        let url = client.url("/api/v1/network-device").unwrap();
        assert_eq!(url.as_str(), "https://10.0.0.1/api/v1/network-device");
    }

    #[test]
    fn test_error_message_probing() {
        let body = serde_json::json!({"response": {"message": "bad request"}});
        assert_eq!(error_message(&body).as_deref(), Some("bad request"));

        let body = serde_json::json!({"detail": "denied"});
        assert_eq!(error_message(&body).as_deref(), Some("denied"));

        let body = serde_json::json!({"unrelated": true});
        assert!(error_message(&body).is_none());
    }
}
