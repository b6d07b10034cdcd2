//! Controller login.

use reqwest::header::SET_COOKIE;
use tracing::debug;

use crate::client::DnacClient;
use crate::error::{Error, Result};
use crate::types::AuthToken;

/// Login endpoint path.
const LOGIN_PATH: &str = "api/system/v1/auth/login";

/// Auth API client.
pub struct AuthApi {
    client: DnacClient,
}

impl AuthApi {
    pub(crate) fn new(client: DnacClient) -> Self {
        Self { client }
    }

    /// Log in with basic auth and obtain a session token.
    ///
    /// The controller returns the JWT session cookie in the `Set-Cookie`
    /// header; the header value is kept verbatim and replayed as a
    /// `Cookie` header on later requests.
    pub async fn login(&self) -> Result<AuthToken> {
        let url = self.client.url(LOGIN_PATH)?;
        let inner = self.client.inner();

        debug!(username = %inner.username, "logging in to controller");
        let response = inner
            .http
            .get(url)
            .basic_auth(&inner.username, Some(&inner.password))
            .timeout(inner.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.client.extract_error(response).await);
        }

        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                Error::Auth("login succeeded but no session cookie was set".to_string())
            })?;

        Ok(AuthToken::new(cookie))
    }
}
