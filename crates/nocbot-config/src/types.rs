//! Configuration types mapping to the TOML schema.
//!
//! Top-level config:
//! ```toml
//! [webex]              # Webex Teams messaging service
//! token = "..."        # better: NOCBOT_WEBEX_TOKEN env var
//! room = "NOC Alerts"
//!
//! [dnac]               # Cisco DNA Center controller
//! base_url = "https://10.93.130.20"
//! username = "admin"
//! accept_invalid_certs = true
//! ```

use serde::{Deserialize, Serialize};

/// Default base URL for the Webex Teams API.
pub const DEFAULT_WEBEX_BASE_URL: &str = "https://webexapis.com/v1";

/// Root configuration structure.
///
/// Maps to the full TOML config file. All sections are optional so that
/// partial configs (e.g., project-local overrides) can be loaded and merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NocbotConfig {
    /// Webex Teams messaging service settings.
    pub webex: Option<WebexConfig>,

    /// Cisco DNA Center controller settings.
    pub dnac: Option<DnacConfig>,
}

impl NocbotConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> crate::Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> crate::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Merge another config on top of this one (other takes priority).
    ///
    /// Sections replace wholesale; a project-local `[dnac]` section wins
    /// over the user-level one rather than merging field by field.
    pub fn merge(&mut self, other: NocbotConfig) {
        if other.webex.is_some() {
            self.webex = other.webex;
        }

        if other.dnac.is_some() {
            self.dnac = other.dnac;
        }
    }
}

/// Webex Teams client settings (`[webex]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebexConfig {
    /// API base URL. Defaults to the public Webex endpoint.
    pub base_url: Option<String>,

    /// Bearer token. Prefer `NOCBOT_WEBEX_TOKEN` over a plaintext value here.
    pub token: Option<String>,

    /// Default room (space) title for message posting.
    pub room: Option<String>,

    /// Email invited as moderator when memberships are created.
    pub moderator_email: Option<String>,
}

impl WebexConfig {
    /// The effective base URL, falling back to the public endpoint.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_WEBEX_BASE_URL)
    }

    /// Whether a plaintext token is stored in the config file.
    pub fn has_plaintext_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Cisco DNA Center client settings (`[dnac]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DnacConfig {
    /// Controller base URL (e.g., `https://10.93.130.20`). Required.
    pub base_url: Option<String>,

    /// Basic auth username.
    pub username: Option<String>,

    /// Basic auth password. Prefer `NOCBOT_DNAC_PASSWORD` over a plaintext
    /// value here.
    pub password: Option<String>,

    /// Accept self-signed controller certificates. Appliances commonly ship
    /// without a CA-signed cert, so lab configs usually enable this.
    pub accept_invalid_certs: bool,

    /// Per-request timeout override in seconds.
    pub timeout_secs: Option<u64>,
}

impl DnacConfig {
    /// Whether a plaintext password is stored in the config file.
    pub fn has_plaintext_password(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }
}
