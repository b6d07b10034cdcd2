//! Credential resolution: env var first, config file second.
//!
//! Resolution order:
//! 1. Environment variable (`NOCBOT_WEBEX_TOKEN` / `NOCBOT_DNAC_PASSWORD`)
//! 2. Config file (with warning, see discovery)

use crate::{DnacConfig, WebexConfig};

/// Env var holding the Webex bearer token.
pub const WEBEX_TOKEN_ENV: &str = "NOCBOT_WEBEX_TOKEN";

/// Env var holding the DNA Center password.
pub const DNAC_PASSWORD_ENV: &str = "NOCBOT_DNAC_PASSWORD";

/// Result of credential resolution with provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    /// The secret value.
    pub value: String,
    /// Where the secret was found.
    pub source: SecretSource,
}

/// Where a secret was resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// Environment variable.
    EnvVar(String),
    /// Config file (plaintext).
    ConfigFile,
}

impl std::fmt::Display for SecretSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretSource::EnvVar(var) => write!(f, "env var {}", var),
            SecretSource::ConfigFile => write!(f, "config file (plaintext)"),
        }
    }
}

/// Resolve the Webex bearer token for a config section.
pub fn resolve_webex_token(config: &WebexConfig) -> Option<ResolvedSecret> {
    resolve(WEBEX_TOKEN_ENV, config.token.as_deref())
}

/// Resolve the DNA Center password for a config section.
pub fn resolve_dnac_password(config: &DnacConfig) -> Option<ResolvedSecret> {
    resolve(DNAC_PASSWORD_ENV, config.password.as_deref())
}

fn resolve(env_var: &str, config_value: Option<&str>) -> Option<ResolvedSecret> {
    if let Ok(value) = std::env::var(env_var) {
        if !value.is_empty() {
            return Some(ResolvedSecret {
                value,
                source: SecretSource::EnvVar(env_var.to_string()),
            });
        }
    }

    config_value.map(|v| ResolvedSecret {
        value: v.to_string(),
        source: SecretSource::ConfigFile,
    })
}
