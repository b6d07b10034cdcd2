//! Client construction from loaded configuration.

use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use nocbot_config::{resolve_dnac_password, resolve_webex_token, NocbotConfig};
use nocbot_dnac::DnacClient;
use nocbot_webex::WebexClient;
use tracing::debug;

/// Build a DNA Center client from the `[dnac]` config section.
pub fn dnac_client(config: &NocbotConfig) -> Result<DnacClient> {
    let dnac = config
        .dnac
        .as_ref()
        .context("no [dnac] section in config; add one or run with --config-dir")?;

    let base_url = dnac
        .base_url
        .as_deref()
        .context("missing base_url in [dnac] config")?;
    let username = dnac
        .username
        .as_deref()
        .context("missing username in [dnac] config")?;
    let password = resolve_dnac_password(dnac)
        .context("no DNA Center password; set NOCBOT_DNAC_PASSWORD or [dnac] password")?;
    debug!(source = %password.source, "resolved DNA Center password");

    let mut builder = DnacClient::builder()
        .base_url(base_url)
        .credentials(username, password.value)
        .danger_accept_invalid_certs(dnac.accept_invalid_certs);
    if let Some(secs) = dnac.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

/// Build a Webex client from the `[webex]` config section.
pub fn webex_client(config: &NocbotConfig) -> Result<WebexClient> {
    let webex = config
        .webex
        .as_ref()
        .context("no [webex] section in config; add one or run with --config-dir")?;

    let token = resolve_webex_token(webex)
        .context("no Webex token; set NOCBOT_WEBEX_TOKEN or [webex] token")?;
    debug!(source = %token.source, "resolved Webex token");

    let client = WebexClient::builder()
        .base_url(webex.base_url())
        .bearer_token(token.value)
        .build()?;
    Ok(client)
}

/// The Webex room to post to: explicit argument, else the configured
/// default.
pub fn resolve_room(config: &NocbotConfig, room_arg: Option<String>) -> Result<String> {
    if let Some(room) = room_arg {
        return Ok(room);
    }
    if let Some(webex) = &config.webex {
        if let Some(room) = &webex.room {
            return Ok(room.clone());
        }
    }
    bail!("no room given; pass --room or set [webex] room in config")
}
