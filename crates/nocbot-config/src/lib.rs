//! Configuration system for the nocbot clients.
//!
//! Provides TOML-based configuration with:
//! - A `[webex]` section for the Webex Teams messaging client
//! - A `[dnac]` section for the Cisco DNA Center controller client
//! - Config file layering (XDG user config + project-local overrides)
//! - Credential resolution (env var → config file, with provenance)
//!
//! Configuration is an explicit value handed to the client builders;
//! nothing in this workspace reads credentials from global state.

pub mod discovery;
pub mod error;
pub mod secrets;
pub mod types;

pub use discovery::{
    load_config, load_config_file, load_config_with_options, save_config, xdg_config_dir,
    xdg_config_path, LoadedConfig,
};
pub use error::{ConfigError, Result};
pub use secrets::{resolve_dnac_password, resolve_webex_token, ResolvedSecret, SecretSource};
pub use types::{DnacConfig, NocbotConfig, WebexConfig};
