//! CLI command handlers.

pub mod client;
pub mod devices;
pub mod post;
pub mod token;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded layered configuration.
    pub config: nocbot_config::NocbotConfig,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}
