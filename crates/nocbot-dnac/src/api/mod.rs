//! API endpoint implementations.

mod auth;
mod devices;
mod hosts;
mod ipv4;
mod path_trace;
mod sites;
mod tasks;
mod templates;

pub use auth::AuthApi;
pub use devices::DevicesApi;
pub use hosts::HostsApi;
pub use ipv4::{extract_interface_addresses, Ipv4Api};
pub use path_trace::PathTraceApi;
pub use sites::SitesApi;
pub use tasks::TasksApi;
pub use templates::TemplatesApi;
