//! HTTP client for the Cisco DNA Center controller.
//!
//! This crate wraps the controller's northbound REST API for the
//! operations NOC automation needs: device inventory, wired host
//! lookups, CLI template management and deployment, site hierarchy,
//! task polling, path traces and IPv4 duplicate checks.
//!
//! Authentication is a two-step affair: log in once with basic auth to
//! obtain a session token, then pass that token to every call.
//!
//! # Example
//!
//! ```no_run
//! use nocbot_dnac::DnacClient;
//!
//! # async fn example() -> nocbot_dnac::Result<()> {
//! let client = DnacClient::builder()
//!     .base_url("https://10.93.130.20")
//!     .credentials("admin", "secret")
//!     .danger_accept_invalid_certs(true)
//!     .build()?;
//!
//! let token = client.auth().login().await?;
//!
//! // Where is this client device attached?
//! if let Some(location) = client.hosts().locate(&token, "10.93.130.60").await? {
//!     println!("attached to {} {:?}", location.hostname, location.interface);
//! }
//!
//! // Deploy a config template and poll the result
//! let deployment = client
//!     .templates()
//!     .deploy(&token, "vlan-fix", "NOC Templates", "core-sw-1")
//!     .await?;
//! let status = client.templates().deployment_status(&token, &deployment).await?;
//! println!("deployment: {}", status);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::extract_interface_addresses;
pub use client::{ClientBuilder, DnacClient};
pub use error::{Error, Result};
pub use types::{
    AuthToken, BuildingAddress, ClientLocation, Device, DeviceStatus, Envelope, HostRecord,
    InterfaceMatch, PathTraceInfo, Project, TaskRef, TaskStatus, TemplateRef, TemplateVersion,
    VersionedTemplate,
};
