//! HTTP client for the Webex Teams messaging API.
//!
//! This crate provides a typed client for the subset of the Webex REST API
//! that NOC notification workflows use: teams, rooms, memberships and
//! messages (including file attachments).
//!
//! All room-level operations take a human-readable room title and resolve
//! it to an id on each call, so callers never juggle opaque ids.
//!
//! # Example
//!
//! ```no_run
//! use nocbot_webex::WebexClient;
//!
//! # async fn example() -> nocbot_webex::Result<()> {
//! let client = WebexClient::builder()
//!     .bearer_token("secret")
//!     .build()?;
//!
//! // Create a room and invite the on-call engineer
//! client.rooms().create("SF Outage Bridge").await?;
//! client.memberships().add("SF Outage Bridge", "oncall@example.com").await?;
//!
//! // Post an alert
//! client.messages().post("SF Outage Bridge", "core-sw-1 unreachable").await?;
//!
//! // Read the newest reply
//! if let Some(last) = client.messages().last("SF Outage Bridge").await? {
//!     println!("{}: {}", last.author, last.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, WebexClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use types::{ItemsResponse, LastMessage, Membership, Message, Room, Team};
