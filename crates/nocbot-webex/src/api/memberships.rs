//! Memberships API.

use serde_json::json;
use tracing::{debug, warn};

use crate::client::WebexClient;
use crate::error::{Error, Result};
use crate::types::{ItemsResponse, Membership};

/// Memberships API client.
pub struct MembershipsApi {
    client: WebexClient,
}

impl MembershipsApi {
    pub(crate) fn new(client: WebexClient) -> Self {
        Self { client }
    }

    /// Add a member to a room, resolved by room title.
    ///
    /// The member is invited as a moderator. Returns the email echoed back
    /// by the API, or `None` if the response omitted it. Fails with
    /// [`Error::NotFound`] if no room has the given title.
    pub async fn add(&self, room_title: &str, email: &str) -> Result<Option<String>> {
        let room_id = self
            .client
            .rooms()
            .find_id(room_title)
            .await?
            .ok_or_else(|| Error::NotFound(format!("room '{}'", room_title)))?;

        debug!(room_title, email, "adding room membership");
        let membership: Membership = self
            .client
            .post(
                "memberships",
                &json!({
                    "roomId": room_id,
                    "personEmail": email,
                    "isModerator": true,
                }),
            )
            .await?;

        if membership.person_email.is_none() {
            warn!(room_title, email, "membership created without email echo");
        }
        Ok(membership.person_email)
    }

    /// List memberships for a room, resolved by room title.
    ///
    /// Fails with [`Error::NotFound`] if no room has the given title.
    pub async fn list(&self, room_title: &str) -> Result<Vec<Membership>> {
        let room_id = self
            .client
            .rooms()
            .find_id(room_title)
            .await?
            .ok_or_else(|| Error::NotFound(format!("room '{}'", room_title)))?;

        let response: ItemsResponse<Membership> = self
            .client
            .get_with_query("memberships", &[("roomId", room_id.as_str())])
            .await?;
        Ok(response.items)
    }
}
