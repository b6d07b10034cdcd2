//! Rooms API.

use serde_json::json;
use tracing::debug;

use crate::client::WebexClient;
use crate::error::{Error, Result};
use crate::types::{ItemsResponse, Room};

/// Rooms API client.
pub struct RoomsApi {
    client: WebexClient,
}

impl RoomsApi {
    pub(crate) fn new(client: WebexClient) -> Self {
        Self { client }
    }

    /// Create a new room.
    pub async fn create(&self, title: &str) -> Result<Room> {
        debug!(title, "creating room");
        self.client.post("rooms", &json!({ "title": title })).await
    }

    /// List all rooms visible to the authenticated account.
    pub async fn list(&self) -> Result<Vec<Room>> {
        let response: ItemsResponse<Room> = self.client.get("rooms").await?;
        Ok(response.items)
    }

    /// Find a room id by title.
    ///
    /// When several rooms share the title, the one listed last wins.
    /// Returns `None` if no room matches.
    pub async fn find_id(&self, title: &str) -> Result<Option<String>> {
        let mut found = None;
        for room in self.list().await? {
            if room.title == title {
                found = Some(room.id);
            }
        }
        Ok(found)
    }

    /// Delete a room by title.
    ///
    /// Fails with [`Error::NotFound`] if no room has the given title.
    pub async fn delete(&self, title: &str) -> Result<()> {
        let id = self
            .find_id(title)
            .await?
            .ok_or_else(|| Error::NotFound(format!("room '{}'", title)))?;
        self.client.delete(&format!("rooms/{}", id)).await
    }
}
