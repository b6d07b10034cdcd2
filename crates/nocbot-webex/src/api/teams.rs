//! Teams API.

use serde_json::json;
use tracing::debug;

use crate::client::WebexClient;
use crate::error::{Error, Result};
use crate::types::{ItemsResponse, Team};

/// Teams API client.
pub struct TeamsApi {
    client: WebexClient,
}

impl TeamsApi {
    pub(crate) fn new(client: WebexClient) -> Self {
        Self { client }
    }

    /// Create a new team.
    pub async fn create(&self, name: &str) -> Result<Team> {
        debug!(name, "creating team");
        self.client.post("teams", &json!({ "name": name })).await
    }

    /// List all teams visible to the authenticated account.
    pub async fn list(&self) -> Result<Vec<Team>> {
        let response: ItemsResponse<Team> = self.client.get("teams").await?;
        Ok(response.items)
    }

    /// Find a team id by name.
    ///
    /// When several teams share the name, the one listed last wins.
    /// Returns `None` if no team matches.
    pub async fn find_id(&self, name: &str) -> Result<Option<String>> {
        let mut found = None;
        for team in self.list().await? {
            if team.name == name {
                found = Some(team.id);
            }
        }
        Ok(found)
    }

    /// Delete a team by name.
    ///
    /// Fails with [`Error::NotFound`] if no team has the given name.
    pub async fn delete(&self, name: &str) -> Result<()> {
        let id = self
            .find_id(name)
            .await?
            .ok_or_else(|| Error::NotFound(format!("team '{}'", name)))?;
        self.client.delete(&format!("teams/{}", id)).await
    }
}
