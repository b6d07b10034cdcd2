//! Messages API.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde_json::json;
use tracing::debug;

use crate::client::WebexClient;
use crate::error::{Error, Result};
use crate::types::{ItemsResponse, LastMessage, Message};

/// Messages API client.
pub struct MessagesApi {
    client: WebexClient,
}

impl MessagesApi {
    pub(crate) fn new(client: WebexClient) -> Self {
        Self { client }
    }

    /// Post a text message to a room, resolved by room title.
    ///
    /// Fails with [`Error::NotFound`] if no room has the given title.
    pub async fn post(&self, room_title: &str, text: &str) -> Result<Message> {
        let room_id = self.resolve_room(room_title).await?;
        debug!(room_title, "posting message");
        self.client
            .post("messages", &json!({ "roomId": room_id, "text": text }))
            .await
    }

    /// Post a file attachment to a room, resolved by room title.
    ///
    /// The file is read from disk and uploaded as a multipart form with
    /// the given MIME type.
    pub async fn post_file(
        &self,
        room_title: &str,
        file_path: &Path,
        content_type: &str,
    ) -> Result<Message> {
        let room_id = self.resolve_room(room_title).await?;

        // The attachment is named by file stem, extension dropped.
        let file_name = file_path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());
        let bytes = tokio::fs::read(file_path).await?;

        let part = Part::bytes(bytes)
            .file_name(file_name.clone())
            .mime_str(content_type)
            .map_err(|_| Error::Config(format!("invalid content type '{}'", content_type)))?;
        let form = Form::new().text("roomId", room_id).part("files", part);

        debug!(room_title, file = %file_name, "posting file attachment");
        self.client.post_multipart("messages", form).await
    }

    /// Fetch the newest message in a room, resolved by room title.
    ///
    /// Returns `None` when the room is empty or the newest message carries
    /// no text (file-only messages). Fails with [`Error::NotFound`] if no
    /// room has the given title.
    pub async fn last(&self, room_title: &str) -> Result<Option<LastMessage>> {
        let room_id = self.resolve_room(room_title).await?;

        // Webex returns messages newest first.
        let response: ItemsResponse<Message> = self
            .client
            .get_with_query("messages", &[("roomId", room_id.as_str())])
            .await?;

        let newest = match response.items.into_iter().next() {
            Some(message) => message,
            None => return Ok(None),
        };

        match (newest.text, newest.person_email) {
            (Some(text), Some(author)) => Ok(Some(LastMessage { text, author })),
            _ => Ok(None),
        }
    }

    async fn resolve_room(&self, room_title: &str) -> Result<String> {
        self.client
            .rooms()
            .find_id(room_title)
            .await?
            .ok_or_else(|| Error::NotFound(format!("room '{}'", room_title)))
    }
}
