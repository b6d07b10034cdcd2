//! Webex API wire types.
//!
//! The Webex REST API wraps every list response in an `{"items": [...]}`
//! envelope and uses camelCase field names throughout.

use serde::{Deserialize, Serialize};

/// List response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse<T> {
    /// The listed items. Newest first for messages.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// A Webex team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Opaque team id.
    pub id: String,
    /// Team display name.
    pub name: String,
    /// Creation timestamp (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// A Webex room (space).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Opaque room id.
    pub id: String,
    /// Room title.
    pub title: String,
    /// Room type (`group` or `direct`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    /// Owning team id, if the room belongs to a team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

/// A room membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    /// Opaque membership id.
    pub id: String,
    /// Room the membership belongs to.
    pub room_id: String,
    /// Member email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    /// Whether the member moderates the room.
    #[serde(default)]
    pub is_moderator: bool,
}

/// A message in a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Opaque message id.
    pub id: String,
    /// Room the message was posted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    /// Message text. Absent for file-only messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Sender email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    /// Creation timestamp (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// The newest message in a room, reduced to what NOC workflows need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastMessage {
    /// Message text.
    pub text: String,
    /// Sender email address.
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_envelope_parses() {
        let json = r#"{"items": [{"id": "t1", "name": "NOC"}]}"#;
        let parsed: ItemsResponse<Team> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].name, "NOC");
    }

    #[test]
    fn test_items_envelope_missing_items() {
        let parsed: ItemsResponse<Team> = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn test_message_optional_fields() {
        let json = r#"{"id": "m1", "roomId": "r1"}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert!(message.text.is_none());
        assert!(message.person_email.is_none());
    }
}
