//! Contract tests against a mocked Webex API.

use std::io::Write as _;

use nocbot_webex::WebexClient;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WebexClient {
    WebexClient::builder()
        .base_url(server.uri())
        .bearer_token("test-token")
        .build()
        .expect("client build")
}

fn rooms_listing(rooms: &[(&str, &str)]) -> serde_json::Value {
    let items: Vec<_> = rooms
        .iter()
        .map(|(id, title)| json!({ "id": id, "title": title }))
        .collect();
    json!({ "items": items })
}

async fn mount_rooms(server: &MockServer, rooms: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rooms_listing(rooms)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_find_room_single_match() {
    let server = MockServer::start().await;
    mount_rooms(&server, &[("room-1", "NOC Alerts"), ("room-2", "Chatter")]).await;

    let client = client_for(&server);
    let id = client.rooms().find_id("NOC Alerts").await.expect("find_id");
    assert_eq!(id.as_deref(), Some("room-1"));
}

#[tokio::test]
async fn test_find_room_no_match_is_none() {
    let server = MockServer::start().await;
    mount_rooms(&server, &[("room-1", "NOC Alerts")]).await;

    let client = client_for(&server);
    let id = client.rooms().find_id("No Such Room").await.expect("find_id");
    assert_eq!(id, None);
}

#[tokio::test]
async fn test_find_room_duplicate_titles_take_last() {
    let server = MockServer::start().await;
    mount_rooms(
        &server,
        &[
            ("room-1", "NOC Alerts"),
            ("room-2", "Chatter"),
            ("room-3", "NOC Alerts"),
        ],
    )
    .await;

    let client = client_for(&server);
    let id = client.rooms().find_id("NOC Alerts").await.expect("find_id");
    assert_eq!(id.as_deref(), Some("room-3"));
}

#[tokio::test]
async fn test_find_team_duplicate_names_take_last() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "id": "team-1", "name": "Ops" },
                { "id": "team-2", "name": "Ops" },
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = client.teams().find_id("Ops").await.expect("find_id");
    assert_eq!(id.as_deref(), Some("team-2"));
}

#[tokio::test]
async fn test_post_message_issues_exactly_one_post() {
    let server = MockServer::start().await;
    mount_rooms(&server, &[("room-1", "NOC Alerts")]).await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_json(json!({ "roomId": "room-1", "text": "link down" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg-1",
            "roomId": "room-1",
            "text": "link down",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let message = client
        .messages()
        .post("NOC Alerts", "link down")
        .await
        .expect("post");
    assert_eq!(message.id, "msg-1");

    server.verify().await;
}

#[tokio::test]
async fn test_last_message_is_newest_listing_item() {
    let server = MockServer::start().await;
    mount_rooms(&server, &[("room-1", "NOC Alerts")]).await;

    // Webex lists messages newest first.
    Mock::given(method("GET"))
        .and(path("/messages"))
        .and(query_param("roomId", "room-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "id": "msg-2", "text": "second", "personEmail": "b@example.com" },
                { "id": "msg-1", "text": "first", "personEmail": "a@example.com" },
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let last = client
        .messages()
        .last("NOC Alerts")
        .await
        .expect("last")
        .expect("room not empty");
    assert_eq!(last.text, "second");
    assert_eq!(last.author, "b@example.com");
}

#[tokio::test]
async fn test_post_then_read_last_returns_posted_text() {
    let server = MockServer::start().await;
    mount_rooms(&server, &[("room-1", "NOC Alerts")]).await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_json(json!({ "roomId": "room-1", "text": "core-sw-01 back up" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg-3",
            "roomId": "room-1",
            "text": "core-sw-01 back up",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .and(query_param("roomId", "room-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "id": "msg-3", "text": "core-sw-01 back up", "personEmail": "bot@example.com" },
                { "id": "msg-2", "text": "core-sw-01 down", "personEmail": "oncall@example.com" },
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .messages()
        .post("NOC Alerts", "core-sw-01 back up")
        .await
        .expect("post");

    let last = client
        .messages()
        .last("NOC Alerts")
        .await
        .expect("last")
        .expect("room not empty");
    assert_eq!(last.text, "core-sw-01 back up");
    assert_eq!(last.author, "bot@example.com");

    server.verify().await;
}

#[tokio::test]
async fn test_last_message_empty_room_is_none() {
    let server = MockServer::start().await;
    mount_rooms(&server, &[("room-1", "NOC Alerts")]).await;

    Mock::given(method("GET"))
        .and(path("/messages"))
        .and(query_param("roomId", "room-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let last = client.messages().last("NOC Alerts").await.expect("last");
    assert!(last.is_none());
}

#[tokio::test]
async fn test_post_to_unknown_room_is_not_found() {
    let server = MockServer::start().await;
    mount_rooms(&server, &[]).await;

    let client = client_for(&server);
    let err = client
        .messages()
        .post("No Such Room", "hello")
        .await
        .expect_err("unknown room");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_post_file_uploads_multipart() {
    let server = MockServer::start().await;
    mount_rooms(&server, &[("room-1", "NOC Alerts")]).await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg-1",
            "roomId": "room-1",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let file_path = dir.path().join("report.csv");
    let mut file = std::fs::File::create(&file_path).expect("create file");
    writeln!(file, "device,status").expect("write file");

    let client = client_for(&server);
    let message = client
        .messages()
        .post_file("NOC Alerts", &file_path, "text/csv")
        .await
        .expect("post_file");
    assert_eq!(message.id, "msg-1");

    server.verify().await;
}

#[tokio::test]
async fn test_membership_add_echoes_person_email() {
    let server = MockServer::start().await;
    mount_rooms(&server, &[("room-1", "NOC Alerts")]).await;

    Mock::given(method("POST"))
        .and(path("/memberships"))
        .and(body_json(json!({
            "roomId": "room-1",
            "personEmail": "oncall@example.com",
            "isModerator": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "membership-1",
            "roomId": "room-1",
            "personEmail": "oncall@example.com",
            "isModerator": true,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let email = client
        .memberships()
        .add("NOC Alerts", "oncall@example.com")
        .await
        .expect("add");
    assert_eq!(email.as_deref(), Some("oncall@example.com"));
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "invalid token" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.rooms().list().await.expect_err("unauthorized");
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_delete_room_resolves_then_deletes() {
    let server = MockServer::start().await;
    mount_rooms(&server, &[("room-1", "Old Room")]).await;

    Mock::given(method("DELETE"))
        .and(path("/rooms/room-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.rooms().delete("Old Room").await.expect("delete");

    server.verify().await;
}
