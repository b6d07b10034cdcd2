//! Contract tests against a mocked DNA Center controller.

use nocbot_dnac::{AuthToken, DeviceStatus, DnacClient, TaskStatus};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COOKIE: &str = "X-JWT-ACCESS-TOKEN=abc.def.ghi; Path=/; Secure; HttpOnly";

fn client_for(server: &MockServer) -> DnacClient {
    DnacClient::builder()
        .base_url(server.uri())
        .credentials("admin", "secret")
        .build()
        .expect("client build")
}

fn token() -> AuthToken {
    AuthToken::new(COOKIE)
}

async fn mount_inventory(server: &MockServer, devices: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/network-device"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": devices })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_keeps_session_cookie_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).insert_header("Set-Cookie", COOKIE))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = client.auth().login().await.expect("login");
    assert_eq!(token.as_str(), COOKIE);
}

#[tokio::test]
async fn test_login_without_cookie_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.auth().login().await.expect_err("no cookie");
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_login_rejected_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "response": { "message": "Authentication has failed" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.auth().login().await.expect_err("bad credentials");
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_requests_replay_the_session_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/network-device"))
        .and(header("Cookie", COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let devices = client.devices().list(&token()).await.expect("list");
    assert!(devices.is_empty());

    server.verify().await;
}

#[tokio::test]
async fn test_find_device_single_match() {
    let server = MockServer::start().await;
    mount_inventory(
        &server,
        json!([
            { "id": "dev-1", "hostname": "core-sw-01" },
            { "id": "dev-2", "hostname": "edge-rt-01" },
        ]),
    )
    .await;

    let client = client_for(&server);
    let id = client
        .devices()
        .find_id_by_name(&token(), "core-sw-01")
        .await
        .expect("find");
    assert_eq!(id.as_deref(), Some("dev-1"));
}

#[tokio::test]
async fn test_find_device_no_match_is_none() {
    let server = MockServer::start().await;
    mount_inventory(&server, json!([{ "id": "dev-1", "hostname": "core-sw-01" }])).await;

    let client = client_for(&server);
    let id = client
        .devices()
        .find_id_by_name(&token(), "no-such-device")
        .await
        .expect("find");
    assert_eq!(id, None);
}

#[tokio::test]
async fn test_find_device_duplicate_hostnames_take_last() {
    let server = MockServer::start().await;
    mount_inventory(
        &server,
        json!([
            { "id": "dev-1", "hostname": "core-sw-01" },
            { "id": "dev-2", "hostname": "core-sw-01" },
        ]),
    )
    .await;

    let client = client_for(&server);
    let id = client
        .devices()
        .find_id_by_name(&token(), "core-sw-01")
        .await
        .expect("find");
    assert_eq!(id.as_deref(), Some("dev-2"));
}

#[tokio::test]
async fn test_find_by_ip_error_record_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/network-device/ip-address/10.0.0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "errorCode": "1501", "message": "No device found" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let device = client
        .devices()
        .find_by_ip(&token(), "10.0.0.1")
        .await
        .expect("lookup");
    assert!(device.is_none());
}

#[tokio::test]
async fn test_device_reachability() {
    let server = MockServer::start().await;
    // The id-specific mock must be mounted first so the query form does
    // not fall through to the bare inventory listing.
    Mock::given(method("GET"))
        .and(path("/api/v1/network-device"))
        .and(query_param("id", "dev-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "id": "dev-1", "reachabilityStatus": "Reachable" }
        })))
        .mount(&server)
        .await;
    mount_inventory(&server, json!([{ "id": "dev-1", "hostname": "core-sw-01" }])).await;

    let client = client_for(&server);
    let status = client
        .devices()
        .reachability(&token(), "core-sw-01")
        .await
        .expect("reachability");
    assert_eq!(status, DeviceStatus::Reachable);

    let status = client
        .devices()
        .reachability(&token(), "no-such-device")
        .await
        .expect("reachability");
    assert_eq!(status, DeviceStatus::Unknown);
}

#[tokio::test]
async fn test_locate_host_by_ip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/host"))
        .and(query_param("hostIp", "10.1.2.3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{
                "hostIp": "10.1.2.3",
                "connectedNetworkDeviceName": "access-sw-07",
                "connectedInterfaceName": "GigabitEthernet1/0/12",
                "vlanId": "120",
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let location = client
        .hosts()
        .locate(&token(), "10.1.2.3")
        .await
        .expect("locate")
        .expect("host known");
    assert_eq!(location.hostname, "access-sw-07");
    assert_eq!(location.interface.as_deref(), Some("GigabitEthernet1/0/12"));
    assert_eq!(location.vlan_id.as_deref(), Some("120"));
}

#[tokio::test]
async fn test_locate_unknown_host_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/host"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let location = client
        .hosts()
        .locate(&token(), "10.9.9.9")
        .await
        .expect("locate");
    assert!(location.is_none());
}

#[tokio::test]
async fn test_missing_project_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/template-programmer/project"))
        .and(query_param("name", "No Such Project"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .templates()
        .project_id(&token(), "No Such Project")
        .await
        .expect_err("missing project");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_duplicate_template_names_take_last() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/template-programmer/project"))
        .and(query_param("name", "Onboarding"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "proj-1",
            "name": "Onboarding",
            "templates": [
                { "name": "base-config", "id": "tmpl-1" },
                { "name": "base-config", "id": "tmpl-2" },
            ]
        }])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = client
        .templates()
        .find_id(&token(), "base-config", "Onboarding")
        .await
        .expect("find");
    assert_eq!(id.as_deref(), Some("tmpl-2"));
}

#[tokio::test]
async fn test_task_status_from_is_error_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/task/task-ok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "taskId": "task-ok", "isError": false }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/task/task-bad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "taskId": "task-bad", "isError": true }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let status = client.tasks().status(&token(), "task-ok").await.expect("status");
    assert_eq!(status, TaskStatus::Success);
    let status = client.tasks().status(&token(), "task-bad").await.expect("status");
    assert_eq!(status, TaskStatus::Failure);
}

#[tokio::test]
async fn test_path_trace_create_and_info() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/flow-analysis"))
        .and(body_json(json!({
            "destIP": "10.2.0.1",
            "periodicRefresh": false,
            "sourceIP": "10.1.0.1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "flowAnalysisId": "flow-1" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/flow-analysis/flow-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "request": {
                    "status": "COMPLETED",
                    "sourceIP": "10.1.0.1",
                    "destIP": "10.2.0.1",
                },
                "networkElementsInfo": [{
                    "name": "core-sw-01",
                    "ingressInterface": {
                        "physicalInterface": { "name": "Gi1/0/1" }
                    },
                    "egressInterface": {
                        "physicalInterface": { "name": "Gi1/0/24" }
                    },
                }]
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let flow_id = client
        .path_trace()
        .create(&token(), "10.1.0.1", "10.2.0.1")
        .await
        .expect("create");
    assert_eq!(flow_id, "flow-1");

    let info = client
        .path_trace()
        .info(&token(), &flow_id)
        .await
        .expect("info");
    assert_eq!(info.status, "COMPLETED");
    assert_eq!(
        info.hops,
        vec!["10.1.0.1", "Gi1/0/1", "core-sw-01", "Gi1/0/24", "10.2.0.1"]
    );

    server.verify().await;
}

#[tokio::test]
async fn test_path_trace_in_progress_has_no_hops() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/flow-analysis/flow-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "request": { "status": "INPROGRESS" } }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let info = client
        .path_trace()
        .info(&token(), "flow-2")
        .await
        .expect("info");
    assert_eq!(info.status, "INPROGRESS");
    assert!(info.hops.is_empty());
}

#[tokio::test]
async fn test_device_sync_returns_task_id() {
    let server = MockServer::start().await;
    mount_inventory(&server, json!([{ "id": "dev-1", "hostname": "core-sw-01" }])).await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/network-device/sync"))
        .and(query_param("forceSync", "true"))
        .and(body_json(json!(["dev-1"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "taskId": "task-42" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task_id = client
        .devices()
        .sync(&token(), "core-sw-01")
        .await
        .expect("sync");
    assert_eq!(task_id, "task-42");

    server.verify().await;
}
