//! DNA Center wire types.
//!
//! Most controller endpoints wrap their payload in a `{"response": ...}`
//! envelope; the template-programmer endpoints return bare arrays and
//! objects. Field names are camelCase throughout.

use serde::{Deserialize, Serialize};

/// Session token for controller API calls.
///
/// Holds the verbatim `Set-Cookie` header returned by the login endpoint.
/// The controller accepts it unchanged as a `Cookie` header on subsequent
/// requests, so no cookie parsing happens on this side.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw cookie string.
    pub fn new(cookie: impl Into<String>) -> Self {
        Self(cookie.into())
    }

    /// The raw cookie value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

/// Standard `{"response": ...}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload.
    pub response: T,
}

/// A network device from the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Controller device id.
    pub id: String,
    /// Device hostname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Management IPv4 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_ip_address: Option<String>,
    /// Reachability status string (`Reachable` / `Unreachable`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reachability_status: Option<String>,
    /// Chassis serial number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Platform model id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<String>,
    /// Running software version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    /// Network role (`ACCESS`, `CORE`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Reachability of an inventoried device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    /// The device is not in the inventory.
    Unknown,
    /// The controller can reach the device.
    Reachable,
    /// The controller cannot reach the device.
    Unreachable,
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DeviceStatus::Unknown => "UNKNOWN",
            DeviceStatus::Reachable => "REACHABLE",
            DeviceStatus::Unreachable => "UNREACHABLE",
        };
        f.write_str(s)
    }
}

/// A wired host (client) record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRecord {
    /// Host IPv4 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_ip: Option<String>,
    /// Host MAC address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_mac: Option<String>,
    /// Hostname of the switch the host is attached to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_network_device_name: Option<String>,
    /// Switch interface the host is attached to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_interface_name: Option<String>,
    /// Access VLAN id, as reported by the controller (a string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<String>,
}

/// Where a wired client sits in the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientLocation {
    /// Hostname of the attachment switch.
    pub hostname: String,
    /// Attachment interface, if reported.
    pub interface: Option<String>,
    /// Access VLAN id, if reported.
    pub vlan_id: Option<String>,
}

/// A template name/id pair from a project listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRef {
    /// Template name.
    pub name: String,
    /// Template id (head revision).
    pub id: String,
}

/// A project from the template programmer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project id.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Templates in the project.
    #[serde(default = "Vec::new")]
    pub templates: Vec<TemplateRef>,
}

/// One committed version of a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateVersion {
    /// Version-specific template id.
    pub id: String,
    /// Version number, serialized as a string by the controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Template listing entry with version history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionedTemplate {
    /// Template name.
    pub name: String,
    /// Committed versions.
    #[serde(default = "Vec::new")]
    pub versions_info: Vec<TemplateVersion>,
}

/// Async task reference returned by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    /// Task id for polling.
    pub task_id: String,
    /// Task status URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Outcome of an async controller task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// The task completed without error.
    Success,
    /// The task reported an error.
    Failure,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TaskStatus::Success => "SUCCESS",
            TaskStatus::Failure => "FAILURE",
        };
        f.write_str(s)
    }
}

/// Path trace result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTraceInfo {
    /// Analysis status (`COMPLETED`, `INPROGRESS`, `FAILED`).
    pub status: String,
    /// Hop-by-hop path. Starts with the source IP and ends with the
    /// destination IP, with device and interface names in between.
    /// Empty unless the analysis completed.
    pub hops: Vec<String>,
}

/// Result of looking up an IPv4 address on network interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceMatch {
    /// Hostname of the device carrying the address.
    pub hostname: String,
    /// Interface name. `None` for access points, which report the
    /// address without an interface record.
    pub interface: Option<String>,
}

/// Street address details for building creation.
#[derive(Debug, Clone)]
pub struct BuildingAddress {
    /// Street address line.
    pub address: String,
    /// Country name.
    pub country: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_parses() {
        let json = r#"{"response": [{"id": "d1", "hostname": "core-sw-1"}]}"#;
        let parsed: Envelope<Vec<Device>> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.response.len(), 1);
        assert_eq!(parsed.response[0].hostname.as_deref(), Some("core-sw-1"));
    }

    #[test]
    fn test_device_sparse_fields() {
        let json = r#"{"id": "d1"}"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert!(device.hostname.is_none());
        assert!(device.reachability_status.is_none());
    }

    #[test]
    fn test_auth_token_debug_redacts() {
        let token = AuthToken::new("X-JWT-ACCESS-TOKEN=abc; Path=/");
        assert_eq!(format!("{:?}", token), "AuthToken(..)");
        assert!(token.as_str().contains("abc"));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(DeviceStatus::Reachable.to_string(), "REACHABLE");
        assert_eq!(TaskStatus::Failure.to_string(), "FAILURE");
    }
}
