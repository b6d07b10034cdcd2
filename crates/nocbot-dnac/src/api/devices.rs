//! Device inventory API.

use serde_json::{json, Value};
use tracing::debug;

use crate::client::DnacClient;
use crate::error::{Error, Result};
use crate::types::{AuthToken, Device, DeviceStatus, Envelope, TaskRef};

/// Device inventory API client.
pub struct DevicesApi {
    client: DnacClient,
}

impl DevicesApi {
    pub(crate) fn new(client: DnacClient) -> Self {
        Self { client }
    }

    /// List the full device inventory.
    pub async fn list(&self, token: &AuthToken) -> Result<Vec<Device>> {
        let envelope: Envelope<Vec<Device>> =
            self.client.get(token, "api/v1/network-device").await?;
        Ok(envelope.response)
    }

    /// Get the raw inventory record for a device id.
    pub async fn get(&self, token: &AuthToken, device_id: &str) -> Result<Value> {
        let envelope: Envelope<Value> = self
            .client
            .get_with_query(token, "api/v1/network-device", &[("id", device_id)])
            .await?;
        Ok(envelope.response)
    }

    /// Find a device id by hostname.
    ///
    /// When several inventory entries share the hostname, the one listed
    /// last wins. Returns `None` if no device matches.
    pub async fn find_id_by_name(&self, token: &AuthToken, hostname: &str) -> Result<Option<String>> {
        let mut found = None;
        for device in self.list(token).await? {
            if device.hostname.as_deref() == Some(hostname) {
                found = Some(device.id);
            }
        }
        Ok(found)
    }

    /// Find a device id by chassis serial number.
    pub async fn find_id_by_serial(&self, token: &AuthToken, serial: &str) -> Result<String> {
        let envelope: Envelope<Value> = self
            .client
            .get(
                token,
                &format!("api/v1/network-device/serial-number/{}", serial),
            )
            .await?;
        envelope.response["id"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                Error::MalformedResponse(format!("no device id for serial '{}'", serial))
            })
    }

    /// Look up a device by its management IPv4 address.
    ///
    /// Returns `None` when the controller reports an error record instead
    /// of a device (the lookup endpoint signals "not found" in-band).
    pub async fn find_by_ip(&self, token: &AuthToken, ip: &str) -> Result<Option<Value>> {
        let envelope: Envelope<Value> = self
            .client
            .get(token, &format!("api/v1/network-device/ip-address/{}", ip))
            .await?;

        if envelope.response.get("errorCode").is_some() {
            return Ok(None);
        }
        Ok(Some(envelope.response))
    }

    /// Find the management IP address for a device hostname.
    pub async fn management_ip(&self, token: &AuthToken, hostname: &str) -> Result<Option<String>> {
        let mut found = None;
        for device in self.list(token).await? {
            if device.hostname.as_deref() == Some(hostname) {
                found = device.management_ip_address;
            }
        }
        Ok(found)
    }

    /// Reachability of a device, by hostname.
    ///
    /// Returns [`DeviceStatus::Unknown`] for devices not in the inventory.
    pub async fn reachability(&self, token: &AuthToken, hostname: &str) -> Result<DeviceStatus> {
        let device_id = match self.find_id_by_name(token, hostname).await? {
            Some(id) => id,
            None => return Ok(DeviceStatus::Unknown),
        };

        let info = self.get(token, &device_id).await?;
        if info["reachabilityStatus"].as_str() == Some("Reachable") {
            Ok(DeviceStatus::Reachable)
        } else {
            Ok(DeviceStatus::Unreachable)
        }
    }

    /// Site hierarchy location of a device, by hostname.
    ///
    /// Fails with [`Error::NotFound`] if the device is not in the
    /// inventory or is not assigned to a site.
    pub async fn location(&self, token: &AuthToken, hostname: &str) -> Result<String> {
        let device_id = self
            .find_id_by_name(token, hostname)
            .await?
            .ok_or_else(|| Error::NotFound(format!("device '{}'", hostname)))?;

        let envelope: Envelope<Vec<Value>> = self
            .client
            .get_with_query(
                token,
                &format!("api/v1/group/member/{}", device_id),
                &[("groupType", "SITE")],
            )
            .await?;

        envelope
            .response
            .first()
            .and_then(|group| group["groupNameHierarchy"].as_str())
            .map(str::to_string)
            .ok_or_else(|| Error::NotFound(format!("site assignment for device '{}'", hostname)))
    }

    /// Trigger a configuration resync for a device, by hostname.
    ///
    /// Returns the task id to poll for completion.
    pub async fn sync(&self, token: &AuthToken, hostname: &str) -> Result<String> {
        let device_id = self
            .find_id_by_name(token, hostname)
            .await?
            .ok_or_else(|| Error::NotFound(format!("device '{}'", hostname)))?;

        debug!(hostname, "requesting device resync");
        let envelope: Envelope<TaskRef> = self
            .client
            .put(
                token,
                "api/v1/network-device/sync?forceSync=true",
                &json!([device_id]),
            )
            .await?;
        Ok(envelope.response.task_id)
    }

    /// Check whether an IPv4 address appears in any device running config.
    pub async fn configs_contain(&self, token: &AuthToken, ipv4: &str) -> Result<bool> {
        let envelope: Envelope<Vec<Value>> = self
            .client
            .get(token, "api/v1/network-device/config")
            .await?;

        for config in &envelope.response {
            if let Some(running) = config["runningConfig"].as_str() {
                if running.contains(ipv4) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}
