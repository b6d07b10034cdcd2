//! Wired host (client) API.

use serde_json::Value;

use crate::client::DnacClient;
use crate::error::Result;
use crate::types::{AuthToken, ClientLocation, Envelope, HostRecord};

/// Wired host API client.
pub struct HostsApi {
    client: DnacClient,
}

impl HostsApi {
    pub(crate) fn new(client: DnacClient) -> Self {
        Self { client }
    }

    /// Raw host record for a client IPv4 address, or `None` if the
    /// controller has no host with that address.
    pub async fn info(&self, token: &AuthToken, client_ip: &str) -> Result<Option<Value>> {
        let envelope: Envelope<Vec<Value>> = self
            .client
            .get_with_query(token, "api/v1/host", &[("hostIp", client_ip)])
            .await?;
        Ok(envelope.response.into_iter().next())
    }

    /// Locate a wired client in the infrastructure by IPv4 address.
    ///
    /// Returns the attachment switch, interface and VLAN, or `None` if
    /// the client is unknown or the record names no attachment switch.
    pub async fn locate(&self, token: &AuthToken, client_ip: &str) -> Result<Option<ClientLocation>> {
        let envelope: Envelope<Vec<HostRecord>> = self
            .client
            .get_with_query(token, "api/v1/host", &[("hostIp", client_ip)])
            .await?;

        let record = match envelope.response.into_iter().next() {
            Some(record) => record,
            None => return Ok(None),
        };

        let hostname = match record.connected_network_device_name {
            Some(hostname) => hostname,
            None => return Ok(None),
        };

        Ok(Some(ClientLocation {
            hostname,
            interface: record.connected_interface_name,
            vlan_id: record.vlan_id,
        }))
    }
}
