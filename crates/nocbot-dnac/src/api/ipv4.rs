//! IPv4 address lookup API.
//!
//! Answers the question behind config pre-checks: is this address
//! already present somewhere in the network, either on a device
//! interface or on an attached host?

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::client::DnacClient;
use crate::error::Result;
use crate::types::{AuthToken, Envelope, InterfaceMatch};

/// Ipv4 lookup API client.
pub struct Ipv4Api {
    client: DnacClient,
}

impl Ipv4Api {
    pub(crate) fn new(client: DnacClient) -> Self {
        Self { client }
    }

    /// Find the device interface carrying an IPv4 address.
    ///
    /// Checks interface records first; access points report their
    /// address without an interface record, so a device-by-IP lookup
    /// serves as fallback. Returns `None` when nothing carries the
    /// address.
    pub async fn interface_for_ip(
        &self,
        token: &AuthToken,
        ip: &str,
    ) -> Result<Option<InterfaceMatch>> {
        let lookup: Result<Envelope<Vec<Value>>> = self
            .client
            .get(token, &format!("api/v1/interface/ip-address/{}", ip))
            .await;

        let first = match lookup {
            Ok(envelope) => envelope.response.into_iter().next(),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };

        if let Some(record) = first {
            let interface = record["portName"].as_str().map(str::to_string);
            if let Some(device_id) = record["deviceId"].as_str() {
                let device = self.client.devices().get(token, device_id).await?;
                if let Some(hostname) = device["hostname"].as_str() {
                    return Ok(Some(InterfaceMatch {
                        hostname: hostname.to_string(),
                        interface,
                    }));
                }
            }
            return Ok(None);
        }

        // AP fallback
        match self.client.devices().find_by_ip(token, ip).await? {
            Some(device) => Ok(device["hostname"].as_str().map(|hostname| InterfaceMatch {
                hostname: hostname.to_string(),
                interface: None,
            })),
            None => Ok(None),
        }
    }

    /// Check whether an IPv4 address is in use anywhere.
    ///
    /// True when the address sits on a device interface or belongs to
    /// an attached host.
    pub async fn address_in_use(&self, token: &AuthToken, ip: &str) -> Result<bool> {
        if self.interface_for_ip(token, ip).await?.is_some() {
            return Ok(true);
        }
        Ok(self.client.hosts().info(token, ip).await?.is_some())
    }

    /// Check a CLI template for addresses that would duplicate ones
    /// already deployed in the network.
    ///
    /// Extracts the interface addresses from the template text and
    /// checks each against the controller.
    pub async fn duplicate_in_template(&self, token: &AuthToken, template: &str) -> Result<bool> {
        for address in extract_interface_addresses(template) {
            if self.address_in_use(token, &address).await? {
                debug!(%address, "address already in use");
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Extract the IPv4 addresses assigned to interfaces in a CLI config.
///
/// Matches `ip address <addr> ...` statements and deduplicates while
/// keeping first-seen order.
pub fn extract_interface_addresses(config: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?m)^\s*ip address (\d{1,3}(?:\.\d{1,3}){3})\b")
            .unwrap_or_else(|e| panic!("invalid interface address pattern: {}", e))
    });

    let mut addresses = Vec::new();
    for capture in re.captures_iter(config) {
        let address = capture[1].to_string();
        if !addresses.contains(&address) {
            addresses.push(address);
        }
    }
    addresses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_interface_addresses() {
        let config = "\
interface GigabitEthernet0/0
 ip address 10.93.130.21 255.255.255.0
!
interface Loopback0
 ip address 172.16.0.1 255.255.255.255
";
        assert_eq!(
            extract_interface_addresses(config),
            vec!["10.93.130.21", "172.16.0.1"]
        );
    }

    #[test]
    fn test_ignores_other_ip_statements() {
        let config = "\
ip route 0.0.0.0 0.0.0.0 10.93.130.1
interface Vlan10
 ip address 10.10.10.1 255.255.255.0
 no ip redirects
";
        assert_eq!(extract_interface_addresses(config), vec!["10.10.10.1"]);
    }

    #[test]
    fn test_deduplicates() {
        let config = "\
interface Vlan10
 ip address 10.10.10.1 255.255.255.0
interface Vlan20
 ip address 10.10.10.1 255.255.255.0
";
        assert_eq!(extract_interface_addresses(config), vec!["10.10.10.1"]);
    }

    #[test]
    fn test_empty_config() {
        assert!(extract_interface_addresses("").is_empty());
    }
}
