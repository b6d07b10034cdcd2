//! Site hierarchy API.
//!
//! Sites, buildings and floors are all `SITE`-typed groups in the
//! controller; what distinguishes them is the `Location` attribute type
//! and their position in the parent chain.

use serde_json::{json, Value};
use tracing::{debug, info};

use crate::client::DnacClient;
use crate::error::{Error, Result};
use crate::types::{AuthToken, BuildingAddress, Envelope};

/// Site hierarchy API client.
pub struct SitesApi {
    client: DnacClient,
}

impl SitesApi {
    pub(crate) fn new(client: DnacClient) -> Self {
        Self { client }
    }

    /// Create a top-level site (area) under `Global`.
    pub async fn create_site(&self, token: &AuthToken, site_name: &str) -> Result<()> {
        let payload = json!({
            "additionalInfo": [
                {
                    "nameSpace": "Location",
                    "attributes": { "type": "area" }
                }
            ],
            "groupNameHierarchy": format!("Global/{}", site_name),
            "groupTypeList": ["SITE"],
            "systemGroup": false,
            "parentId": "",
            "name": site_name,
            "id": ""
        });
        debug!(site_name, "creating site");
        self.client.post_no_content(token, "api/v1/group", &payload).await
    }

    /// Find the group id for a site (area) name.
    ///
    /// When several groups share the name, the one listed last wins.
    /// Returns `None` if no site matches.
    pub async fn site_id(&self, token: &AuthToken, site_name: &str) -> Result<Option<String>> {
        self.find_group_id(token, site_name).await
    }

    /// Create a building under an existing site.
    ///
    /// Geographic coordinates come from the caller. Fails with
    /// [`Error::NotFound`] if the site does not exist.
    pub async fn create_building(
        &self,
        token: &AuthToken,
        site_name: &str,
        building_name: &str,
        address: &BuildingAddress,
    ) -> Result<()> {
        let site_id = self
            .site_id(token, site_name)
            .await?
            .ok_or_else(|| Error::NotFound(format!("site '{}'", site_name)))?;

        let payload = json!({
            "additionalInfo": [
                {
                    "nameSpace": "Location",
                    "attributes": {
                        "country": address.country,
                        "address": address.address,
                        "latitude": address.latitude,
                        "type": "building",
                        "longitude": address.longitude
                    }
                }
            ],
            "groupNameHierarchy": format!("Global/{}/{}", site_name, building_name),
            "groupTypeList": ["SITE"],
            "systemGroup": false,
            "parentId": site_id,
            "name": building_name,
            "id": ""
        });
        info!(site_name, building_name, "creating building");
        self.client.post_no_content(token, "api/v1/group", &payload).await
    }

    /// Find the group id for a building name.
    ///
    /// Returns `None` if no building matches.
    pub async fn building_id(
        &self,
        token: &AuthToken,
        building_name: &str,
    ) -> Result<Option<String>> {
        self.find_group_id(token, building_name).await
    }

    /// Create a floor in an existing building.
    ///
    /// The floor gets placeholder map geometry; real floor plans are
    /// uploaded through the controller UI. Fails with
    /// [`Error::NotFound`] if the building does not exist.
    pub async fn create_floor(
        &self,
        token: &AuthToken,
        building_name: &str,
        floor_name: &str,
        floor_number: u32,
    ) -> Result<()> {
        let building_id = self
            .building_id(token, building_name)
            .await?
            .ok_or_else(|| Error::NotFound(format!("building '{}'", building_name)))?;

        let payload = json!({
            "additionalInfo": [
                {
                    "nameSpace": "Location",
                    "attributes": { "type": "floor" }
                },
                {
                    "nameSpace": "mapGeometry",
                    "attributes": {
                        "offsetX": "0.0",
                        "offsetY": "0.0",
                        "width": "200.0",
                        "length": "100.0",
                        "geometryType": "DUMMYTYPE",
                        "height": "20.0"
                    }
                },
                {
                    "nameSpace": "mapsSummary",
                    "attributes": { "floorIndex": floor_number.to_string() }
                }
            ],
            "groupNameHierarchy": "",
            "groupTypeList": ["SITE"],
            "name": floor_name,
            "parentId": building_id,
            "systemGroup": false,
            "id": ""
        });
        debug!(building_name, floor_name, "creating floor");
        self.client.post_no_content(token, "api/v1/group", &payload).await
    }

    /// Find the group id for a floor, by building and floor name.
    ///
    /// Returns `None` if the building has no such floor. Fails with
    /// [`Error::NotFound`] if the building does not exist.
    pub async fn floor_id(
        &self,
        token: &AuthToken,
        building_name: &str,
        floor_name: &str,
    ) -> Result<Option<String>> {
        let building_id = self
            .building_id(token, building_name)
            .await?
            .ok_or_else(|| Error::NotFound(format!("building '{}'", building_name)))?;

        let envelope: Envelope<Vec<Value>> = self
            .client
            .get_with_query(
                token,
                &format!("api/v1/group/{}/child", building_id),
                &[("level", "1")],
            )
            .await?;

        let mut found = None;
        for child in &envelope.response {
            if child["name"].as_str() == Some(floor_name) {
                found = child["id"].as_str().map(str::to_string);
            }
        }
        Ok(found)
    }

    /// Assign a device to a building, by device hostname.
    pub async fn assign_device_by_name(
        &self,
        token: &AuthToken,
        device_hostname: &str,
        building_name: &str,
    ) -> Result<()> {
        let device_id = self
            .client
            .devices()
            .find_id_by_name(token, device_hostname)
            .await?
            .ok_or_else(|| Error::NotFound(format!("device '{}'", device_hostname)))?;
        self.assign_member(token, &device_id, building_name).await
    }

    /// Assign a device to a building, by chassis serial number.
    pub async fn assign_device_by_serial(
        &self,
        token: &AuthToken,
        serial: &str,
        building_name: &str,
    ) -> Result<()> {
        let device_id = self.client.devices().find_id_by_serial(token, serial).await?;
        self.assign_member(token, &device_id, building_name).await
    }

    async fn assign_member(
        &self,
        token: &AuthToken,
        device_id: &str,
        building_name: &str,
    ) -> Result<()> {
        let building_id = self
            .building_id(token, building_name)
            .await?
            .ok_or_else(|| Error::NotFound(format!("building '{}'", building_name)))?;

        info!(building_name, "assigning device to building");
        self.client
            .post_no_content(
                token,
                &format!("api/v1/group/{}/member", building_id),
                &json!({ "networkdevice": [device_id] }),
            )
            .await
    }

    /// Scan the `SITE` group listing for a name, last match wins.
    async fn find_group_id(&self, token: &AuthToken, name: &str) -> Result<Option<String>> {
        let envelope: Envelope<Vec<Value>> = self
            .client
            .get_with_query(token, "api/v1/group", &[("groupType", "SITE")])
            .await?;

        let mut found = None;
        for group in &envelope.response {
            if group["name"].as_str() == Some(name) {
                found = group["id"].as_str().map(str::to_string);
            }
        }
        Ok(found)
    }
}
