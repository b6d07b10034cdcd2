//! Path trace (flow analysis) API.

use serde_json::{json, Value};
use tracing::debug;

use crate::client::DnacClient;
use crate::error::{Error, Result};
use crate::types::{AuthToken, Envelope, PathTraceInfo};

/// Path trace API client.
pub struct PathTraceApi {
    client: DnacClient,
}

impl PathTraceApi {
    pub(crate) fn new(client: DnacClient) -> Self {
        Self { client }
    }

    /// Start a path trace between two IPv4 addresses.
    ///
    /// Returns the flow analysis id to poll with [`PathTraceApi::info`].
    pub async fn create(&self, token: &AuthToken, source_ip: &str, dest_ip: &str) -> Result<String> {
        debug!(source_ip, dest_ip, "creating path trace");
        let envelope: Envelope<Value> = self
            .client
            .post(
                token,
                "api/v1/flow-analysis",
                &json!({
                    "destIP": dest_ip,
                    "periodicRefresh": false,
                    "sourceIP": source_ip,
                }),
            )
            .await?;

        envelope.response["flowAnalysisId"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                Error::MalformedResponse("flow analysis response carries no id".to_string())
            })
    }

    /// Fetch the status and hop list of a path trace.
    ///
    /// The hop list starts with the source IP, ends with the destination
    /// IP, and carries device names with ingress/egress interfaces in
    /// between where the analysis reported them. It stays empty until
    /// the analysis status is `COMPLETED`.
    pub async fn info(&self, token: &AuthToken, flow_id: &str) -> Result<PathTraceInfo> {
        let envelope: Envelope<Value> = self
            .client
            .get(token, &format!("api/v1/flow-analysis/{}", flow_id))
            .await?;
        let path = envelope.response;

        let status = path["request"]["status"]
            .as_str()
            .ok_or_else(|| {
                Error::MalformedResponse("flow analysis carries no request status".to_string())
            })?
            .to_string();

        let mut hops = Vec::new();
        if status == "COMPLETED" {
            if let Some(source) = path["request"]["sourceIP"].as_str() {
                hops.push(source.to_string());
            }
            if let Some(elements) = path["networkElementsInfo"].as_array() {
                for elem in elements {
                    push_if_str(
                        &mut hops,
                        &elem["ingressInterface"]["physicalInterface"]["name"],
                    );
                    push_if_str(&mut hops, &elem["name"]);
                    push_if_str(
                        &mut hops,
                        &elem["egressInterface"]["physicalInterface"]["name"],
                    );
                }
            }
            if let Some(dest) = path["request"]["destIP"].as_str() {
                hops.push(dest.to_string());
            }
        }

        Ok(PathTraceInfo { status, hops })
    }
}

fn push_if_str(hops: &mut Vec<String>, value: &Value) {
    if let Some(s) = value.as_str() {
        hops.push(s.to_string());
    }
}
