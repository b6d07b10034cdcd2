//! Task polling API.

use serde_json::Value;

use crate::client::DnacClient;
use crate::error::Result;
use crate::types::{AuthToken, Envelope, TaskStatus};

/// Task API client.
pub struct TasksApi {
    client: DnacClient,
}

impl TasksApi {
    pub(crate) fn new(client: DnacClient) -> Self {
        Self { client }
    }

    /// Check the outcome of an async controller task.
    ///
    /// The task record's `isError` flag decides the outcome; a missing
    /// flag counts as success, matching how the controller reports
    /// still-running tasks.
    pub async fn status(&self, token: &AuthToken, task_id: &str) -> Result<TaskStatus> {
        let envelope: Envelope<Value> = self
            .client
            .get(token, &format!("api/v1/task/{}", task_id))
            .await?;

        if envelope.response["isError"].as_bool().unwrap_or(false) {
            Ok(TaskStatus::Failure)
        } else {
            Ok(TaskStatus::Success)
        }
    }
}
