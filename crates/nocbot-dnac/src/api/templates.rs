//! CLI template programmer API.
//!
//! Unlike the rest of the controller, the template-programmer endpoints
//! return bare JSON arrays and objects with no `{"response": ...}`
//! envelope.

use serde_json::{json, Value};
use tracing::{debug, info};

use crate::client::DnacClient;
use crate::error::{Error, Result};
use crate::types::{AuthToken, Project, TemplateRef, VersionedTemplate};

/// Commit comment applied to template versions.
const COMMIT_COMMENT: &str = "committed by nocbot";

/// Template programmer API client.
pub struct TemplatesApi {
    client: DnacClient,
}

impl TemplatesApi {
    pub(crate) fn new(client: DnacClient) -> Self {
        Self { client }
    }

    /// Find the project id for a project name.
    ///
    /// Fails with [`Error::NotFound`] if the project does not exist.
    pub async fn project_id(&self, token: &AuthToken, project_name: &str) -> Result<String> {
        let projects = self.projects_by_name(token, project_name).await?;
        projects
            .into_iter()
            .next()
            .map(|p| p.id)
            .ok_or_else(|| Error::NotFound(format!("project '{}'", project_name)))
    }

    /// List the templates in a project.
    ///
    /// Fails with [`Error::NotFound`] if the project does not exist.
    pub async fn project_templates(
        &self,
        token: &AuthToken,
        project_name: &str,
    ) -> Result<Vec<TemplateRef>> {
        let projects = self.projects_by_name(token, project_name).await?;
        projects
            .into_iter()
            .next()
            .map(|p| p.templates)
            .ok_or_else(|| Error::NotFound(format!("project '{}'", project_name)))
    }

    /// Find the head template id for a template name within a project.
    ///
    /// When several templates share the name, the one listed last wins.
    /// Returns `None` if no template matches.
    pub async fn find_id(
        &self,
        token: &AuthToken,
        template_name: &str,
        project_name: &str,
    ) -> Result<Option<String>> {
        let mut found = None;
        for template in self.project_templates(token, project_name).await? {
            if template.name == template_name {
                found = Some(template.id);
            }
        }
        Ok(found)
    }

    /// Find the id of the newest committed version of a template.
    ///
    /// Fails with [`Error::NotFound`] if the template has no committed
    /// versions.
    pub async fn latest_version_id(
        &self,
        token: &AuthToken,
        template_name: &str,
        project_name: &str,
    ) -> Result<String> {
        let project_id = self.project_id(token, project_name).await?;
        let templates: Vec<VersionedTemplate> = self
            .client
            .get_with_query(
                token,
                "api/v1/template-programmer/template",
                &[
                    ("projectId", project_id.as_str()),
                    ("includeHead", "false"),
                ],
            )
            .await?;

        let mut newest: Option<(u64, String)> = None;
        for template in templates {
            if template.name != template_name {
                continue;
            }
            for ver in template.versions_info {
                let number = ver
                    .version
                    .as_deref()
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(0);
                let is_newer = match &newest {
                    Some((best, _)) => number > *best,
                    None => true,
                };
                if is_newer {
                    newest = Some((number, ver.id));
                }
            }
        }

        newest.map(|(_, id)| id).ok_or_else(|| {
            Error::NotFound(format!(
                "committed version of template '{}' in project '{}'",
                template_name, project_name
            ))
        })
    }

    /// Create a new template and commit its first version.
    pub async fn create_and_commit(
        &self,
        token: &AuthToken,
        template_name: &str,
        project_name: &str,
        content: &str,
    ) -> Result<()> {
        let project_id = self.project_id(token, project_name).await?;

        debug!(template_name, project_name, "creating template");
        self.client
            .post_no_content(
                token,
                &format!("api/v1/template-programmer/project/{}/template", project_id),
                &template_payload(template_name, &project_id, content, None),
            )
            .await?;

        let template_id = self
            .find_id(token, template_name, project_name)
            .await?
            .ok_or_else(|| {
                Error::MalformedResponse(format!(
                    "template '{}' missing after creation",
                    template_name
                ))
            })?;
        self.commit(token, &template_id, COMMIT_COMMENT).await
    }

    /// Update an existing template and commit a new version.
    ///
    /// Fails with [`Error::NotFound`] if the template does not exist.
    pub async fn update_and_commit(
        &self,
        token: &AuthToken,
        template_name: &str,
        project_name: &str,
        content: &str,
    ) -> Result<()> {
        let project_id = self.project_id(token, project_name).await?;
        let template_id = self
            .find_id(token, template_name, project_name)
            .await?
            .ok_or_else(|| Error::NotFound(format!("template '{}'", template_name)))?;

        debug!(template_name, project_name, "updating template");
        self.client
            .put_no_content(
                token,
                "api/v1/template-programmer/template",
                &template_payload(template_name, &project_id, content, Some(&template_id)),
            )
            .await?;

        self.commit(token, &template_id, COMMIT_COMMENT).await
    }

    /// Create or update a template, then commit.
    pub async fn upsert(
        &self,
        token: &AuthToken,
        template_name: &str,
        project_name: &str,
        content: &str,
    ) -> Result<()> {
        let existing = self.find_id(token, template_name, project_name).await?;
        if existing.is_some() {
            self.update_and_commit(token, template_name, project_name, content)
                .await
        } else {
            self.create_and_commit(token, template_name, project_name, content)
                .await
        }
    }

    /// Commit the current state of a template as a new version.
    pub async fn commit(&self, token: &AuthToken, template_id: &str, comments: &str) -> Result<()> {
        self.client
            .post_no_content(
                token,
                "api/v1/template-programmer/template/version",
                &json!({ "templateId": template_id, "comments": comments }),
            )
            .await
    }

    /// Delete a template by name.
    ///
    /// Fails with [`Error::NotFound`] if the template does not exist.
    pub async fn delete(
        &self,
        token: &AuthToken,
        template_name: &str,
        project_name: &str,
    ) -> Result<()> {
        let template_id = self
            .find_id(token, template_name, project_name)
            .await?
            .ok_or_else(|| Error::NotFound(format!("template '{}'", template_name)))?;
        self.client
            .delete(
                token,
                &format!("api/v1/template-programmer/template/{}", template_id),
            )
            .await
    }

    /// All templates on the controller, including version history.
    pub async fn list_all(&self, token: &AuthToken) -> Result<Value> {
        self.client
            .get(token, "api/v1/template-programmer/template")
            .await
    }

    /// Full detail for a template, by name.
    ///
    /// Fails with [`Error::NotFound`] if the template does not exist.
    pub async fn info(
        &self,
        token: &AuthToken,
        template_name: &str,
        project_name: &str,
    ) -> Result<Value> {
        let template_id = self
            .find_id(token, template_name, project_name)
            .await?
            .ok_or_else(|| Error::NotFound(format!("template '{}'", template_name)))?;
        self.client
            .get(
                token,
                &format!("api/v1/template-programmer/template/{}", template_id),
            )
            .await
    }

    /// Deploy the newest committed version of a template to a device.
    ///
    /// The device is addressed by hostname and targeted through its
    /// management IP. Returns the deployment id for status polling.
    pub async fn deploy(
        &self,
        token: &AuthToken,
        template_name: &str,
        project_name: &str,
        device_hostname: &str,
    ) -> Result<String> {
        let management_ip = self
            .client
            .devices()
            .management_ip(token, device_hostname)
            .await?
            .ok_or_else(|| Error::NotFound(format!("device '{}'", device_hostname)))?;
        let template_id = self
            .latest_version_id(token, template_name, project_name)
            .await?;

        info!(template_name, device_hostname, "deploying template");
        let payload = json!({
            "templateId": template_id,
            "targetInfo": [
                {
                    "id": management_ip,
                    "type": "MANAGED_DEVICE_IP",
                    "params": {}
                }
            ]
        });
        let response: Value = self
            .client
            .post(token, "api/v1/template-programmer/template/deploy", &payload)
            .await?;

        response["deploymentId"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                Error::MalformedResponse("deploy response carries no deploymentId".to_string())
            })
    }

    /// Status of a template deployment.
    pub async fn deployment_status(
        &self,
        token: &AuthToken,
        deployment_id: &str,
    ) -> Result<String> {
        let response: Value = self
            .client
            .get(
                token,
                &format!(
                    "api/v1/template-programmer/template/deploy/status/{}",
                    deployment_id
                ),
            )
            .await?;

        response["status"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                Error::MalformedResponse("deployment status response carries no status".to_string())
            })
    }

    async fn projects_by_name(
        &self,
        token: &AuthToken,
        project_name: &str,
    ) -> Result<Vec<Project>> {
        self.client
            .get_with_query(
                token,
                "api/v1/template-programmer/project",
                &[("name", project_name)],
            )
            .await
    }
}

/// Template create/update payload.
///
/// `template_id` is set for updates and omitted for creation.
fn template_payload(
    template_name: &str,
    project_id: &str,
    content: &str,
    template_id: Option<&str>,
) -> Value {
    let mut payload = json!({
        "name": template_name,
        "description": "Managed CLI template",
        "tags": [],
        "author": "admin",
        "deviceTypes": [
            { "productFamily": "Routers" },
            { "productFamily": "Switches and Hubs" }
        ],
        "softwareType": "IOS-XE",
        "softwareVariant": "XE",
        "softwareVersion": "",
        "templateContent": content,
        "rollbackTemplateContent": "",
        "templateParams": [],
        "rollbackTemplateParams": [],
        "parentTemplateId": project_id
    });
    if let Some(id) = template_id {
        payload["id"] = json!(id);
    }
    payload
}
