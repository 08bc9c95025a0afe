use async_trait::async_trait;
use tracing::info;

use super::client::GitlabClient;
use super::error::GitlabError;
use super::types::{ApiResponse, Project};
use crate::cli::Config;
use crate::provider::Provider;

pub struct GitlabProvider {
    pub config: Config,
}

impl GitlabProvider {
    /// `owner%2Fname`, the url-encoded form GitLab accepts in place of a
    /// numeric project id.
    fn project_path(&self) -> String {
        format!(
            "{owner}%2F{name}",
            owner = self.config.destination.owner,
            name = self.config.destination.name
        )
    }
}

#[async_trait]
impl Provider<GitlabClient> for GitlabProvider {
    fn configure_provider(&self, base_url: Option<String>) -> GitlabClient {
        let base_url = base_url.unwrap_or_else(|| self.config.destination.instance.clone());

        GitlabClient::new(&base_url, &self.config.destination.token)
    }

    /// Looks the project up and creates it when the lookup comes back 404.
    /// The "404 Project Not Found" body is on the benign list, so the lookup
    /// itself never rejects. Calling this twice never creates twice.
    async fn ensure_project_exists(
        &self,
        instance: &GitlabClient,
    ) -> Result<Project, GitlabError> {
        let destination = &self.config.destination;

        let lookup = instance
            .get(&format!("projects/{}", self.project_path()))
            .await?;

        if lookup.status != 404 {
            let project: Project = serde_json::from_value(lookup.body)?;
            return Ok(project);
        }

        info!(
            "project {}/{} not found, creating it",
            destination.owner, destination.name
        );

        let form = [
            ("name", destination.name.clone()),
            ("public", "true".to_string()),
            ("issues_enabled", "false".to_string()),
            (
                "shared_runners_enabled",
                destination.enable_shared_runners.to_string(),
            ),
        ];
        let created = instance.post("projects", &form).await?;

        let project: Project = serde_json::from_value(created.body)?;
        Ok(project)
    }

    /// Attaches the configured runner to the project. A 400 with "Runner was
    /// already enabled for this project" resolves like a success.
    async fn enable_runner(
        &self,
        instance: &GitlabClient,
        project_id: u64,
    ) -> Result<ApiResponse, GitlabError> {
        let form = [(
            "runner_id",
            self.config.destination.runner_id.to_string(),
        )];

        instance
            .post(&format!("projects/{}/runners", project_id), &form)
            .await
    }

    /// Registers the build-events webhook. Push events are explicitly off.
    /// GitLab does not deduplicate hooks, so every run adds another one.
    async fn add_build_events_hook(
        &self,
        instance: &GitlabClient,
    ) -> Result<ApiResponse, GitlabError> {
        let form = [
            ("url", self.config.webhook_url.clone()),
            ("build_events", "true".to_string()),
            ("push_events", "false".to_string()),
        ];

        instance
            .post(&format!("projects/{}/hooks", self.project_path()), &form)
            .await
    }
}
