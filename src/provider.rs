use async_trait::async_trait;

use crate::gitlab::{ApiResponse, GitlabError, Project};

/// Provisioning operations against the destination host. `configure_provider`
/// takes an optional base-url override so tests can point the instance at a
/// mock server.
#[async_trait]
pub trait Provider<T> {
    fn configure_provider(&self, base_url: Option<String>) -> T;

    async fn ensure_project_exists(&self, instance: &T) -> Result<Project, GitlabError>;

    async fn enable_runner(
        &self,
        instance: &T,
        project_id: u64,
    ) -> Result<ApiResponse, GitlabError>;

    async fn add_build_events_hook(&self, instance: &T) -> Result<ApiResponse, GitlabError>;
}
