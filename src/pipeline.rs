use anyhow::Result;
use tracing::info;

use crate::cli::Config;
use crate::gitlab::GitlabProvider;
use crate::mirror::MirrorManager;
use crate::provider::Provider;

/// The whole run, top to bottom. Every stage waits for the previous one and
/// the first fatal error aborts the chain; nothing done so far is rolled
/// back.
pub async fn call(config: Config) -> Result<()> {
    let provider = GitlabProvider {
        config: config.clone(),
    };
    let instance = provider.configure_provider(None);

    let project = provider.ensure_project_exists(&instance).await?;
    info!(project_id = project.id, "gitlab project ready");

    provider.enable_runner(&instance, project.id).await?;
    info!(runner_id = config.destination.runner_id, "runner enabled");

    provider.add_build_events_hook(&instance).await?;
    info!(url = %config.webhook_url, "build events hook added");

    let mirror = MirrorManager { config };

    mirror.ensure_working_dir_exists().await?;
    mirror.ensure_remote_exists().await?;
    mirror.push_ref().await?;

    info!("mirror complete");

    Ok(())
}
