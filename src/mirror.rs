use std::path::Path;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{info, warn};

use crate::cli::Config;

const GITLAB_REMOTE: &str = "gitlab";

/// Manages the on-disk working copy: clone it when absent, point a fresh
/// "gitlab" remote at the destination, force-push the ref. The directory is
/// never deleted here.
pub struct MirrorManager {
    pub config: Config,
}

impl MirrorManager {
    /// Returns whether a clone was performed. An existing directory is
    /// assumed to be a valid clone and left untouched.
    pub async fn ensure_working_dir_exists(&self) -> Result<bool> {
        let working_dir = self.config.working_dir();

        if working_dir.exists() {
            info!(
                "working directory {} already present, skipping clone",
                working_dir.display()
            );
            return Ok(false);
        }

        run_git(
            &self.config.cwd,
            &[
                "clone",
                &self.config.github_clone_url(),
                &working_dir.to_string_lossy(),
            ],
        )
        .await?;

        Ok(true)
    }

    /// Drops any stale "gitlab" remote and adds a fresh one with the current
    /// host and token. Removal of a remote that does not exist fails inside
    /// git, which the subprocess policy already tolerates.
    pub async fn ensure_remote_exists(&self) -> Result<()> {
        let working_dir = self.config.working_dir();

        run_git(&working_dir, &["remote", "remove", GITLAB_REMOTE]).await?;
        run_git(
            &working_dir,
            &["remote", "add", GITLAB_REMOTE, &self.config.gitlab_remote_url()],
        )
        .await?;

        Ok(())
    }

    /// Force-pushes `origin/{branch}` to `refs/heads/{branch}` on the
    /// "gitlab" remote. Divergent history on the destination always loses.
    pub async fn push_ref(&self) -> Result<String> {
        let branch = self.config.branch_name();
        let refspec = format!("origin/{branch}:refs/heads/{branch}", branch = branch);

        run_git(
            &self.config.working_dir(),
            &["push", "--force", GITLAB_REMOTE, &refspec],
        )
        .await
    }
}

/// Runs one git invocation. Stdout is captured and returned trimmed, stderr
/// streams through to the console. A non-zero exit is only a warning; git
/// steps are best-effort, unlike the API calls. Failing to spawn git at all
/// is still an error.
pub async fn run_git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .await
        .with_context(|| format!("could not run `git {}`", args.join(" ")))?;

    if !output.status.success() {
        warn!("`git {}` exited with {}", args.join(" "), output.status);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);

    Ok(stdout.trim().to_string())
}
