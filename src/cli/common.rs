use std::path::PathBuf;

/// The GitHub repository a ref is mirrored from.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceRepository {
    pub owner: String,
    pub name: String,
    pub git_ref: String,
}

/// The GitLab project the ref is mirrored into.
#[derive(Clone, Debug, PartialEq)]
pub struct DestinationProject {
    pub instance: String,
    pub owner: String,
    pub name: String,
    pub token: String,
    pub runner_id: u32,
    pub enable_shared_runners: bool,
}

/// All settings for one run, resolved once at startup and read-only after.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub source: SourceRepository,
    pub destination: DestinationProject,
    pub webhook_url: String,
    pub cwd: PathBuf,
}

impl Config {
    /// Only the final segment of the ref path is used as the branch name,
    /// so `refs/heads/main` and `main` both mirror to `main`.
    pub fn branch_name(&self) -> &str {
        self.source
            .git_ref
            .rsplit('/')
            .next()
            .unwrap_or(&self.source.git_ref)
    }

    pub fn working_dir(&self) -> PathBuf {
        self.cwd
            .join(format!("{}_{}", self.source.name, self.source.owner))
    }

    pub fn github_clone_url(&self) -> String {
        format!(
            "https://github.com/{owner}/{name}.git",
            owner = self.source.owner,
            name = self.source.name
        )
    }

    /// Push URL for the "gitlab" remote, with the token embedded so git can
    /// authenticate without prompting. Never used for API calls.
    pub fn gitlab_remote_url(&self) -> String {
        let host = self
            .destination
            .instance
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');

        format!(
            "https://{user}:{token}@{host}/{owner}/{name}.git",
            user = self.destination.owner,
            token = self.destination.token,
            host = host,
            owner = self.destination.owner,
            name = self.destination.name
        )
    }
}
