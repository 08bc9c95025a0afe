use std::path::Path;

use glmirror::cli::{Config, DestinationProject, SourceRepository};
use glmirror::mirror::{run_git, MirrorManager};

fn config(cwd: &Path) -> Config {
    Config {
        source: SourceRepository {
            owner: "my_name".to_string(),
            name: "test1".to_string(),
            git_ref: "refs/heads/main".to_string(),
        },
        destination: DestinationProject {
            instance: "https://gitlab.example.net".to_string(),
            owner: "my_group".to_string(),
            name: "mirrored".to_string(),
            token: "random_token".to_string(),
            runner_id: 42,
            enable_shared_runners: false,
        },
        webhook_url: "https://ci.example.net/hook".to_string(),
        cwd: cwd.to_path_buf(),
    }
}

#[tokio::test]
async fn existing_working_dir_skips_clone() {
    let cwd = tempfile::tempdir().unwrap();
    let config = config(cwd.path());

    std::fs::create_dir(config.working_dir()).unwrap();

    let manager = MirrorManager { config };
    let cloned = manager.ensure_working_dir_exists().await.unwrap();

    assert!(!cloned);
}

#[tokio::test]
async fn failing_git_command_still_resolves() {
    let dir = tempfile::tempdir().unwrap();

    // `git status` outside of any repository exits non-zero; the policy is
    // to warn and keep going.
    let output = run_git(dir.path(), &["status", "--porcelain"]).await.unwrap();

    assert_eq!(output, "");
}

#[tokio::test]
async fn git_stdout_is_captured_and_trimmed() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_git(dir.path(), &["--version"]).await.unwrap();

    assert!(output.starts_with("git version"));
    assert!(!output.ends_with('\n'));
}

#[tokio::test]
async fn remote_is_recreated_each_run() {
    let cwd = tempfile::tempdir().unwrap();
    let config = config(cwd.path());
    let working_dir = config.working_dir();

    std::fs::create_dir(&working_dir).unwrap();
    run_git(&working_dir, &["init"]).await.unwrap();
    run_git(&working_dir, &["remote", "add", "gitlab", "https://stale.example.net/old.git"])
        .await
        .unwrap();

    let expected_url = config.gitlab_remote_url();
    let manager = MirrorManager { config };
    manager.ensure_remote_exists().await.unwrap();

    let url = run_git(&working_dir, &["remote", "get-url", "gitlab"])
        .await
        .unwrap();

    assert_eq!(url, expected_url);
}

#[tokio::test]
async fn force_push_overwrites_divergent_remote_history() {
    let cwd = tempfile::tempdir().unwrap();
    let config = config(cwd.path());
    let working_dir = config.working_dir();

    // Upstream repository standing in for GitHub, with one commit on main.
    let upstream = cwd.path().join("upstream");
    std::fs::create_dir(&upstream).unwrap();
    run_git(&upstream, &["init", "-b", "main"]).await.unwrap();
    std::fs::write(upstream.join("first.txt"), "one").unwrap();
    run_git(&upstream, &["add", "."]).await.unwrap();
    commit(&upstream, "one").await;

    // Cloning it gives the working copy its origin/main tracking ref.
    run_git(
        cwd.path(),
        &[
            "clone",
            &upstream.to_string_lossy(),
            &working_dir.to_string_lossy(),
        ],
    )
    .await
    .unwrap();

    // Bare destination repository standing in for the GitLab project, with
    // divergent history on main: a commit that origin/main never saw.
    let bare = cwd.path().join("gitlab.git");
    run_git(cwd.path(), &["init", "--bare", "gitlab.git"])
        .await
        .unwrap();
    run_git(
        &working_dir,
        &["remote", "add", "gitlab", &bare.to_string_lossy()],
    )
    .await
    .unwrap();
    run_git(&working_dir, &["checkout", "-b", "divergent"])
        .await
        .unwrap();
    std::fs::write(working_dir.join("second.txt"), "two").unwrap();
    run_git(&working_dir, &["add", "."]).await.unwrap();
    commit(&working_dir, "two").await;
    run_git(&working_dir, &["push", "gitlab", "divergent:refs/heads/main"])
        .await
        .unwrap();

    let expected_tip = run_git(&working_dir, &["rev-parse", "origin/main"])
        .await
        .unwrap();
    let divergent_tip = run_git(&working_dir, &["rev-parse", "divergent"])
        .await
        .unwrap();
    assert_ne!(divergent_tip, expected_tip);

    let manager = MirrorManager { config };
    manager.push_ref().await.unwrap();

    let remote_tip = run_git(&bare, &["rev-parse", "main"]).await.unwrap();

    assert_eq!(remote_tip, expected_tip);
}

async fn commit(dir: &Path, message: &str) {
    run_git(
        dir,
        &[
            "-c",
            "user.name=tester",
            "-c",
            "user.email=tester@example.net",
            "commit",
            "-m",
            message,
        ],
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn missing_remote_does_not_fail_recreation() {
    let cwd = tempfile::tempdir().unwrap();
    let config = config(cwd.path());
    let working_dir = config.working_dir();

    std::fs::create_dir(&working_dir).unwrap();
    run_git(&working_dir, &["init"]).await.unwrap();

    let expected_url = config.gitlab_remote_url();
    let manager = MirrorManager { config };
    manager.ensure_remote_exists().await.unwrap();

    let url = run_git(&working_dir, &["remote", "get-url", "gitlab"])
        .await
        .unwrap();

    assert_eq!(url, expected_url);
}
