use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitlabError {
    /// The request never produced a response.
    #[error("request to GitLab failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitLab answered with a non-benign error status; the parsed body is
    /// carried as the failure value.
    #[error("GitLab rejected the request with status {status}: {body}")]
    Rejected {
        status: u16,
        body: serde_json::Value,
    },

    /// The response succeeded but its body did not have the expected shape.
    #[error("unexpected GitLab response body: {0}")]
    Body(#[from] serde_json::Error),
}
