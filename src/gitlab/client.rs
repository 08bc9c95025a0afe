use tracing::debug;

use super::error::GitlabError;
use super::outcome::{classify, Outcome};
use super::types::ApiResponse;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Thin wrapper over the GitLab REST API v3. One entry point, `request`,
/// shared by every provisioning call.
#[derive(Clone, Debug)]
pub struct GitlabClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitlabClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, GitlabError> {
        self.request(path, Method::Get, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<ApiResponse, GitlabError> {
        self.request(path, Method::Post, Some(form)).await
    }

    /// Issues one authenticated request. The token travels in the
    /// `PRIVATE-TOKEN` header, never in the URL. A body that is not valid
    /// JSON is kept as an empty object instead of failing the call; the
    /// status code decides the outcome.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        form: Option<&[(&str, String)]>,
    ) -> Result<ApiResponse, GitlabError> {
        let url = format!("{}/api/v3/{}", self.base_url, path);

        let mut builder = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        builder = builder.header("PRIVATE-TOKEN", &self.token);

        if let Some(form) = form {
            builder = builder.form(form);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        let body: serde_json::Value =
            serde_json::from_str(&text).unwrap_or_else(|_| serde_json::json!({}));
        let api_response = ApiResponse { status, body };

        debug!(%url, status, "gitlab api call");

        match classify(status, api_response.message()) {
            Outcome::Success | Outcome::BenignFailure => Ok(api_response),
            Outcome::FatalFailure => Err(GitlabError::Rejected {
                status,
                body: api_response.body,
            }),
        }
    }
}
