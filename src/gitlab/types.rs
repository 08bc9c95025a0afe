use serde::Deserialize;

/// Outcome of a single API exchange: the raw status plus whatever JSON the
/// body parsed into. Lives only for the duration of one call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(|message| message.as_str())
    }
}

/// The slice of a GitLab project record the pipeline actually uses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub id: u64,
    #[serde(default)]
    pub path_with_namespace: String,
}
