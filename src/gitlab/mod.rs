pub mod client;
pub mod error;
pub mod outcome;
pub mod provider;
pub mod types;

pub use client::{GitlabClient, Method};
pub use error::GitlabError;
pub use outcome::{classify, Outcome, BENIGN_MESSAGES};
pub use provider::GitlabProvider;
pub use types::{ApiResponse, Project};
