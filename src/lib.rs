pub mod cli;
pub mod gitlab;
pub mod mirror;
pub mod pipeline;
pub mod provider;
