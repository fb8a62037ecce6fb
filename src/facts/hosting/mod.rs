//! GitHub REST API access.

mod client;
pub mod wire;

pub use client::GitHubClient;
