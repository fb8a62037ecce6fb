//! Fact collection about a GitHub repository.
//!
//! [`extract`] drives a [`RepoApi`] implementation (normally [`GitHubClient`]) through
//! the fixed sequence of extraction steps and assembles a [`RepositoryData`].

mod extractor;
pub mod hosting;
mod progress;
pub mod records;
mod repo_api;
mod repo_spec;

pub use extractor::{CONTRIBUTORS_PAGE_SIZE, LIST_PAGE_SIZE, STEPS, extract};
pub use hosting::GitHubClient;
pub use progress::{NoProgress, Progress};
pub use records::RepositoryData;
pub use repo_api::RepoApi;
pub use repo_spec::{RepoSpec, SUPPORTED_FORMATS};
