use crate::Result;
use crate::facts::RepoSpec;
use crate::facts::records::{
    CommitData, Contributor, EventData, IssueData, PullRequestData, RateLimitData, ReleaseData, RepositoryMetadata,
};
use std::collections::BTreeMap;

/// Read access to the repository endpoints the extraction pipeline needs.
///
/// Each method performs a single request and returns already-translated records. List methods
/// fetch only the first page, of at most `per_page` entries.
#[expect(async_fn_in_trait, reason = "Only used through generics, never as a trait object")]
pub trait RepoApi {
    async fn repository(&self, spec: &RepoSpec) -> Result<RepositoryMetadata>;

    async fn languages(&self, spec: &RepoSpec) -> Result<BTreeMap<String, u64>>;

    async fn contributors(&self, spec: &RepoSpec, per_page: u8) -> Result<Vec<Contributor>>;

    /// Most recently updated issues in any state. Pull requests are filtered out, so fewer than
    /// `per_page` entries may be returned.
    async fn issues(&self, spec: &RepoSpec, per_page: u8) -> Result<Vec<IssueData>>;

    /// Most recently updated pull requests in any state.
    async fn pull_requests(&self, spec: &RepoSpec, per_page: u8) -> Result<Vec<PullRequestData>>;

    async fn releases(&self, spec: &RepoSpec, per_page: u8) -> Result<Vec<ReleaseData>>;

    async fn commits(&self, spec: &RepoSpec, per_page: u8) -> Result<Vec<CommitData>>;

    async fn events(&self, spec: &RepoSpec, per_page: u8) -> Result<Vec<EventData>>;

    /// Quota status of the authenticated caller; not tied to a repository.
    async fn rate_limit(&self) -> Result<RateLimitData>;
}
