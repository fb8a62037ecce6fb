use super::wire;
use crate::Result;
use crate::facts::records::{
    CommitData, Contributor, EventData, IssueData, PullRequestData, RateLimitData, ReleaseData, RepositoryMetadata,
};
use crate::facts::{RepoApi, RepoSpec};
use anyhow::{Context, anyhow, bail};
use core::fmt::{Debug, Formatter, Result as FmtResult};
use octocrab::Octocrab;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use url::Url;

/// Log target for the GitHub client
const LOG_TARGET: &str = "github";

/// Query string for list endpoints.
#[derive(Debug, Serialize)]
struct ListParams {
    per_page: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<&'static str>,
}

impl ListParams {
    const fn page(per_page: u8) -> Self {
        Self {
            per_page,
            state: None,
            sort: None,
            direction: None,
        }
    }

    /// All states, most recently updated first.
    const fn recently_updated(per_page: u8) -> Self {
        Self {
            per_page,
            state: Some("all"),
            sort: Some("updated"),
            direction: Some("desc"),
        }
    }
}

/// Authenticated session to the GitHub REST API.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    base_url: Option<Url>,
}

impl Debug for GitHubClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Creates a client authenticated with a personal access token.
    ///
    /// When `base_url` is given, all requests go to that host instead of `api.github.com`,
    /// which is how GitHub Enterprise installations are reached.
    pub fn new(token: &str, base_url: Option<&Url>) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            bail!("a GitHub access token is required");
        }

        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(url) = base_url {
            builder = builder
                .base_uri(url.as_str().trim_end_matches('/'))
                .with_context(|| format!("using '{url}' as the GitHub API base URL"))?;
        }

        let octocrab = builder.build().context("creating the GitHub client")?;

        log::debug!(target: LOG_TARGET, "GitHub client ready (base URL: {})", base_url.map_or("default", Url::as_str));

        Ok(Self {
            octocrab,
            base_url: base_url.cloned(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, route: &str) -> Result<T> {
        log::debug!(target: LOG_TARGET, "GET {route}");
        self.octocrab
            .get(route, None::<&()>)
            .await
            .map_err(|e| anyhow!(describe(&e)))
            .with_context(|| format!("GET {route}"))
    }

    async fn get_page<T: DeserializeOwned>(&self, route: &str, params: &ListParams) -> Result<Vec<T>> {
        log::debug!(target: LOG_TARGET, "GET {route} (per_page={})", params.per_page);
        self.octocrab
            .get(route, Some(params))
            .await
            .map_err(|e| anyhow!(describe(&e)))
            .with_context(|| format!("GET {route}"))
    }
}

/// One-line description of a client error: the API's message, or else the underlying cause.
///
/// `octocrab::Error`'s own `Display` includes a captured backtrace.
fn describe(error: &octocrab::Error) -> String {
    match error {
        octocrab::Error::GitHub { source, .. } => format!("{} ({})", one_line(&source.message), source.status_code),
        other => core::error::Error::source(other)
            .map_or_else(|| "request failed".to_string(), |cause| one_line(&cause.to_string())),
    }
}

fn one_line(message: &str) -> String {
    message.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn repo_route(spec: &RepoSpec, tail: &str) -> String {
    format!("/repos/{}/{}{tail}", spec.owner(), spec.repo())
}

impl RepoApi for GitHubClient {
    async fn repository(&self, spec: &RepoSpec) -> Result<RepositoryMetadata> {
        let repository: wire::Repository = self.get(&repo_route(spec, "")).await?;
        Ok(repository.into())
    }

    async fn languages(&self, spec: &RepoSpec) -> Result<BTreeMap<String, u64>> {
        self.get(&repo_route(spec, "/languages")).await
    }

    async fn contributors(&self, spec: &RepoSpec, per_page: u8) -> Result<Vec<Contributor>> {
        let entries: Vec<wire::ContributorEntry> = self
            .get_page(&repo_route(spec, "/contributors"), &ListParams::page(per_page))
            .await?;
        Ok(entries.into_iter().map(Contributor::from).collect())
    }

    async fn issues(&self, spec: &RepoSpec, per_page: u8) -> Result<Vec<IssueData>> {
        let entries: Vec<wire::Issue> = self
            .get_page(&repo_route(spec, "/issues"), &ListParams::recently_updated(per_page))
            .await?;
        Ok(entries.into_iter().filter_map(wire::Issue::into_issue_data).collect())
    }

    async fn pull_requests(&self, spec: &RepoSpec, per_page: u8) -> Result<Vec<PullRequestData>> {
        let entries: Vec<wire::PullRequest> = self
            .get_page(&repo_route(spec, "/pulls"), &ListParams::recently_updated(per_page))
            .await?;
        Ok(entries.into_iter().map(PullRequestData::from).collect())
    }

    async fn releases(&self, spec: &RepoSpec, per_page: u8) -> Result<Vec<ReleaseData>> {
        let entries: Vec<wire::Release> = self
            .get_page(&repo_route(spec, "/releases"), &ListParams::page(per_page))
            .await?;
        Ok(entries.into_iter().map(ReleaseData::from).collect())
    }

    async fn commits(&self, spec: &RepoSpec, per_page: u8) -> Result<Vec<CommitData>> {
        let entries: Vec<wire::Commit> = self
            .get_page(&repo_route(spec, "/commits"), &ListParams::page(per_page))
            .await?;
        Ok(entries.into_iter().map(CommitData::from).collect())
    }

    async fn events(&self, spec: &RepoSpec, per_page: u8) -> Result<Vec<EventData>> {
        let entries: Vec<wire::Event> = self
            .get_page(&repo_route(spec, "/events"), &ListParams::page(per_page))
            .await?;
        Ok(entries.into_iter().map(EventData::from).collect())
    }

    async fn rate_limit(&self) -> Result<RateLimitData> {
        let rate_limit: wire::RateLimit = self.get("/rate_limit").await?;
        Ok(rate_limit.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_rejected() {
        let err = GitHubClient::new("   ", None).unwrap_err();
        assert!(err.to_string().contains("access token is required"));
    }

    #[test]
    fn test_one_line() {
        assert_eq!(one_line("EOF while parsing\n  at line 1"), "EOF while parsing at line 1");
        assert_eq!(one_line("plain"), "plain");
    }

    #[test]
    fn test_repo_route() {
        let spec = RepoSpec::new("octo", "hello");
        assert_eq!(repo_route(&spec, ""), "/repos/octo/hello");
        assert_eq!(repo_route(&spec, "/pulls"), "/repos/octo/hello/pulls");
    }

    #[test]
    fn test_list_params_query() {
        let query = serde_json::to_value(ListParams::recently_updated(10)).unwrap();
        assert_eq!(query, serde_json::json!({ "per_page": 10, "state": "all", "sort": "updated", "direction": "desc" }));

        let query = serde_json::to_value(ListParams::page(20)).unwrap();
        assert_eq!(query, serde_json::json!({ "per_page": 20 }));
    }
}
