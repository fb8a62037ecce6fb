//! GitHub REST payloads and their translation into local records.
//!
//! This is the only module that knows the shape of the upstream JSON. Every field is optional
//! on the wire and coerced to its default when absent: empty strings, zero counts, `false`
//! flags, and the Unix epoch for timestamps the API always promises. Timestamps the API may
//! legitimately omit stay optional in the records.

use crate::facts::records::{
    BasicInfo, CommitData, Contributor, EventData, IssueData, ItemState, PullRequestData, Rate, RateLimitData, ReleaseData,
    RepositoryMetadata, Settings, Statistics,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

fn timestamp_or_epoch(value: Option<DateTime<Utc>>) -> DateTime<Utc> {
    value.unwrap_or(DateTime::UNIX_EPOCH)
}

fn state_of(value: Option<&str>) -> ItemState {
    value.map_or(ItemState::Unknown, ItemState::from_api)
}

#[derive(Debug, Default, Deserialize)]
pub struct Account {
    pub login: Option<String>,
}

fn login_of(account: Option<Account>) -> String {
    account.and_then(|a| a.login).unwrap_or_default()
}

#[derive(Debug, Default, Deserialize)]
pub struct License {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Repository {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub owner: Option<Account>,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub homepage: Option<String>,
    pub clone_url: Option<String>,
    pub ssh_url: Option<String>,
    pub default_branch: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub size: Option<u64>,
    pub license: Option<License>,

    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub watchers_count: Option<u64>,
    pub open_issues_count: Option<u64>,
    pub subscribers_count: Option<u64>,
    pub network_count: Option<u64>,

    pub private: Option<bool>,
    pub fork: Option<bool>,
    pub archived: Option<bool>,
    pub disabled: Option<bool>,
    pub has_issues: Option<bool>,
    pub has_projects: Option<bool>,
    pub has_wiki: Option<bool>,
    pub has_pages: Option<bool>,
    pub has_discussions: Option<bool>,
    pub has_downloads: Option<bool>,
    pub allow_forking: Option<bool>,
    pub allow_merge_commit: Option<bool>,
    pub allow_squash_merge: Option<bool>,
    pub allow_rebase_merge: Option<bool>,

    pub topics: Option<Vec<String>>,
}

impl From<Repository> for RepositoryMetadata {
    fn from(r: Repository) -> Self {
        let basic_info = BasicInfo {
            name: r.name.unwrap_or_default(),
            full_name: r.full_name.unwrap_or_default(),
            owner: login_of(r.owner),
            description: r.description.unwrap_or_default(),
            url: r.html_url.unwrap_or_default(),
            homepage: r.homepage.unwrap_or_default(),
            clone_url: r.clone_url.unwrap_or_default(),
            ssh_url: r.ssh_url.unwrap_or_default(),
            default_branch: r.default_branch.unwrap_or_default(),
            created_at: timestamp_or_epoch(r.created_at),
            updated_at: timestamp_or_epoch(r.updated_at),
            pushed_at: r.pushed_at,
            size_kb: r.size.unwrap_or_default(),
            license: r.license.and_then(|l| l.name).unwrap_or_default(),
        };

        let statistics = Statistics {
            stars: r.stargazers_count.unwrap_or_default(),
            forks: r.forks_count.unwrap_or_default(),
            watchers: r.watchers_count.unwrap_or_default(),
            open_issues: r.open_issues_count.unwrap_or_default(),
            subscribers: r.subscribers_count.unwrap_or_default(),
            network_count: r.network_count.unwrap_or_default(),
        };

        let settings = Settings {
            private: r.private.unwrap_or_default(),
            fork: r.fork.unwrap_or_default(),
            archived: r.archived.unwrap_or_default(),
            disabled: r.disabled.unwrap_or_default(),
            has_issues: r.has_issues.unwrap_or_default(),
            has_projects: r.has_projects.unwrap_or_default(),
            has_wiki: r.has_wiki.unwrap_or_default(),
            has_pages: r.has_pages.unwrap_or_default(),
            has_discussions: r.has_discussions.unwrap_or_default(),
            has_downloads: r.has_downloads.unwrap_or_default(),
            allow_forking: r.allow_forking.unwrap_or_default(),
            allow_merge_commit: r.allow_merge_commit.unwrap_or_default(),
            allow_squash_merge: r.allow_squash_merge.unwrap_or_default(),
            allow_rebase_merge: r.allow_rebase_merge.unwrap_or_default(),
        };

        Self {
            basic_info,
            statistics,
            settings,
            topics: r.topics.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ContributorEntry {
    pub login: Option<String>,
    pub contributions: Option<u64>,
    pub avatar_url: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
}

impl From<ContributorEntry> for Contributor {
    fn from(c: ContributorEntry) -> Self {
        Self {
            login: c.login.unwrap_or_default(),
            contributions: c.contributions.unwrap_or_default(),
            avatar_url: c.avatar_url.unwrap_or_default(),
            account_type: c.account_type.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Label {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Issue {
    pub number: Option<u64>,
    pub title: Option<String>,
    pub state: Option<String>,
    pub user: Option<Account>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub comments: Option<u64>,

    /// Present when the "issue" is really a pull request.
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    /// Translates the entry, or returns `None` for pull requests listed through the issues endpoint.
    #[must_use]
    pub fn into_issue_data(self) -> Option<IssueData> {
        if self.pull_request.as_ref().is_some_and(|link| !link.is_null()) {
            return None;
        }

        Some(IssueData {
            number: self.number.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            state: state_of(self.state.as_deref()),
            author: login_of(self.user),
            created_at: timestamp_or_epoch(self.created_at),
            updated_at: timestamp_or_epoch(self.updated_at),
            labels: self.labels.into_iter().map(|label| label.name.unwrap_or_default()).collect(),
            comments: self.comments.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PullRequest {
    pub number: Option<u64>,
    pub title: Option<String>,
    pub state: Option<String>,
    pub user: Option<Account>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub merged: Option<bool>,
    pub merged_at: Option<DateTime<Utc>>,
    pub draft: Option<bool>,
}

impl From<PullRequest> for PullRequestData {
    fn from(pr: PullRequest) -> Self {
        Self {
            number: pr.number.unwrap_or_default(),
            title: pr.title.unwrap_or_default(),
            state: state_of(pr.state.as_deref()),
            author: login_of(pr.user),
            created_at: timestamp_or_epoch(pr.created_at),
            updated_at: timestamp_or_epoch(pr.updated_at),
            // the list endpoint omits `merged` but always reports `merged_at`
            merged: pr.merged.unwrap_or(false) || pr.merged_at.is_some(),
            draft: pr.draft.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Release {
    pub tag_name: Option<String>,
    pub name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub prerelease: Option<bool>,
    pub draft: Option<bool>,
    pub author: Option<Account>,
}

impl From<Release> for ReleaseData {
    fn from(r: Release) -> Self {
        Self {
            tag_name: r.tag_name.unwrap_or_default(),
            name: r.name.unwrap_or_default(),
            created_at: timestamp_or_epoch(r.created_at),
            published_at: r.published_at,
            prerelease: r.prerelease.unwrap_or_default(),
            draft: r.draft.unwrap_or_default(),
            author: login_of(r.author),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GitSignature {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GitCommit {
    pub message: Option<String>,
    pub author: Option<GitSignature>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Commit {
    pub sha: Option<String>,
    pub commit: Option<GitCommit>,
    pub html_url: Option<String>,
}

impl From<Commit> for CommitData {
    fn from(c: Commit) -> Self {
        let GitCommit { message, author } = c.commit.unwrap_or_default();
        let GitSignature { name, date } = author.unwrap_or_default();

        Self {
            sha: c.sha.unwrap_or_default(),
            message: message.unwrap_or_default(),
            author: name.unwrap_or_default(),
            created_at: date,
            url: c.html_url.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub actor: Option<Account>,
    pub created_at: Option<DateTime<Utc>>,
    pub public: Option<bool>,
}

impl From<Event> for EventData {
    fn from(e: Event) -> Self {
        Self {
            event_type: e.event_type.unwrap_or_default(),
            actor: login_of(e.actor),
            created_at: timestamp_or_epoch(e.created_at),
            public: e.public.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RateEntry {
    pub limit: Option<u64>,
    pub remaining: Option<u64>,
    pub used: Option<u64>,

    /// Unix seconds.
    pub reset: Option<i64>,
}

impl From<RateEntry> for Rate {
    fn from(r: RateEntry) -> Self {
        Self {
            limit: r.limit.unwrap_or_default(),
            remaining: r.remaining.unwrap_or_default(),
            used: r.used.unwrap_or_default(),
            reset: r.reset.and_then(|secs| DateTime::from_timestamp(secs, 0)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RateResources {
    pub core: Option<RateEntry>,
    pub search: Option<RateEntry>,
    pub graphql: Option<RateEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RateLimit {
    pub resources: Option<RateResources>,
}

impl From<RateLimit> for RateLimitData {
    fn from(r: RateLimit) -> Self {
        let resources = r.resources.unwrap_or_default();
        Self {
            core: resources.core.map(Rate::from),
            search: resources.search.map(Rate::from),
            graphql: resources.graphql.map(Rate::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn from_json<T: for<'de> Deserialize<'de>>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_repository_full_payload() {
        let repo: Repository = from_json(json!({
            "name": "hello",
            "full_name": "octo/hello",
            "owner": { "login": "octo" },
            "description": "Greets",
            "html_url": "https://github.com/octo/hello",
            "created_at": "2020-01-02T03:04:05Z",
            "updated_at": "2024-05-06T07:08:09Z",
            "pushed_at": null,
            "size": 321,
            "license": { "key": "mit", "name": "MIT License" },
            "stargazers_count": 1500,
            "forks_count": 12,
            "open_issues_count": 7,
            "has_issues": true,
            "allow_squash_merge": true,
            "topics": ["cli", "rust"]
        }));

        let metadata = RepositoryMetadata::from(repo);
        assert_eq!(metadata.basic_info.full_name, "octo/hello");
        assert_eq!(metadata.basic_info.owner, "octo");
        assert_eq!(metadata.basic_info.license, "MIT License");
        assert_eq!(metadata.basic_info.size_kb, 321);
        assert_eq!(metadata.basic_info.created_at.to_rfc3339(), "2020-01-02T03:04:05+00:00");
        assert_eq!(metadata.basic_info.pushed_at, None);
        assert_eq!(metadata.statistics.stars, 1500);
        assert_eq!(metadata.statistics.open_issues, 7);
        assert!(metadata.settings.has_issues);
        assert!(metadata.settings.allow_squash_merge);
        assert!(!metadata.settings.has_wiki);
        assert_eq!(metadata.topics, vec!["cli".to_string(), "rust".to_string()]);
    }

    #[test]
    fn test_repository_empty_payload_coerces_to_defaults() {
        let metadata = RepositoryMetadata::from(from_json::<Repository>(json!({})));
        assert_eq!(metadata.basic_info.name, "");
        assert_eq!(metadata.basic_info.license, "");
        assert_eq!(metadata.basic_info.created_at, DateTime::UNIX_EPOCH);
        assert_eq!(metadata.statistics, Statistics::default());
        assert_eq!(metadata.settings, Settings::default());
        assert!(metadata.topics.is_empty());
    }

    #[test]
    fn test_issue_excludes_pull_requests() {
        let issues: Vec<Issue> = from_json(json!([
            { "number": 1, "title": "bug", "state": "open", "user": { "login": "a" },
              "labels": [{ "name": "bug" }, { "name": "p1" }], "comments": 3,
              "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-02T00:00:00Z" },
            { "number": 2, "title": "a PR", "state": "open",
              "pull_request": { "url": "https://api.github.com/repos/o/r/pulls/2" } },
            { "number": 3, "title": "closed", "state": "closed", "pull_request": null }
        ]));

        let data: Vec<IssueData> = issues.into_iter().filter_map(Issue::into_issue_data).collect();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].number, 1);
        assert_eq!(data[0].state, ItemState::Open);
        assert_eq!(data[0].author, "a");
        assert_eq!(data[0].labels, vec!["bug".to_string(), "p1".to_string()]);
        assert_eq!(data[0].comments, 3);
        assert_eq!(data[1].number, 3);
        assert_eq!(data[1].state, ItemState::Closed);
        assert_eq!(data[1].author, "");
    }

    #[test]
    fn test_pull_request_merged_from_merged_at() {
        let merged: PullRequest = from_json(json!({ "number": 5, "state": "closed", "merged_at": "2024-03-01T00:00:00Z" }));
        let unmerged: PullRequest = from_json(json!({ "number": 6, "state": "closed", "merged_at": null, "draft": true }));

        let merged = PullRequestData::from(merged);
        let unmerged = PullRequestData::from(unmerged);
        assert!(merged.merged);
        assert!(!unmerged.merged);
        assert!(unmerged.draft);
    }

    #[test]
    fn test_release_draft_has_no_published_at() {
        let release = ReleaseData::from(from_json::<Release>(json!({
            "tag_name": "v2.0.0-rc1",
            "draft": true,
            "created_at": "2024-02-02T00:00:00Z",
            "published_at": null,
            "author": { "login": "releaser" }
        })));
        assert_eq!(release.tag_name, "v2.0.0-rc1");
        assert_eq!(release.published_at, None);
        assert_eq!(release.released_at(), release.created_at);
        assert_eq!(release.author, "releaser");
    }

    #[test]
    fn test_commit_nested_author() {
        let commit = CommitData::from(from_json::<Commit>(json!({
            "sha": "abcdef0123456789",
            "html_url": "https://github.com/o/r/commit/abcdef0",
            "commit": {
                "message": "Fix things",
                "author": { "name": "Jane Doe", "email": "jane@example.com", "date": "2024-04-04T12:00:00Z" }
            }
        })));
        assert_eq!(commit.author, "Jane Doe");
        assert_eq!(commit.message, "Fix things");
        assert!(commit.created_at.is_some());

        let bare = CommitData::from(from_json::<Commit>(json!({ "sha": "123" })));
        assert_eq!(bare.author, "");
        assert_eq!(bare.created_at, None);
    }

    #[test]
    fn test_event() {
        let event = EventData::from(from_json::<Event>(json!({
            "type": "PushEvent",
            "actor": { "login": "pusher" },
            "public": true,
            "created_at": "2024-04-04T12:00:00Z"
        })));
        assert_eq!(event.event_type, "PushEvent");
        assert_eq!(event.actor, "pusher");
        assert!(event.public);
    }

    #[test]
    fn test_rate_limit() {
        let rate_limit = RateLimitData::from(from_json::<RateLimit>(json!({
            "resources": {
                "core": { "limit": 5000, "used": 10, "remaining": 4990, "reset": 1_700_000_000 },
                "search": { "limit": 30, "used": 0, "remaining": 30, "reset": 1_700_000_060 }
            },
            "rate": { "limit": 5000, "used": 10, "remaining": 4990, "reset": 1_700_000_000 }
        })));

        let core = rate_limit.core.unwrap();
        assert_eq!(core.limit, 5000);
        assert_eq!(core.remaining, 4990);
        assert_eq!(core.used, 10);
        assert_eq!(core.reset, DateTime::from_timestamp(1_700_000_000, 0));
        assert!(rate_limit.search.is_some());
        assert!(rate_limit.graphql.is_none());
    }
}
