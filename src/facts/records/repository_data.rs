use super::{
    BasicInfo, CommitData, Contributor, EventData, ExtractionMeta, IssueData, PullRequestData, RateLimitData, ReleaseData,
    RepositoryMetadata, Settings, Statistics,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything extracted about one repository in a single run.
///
/// The metadata blocks are always present; every list starts empty and stays empty when
/// the step that fills it fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryData {
    pub basic_info: BasicInfo,
    pub statistics: Statistics,
    pub settings: Settings,

    /// Bytes of code per language.
    pub languages: BTreeMap<String, u64>,
    pub topics: Vec<String>,
    pub contributors: Vec<Contributor>,
    pub recent_issues: Vec<IssueData>,
    pub recent_prs: Vec<PullRequestData>,
    pub releases: Vec<ReleaseData>,
    pub recent_commits: Vec<CommitData>,
    pub recent_events: Vec<EventData>,
    pub rate_limit: Option<RateLimitData>,
    pub extraction_meta: ExtractionMeta,
}

impl RepositoryData {
    /// Starts a record from the repository metadata; all lists are empty.
    #[must_use]
    pub fn new(metadata: RepositoryMetadata, extraction_meta: ExtractionMeta) -> Self {
        let RepositoryMetadata {
            basic_info,
            statistics,
            settings,
            topics,
        } = metadata;

        Self {
            basic_info,
            statistics,
            settings,
            languages: BTreeMap::new(),
            topics,
            contributors: Vec::new(),
            recent_issues: Vec::new(),
            recent_prs: Vec::new(),
            releases: Vec::new(),
            recent_commits: Vec::new(),
            recent_events: Vec::new(),
            rate_limit: None,
            extraction_meta,
        }
    }

    /// Number of open issues in the sampled issue list.
    #[must_use]
    pub fn open_sampled_issues(&self) -> usize {
        self.recent_issues.iter().filter(|issue| issue.state.is_open()).count()
    }

    /// Number of open pull requests in the sampled pull request list.
    #[must_use]
    pub fn open_sampled_prs(&self) -> usize {
        self.recent_prs.iter().filter(|pr| pr.state.is_open()).count()
    }
}
