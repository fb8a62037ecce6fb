use serde::{Deserialize, Serialize};

/// Popularity counters of a repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,

    /// Open issues plus open pull requests, as counted by GitHub.
    pub open_issues: u64,
    pub subscribers: u64,
    pub network_count: u64,
}
