use crate::facts::RepositoryData;
use crate::facts::records::Contributor;
use serde::{Deserialize, Serialize};

/// Contributors with at least this many contributions count as core team.
pub const CORE_TEAM_MIN_CONTRIBUTIONS: u64 = 100;

const TOP_CONTRIBUTORS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorStats {
    pub top_contributors: Vec<Contributor>,
    pub total_contributors: usize,
    pub core_team_size: usize,
}

/// Summarizes the sampled contributors.
///
/// The API already lists contributors by contribution count, so the top entries are taken in
/// the order they were received.
#[must_use]
pub fn analyze_contributors(data: &RepositoryData) -> ContributorStats {
    let contributors = &data.contributors;

    ContributorStats {
        top_contributors: contributors.iter().take(TOP_CONTRIBUTORS).cloned().collect(),
        total_contributors: contributors.len(),
        core_team_size: contributors
            .iter()
            .filter(|c| c.contributions >= CORE_TEAM_MIN_CONTRIBUTIONS)
            .count(),
    }
}
