use super::MaintenanceStatus;
use crate::facts::RepositoryData;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Open issues untouched for longer than this many days are stale.
pub const STALE_ISSUE_DAYS: i64 = 90;

/// The signals the health score is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthInputs {
    #[serde(rename = "last_commit_days_ago")]
    pub last_commit_days: i64,

    #[serde(rename = "last_release_days_ago")]
    pub last_release_days: i64,

    /// Fraction of sampled issues that are open, in `0.0..=1.0`.
    pub open_issues_ratio: f64,

    #[serde(rename = "stale_issues_count")]
    pub stale_issues: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryHealth {
    #[serde(flatten)]
    pub inputs: HealthInputs,
    pub health_score: f64,
    pub maintenance_status: MaintenanceStatus,
}

/// Scores a repository out of 100, subtracting a penalty for each weak signal.
#[must_use]
pub fn health_score(inputs: &HealthInputs) -> f64 {
    let mut score = 100.0;

    score -= match inputs.last_commit_days {
        d if d > 30 => 20.0,
        d if d > 7 => 10.0,
        _ => 0.0,
    };

    score -= match inputs.last_release_days {
        d if d > 365 => 15.0,
        d if d > 180 => 10.0,
        _ => 0.0,
    };

    score -= match inputs.open_issues_ratio {
        r if r > 0.8 => 15.0,
        r if r > 0.6 => 10.0,
        _ => 0.0,
    };

    score -= match inputs.stale_issues {
        n if n > 10 => 10.0,
        n if n > 5 => 5.0,
        _ => 0.0,
    };

    score
}

fn whole_days_since(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_days()
}

/// Gathers the health signals from the sampled data and scores them.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "Sample sizes are tiny")]
pub fn analyze_health(data: &RepositoryData, now: DateTime<Utc>) -> RepositoryHealth {
    let last_commit_days = data
        .recent_commits
        .first()
        .and_then(|c| c.created_at)
        .map_or(0, |at| whole_days_since(at, now));

    let last_release_days = data
        .releases
        .first()
        .map_or(0, |r| whole_days_since(r.released_at(), now));

    let sampled = data.recent_issues.len();
    let open_issues_ratio = if data.statistics.open_issues > 0 && sampled > 0 {
        data.open_sampled_issues() as f64 / sampled as f64
    } else {
        0.0
    };

    let stale_before = now - TimeDelta::days(STALE_ISSUE_DAYS);
    let stale_issues = data
        .recent_issues
        .iter()
        .filter(|i| i.state.is_open() && i.updated_at < stale_before)
        .count();

    let inputs = HealthInputs {
        last_commit_days,
        last_release_days,
        open_issues_ratio,
        stale_issues,
    };

    let health_score = health_score(&inputs);
    RepositoryHealth {
        inputs,
        health_score,
        maintenance_status: MaintenanceStatus::from_score(health_score),
    }
}
