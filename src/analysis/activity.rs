use super::days_between;
use crate::facts::RepositoryData;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Recent activity derived from the sampled commits, issues and pull requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityMetrics {
    pub commits_last_week: usize,
    pub commits_last_month: usize,
    pub issues_last_week: usize,
    pub issues_last_month: usize,
    pub prs_last_week: usize,
    pub prs_last_month: usize,

    /// Mean age of the sampled issues, in days.
    #[serde(rename = "avg_issue_age_days")]
    pub avg_issue_age: f64,

    /// Mean age of the sampled pull requests, in days.
    #[serde(rename = "avg_pr_age_days")]
    pub avg_pr_age: f64,
}

/// A trailing window `(now - days, now]`.
#[derive(Debug, Clone, Copy)]
struct Window {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Window {
    fn trailing_days(now: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: now - TimeDelta::days(days),
            end: now,
        }
    }

    fn contains(self, at: DateTime<Utc>) -> bool {
        at > self.start && at <= self.end
    }

    fn count(self, timestamps: impl IntoIterator<Item = DateTime<Utc>>) -> usize {
        timestamps.into_iter().filter(|&at| self.contains(at)).count()
    }
}

#[expect(clippy::cast_precision_loss, reason = "Sample sizes are tiny")]
fn mean_age(created: impl ExactSizeIterator<Item = DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let len = created.len();
    if len == 0 {
        return 0.0;
    }

    let total: f64 = created.map(|at| days_between(at, now)).sum();
    total / len as f64
}

/// Counts activity in the last 7 and 30 days relative to `now`.
#[must_use]
pub fn analyze_activity(data: &RepositoryData, now: DateTime<Utc>) -> ActivityMetrics {
    let week = Window::trailing_days(now, 7);
    let month = Window::trailing_days(now, 30);

    let commit_times = || data.recent_commits.iter().filter_map(|c| c.created_at);
    let issue_times = || data.recent_issues.iter().map(|i| i.created_at);
    let pr_times = || data.recent_prs.iter().map(|p| p.created_at);

    ActivityMetrics {
        commits_last_week: week.count(commit_times()),
        commits_last_month: month.count(commit_times()),
        issues_last_week: week.count(issue_times()),
        issues_last_month: month.count(issue_times()),
        prs_last_week: week.count(pr_times()),
        prs_last_month: month.count(pr_times()),
        avg_issue_age: mean_age(issue_times(), now),
        avg_pr_age: mean_age(pr_times(), now),
    }
}
