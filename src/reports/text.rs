//! The plain-text analysis report.

use crate::analysis::{analyze_activity, analyze_contributors, analyze_health, analyze_languages};
use crate::facts::RepositoryData;
use chrono::{DateTime, Utc};
use core::fmt::{Display, Formatter, Result as FmtResult};

const RULE_WIDTH: usize = 80;
const SECTION_RULE_WIDTH: usize = 40;
const TOP_LANGUAGES: usize = 5;
const TOP_CONTRIBUTORS: usize = 5;
const TOP_RELEASES: usize = 3;

/// Formats a count compactly: `999`, `1.2K`, `3.4M`.
#[must_use]
pub fn format_number(n: u64) -> String {
    #[expect(clippy::cast_precision_loss, reason = "Only one decimal is displayed")]
    let value = n as f64;

    if n < 1_000 {
        n.to_string()
    } else if n < 1_000_000 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.1}M", value / 1_000_000.0)
    }
}

/// Renders the full analysis report for `data`, evaluated at `now`.
#[must_use]
pub fn generate_text(data: &RepositoryData, now: DateTime<Utc>) -> String {
    TextReport { data, now }.to_string()
}

struct TextReport<'a> {
    data: &'a RepositoryData,
    now: DateTime<Utc>,
}

fn section(f: &mut Formatter<'_>, title: &str) -> FmtResult {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(SECTION_RULE_WIDTH))
}

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let data = self.data;
        let info = &data.basic_info;
        let stats = &data.statistics;

        writeln!(f, "REPOSITORY ANALYSIS REPORT")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f)?;

        section(f, "BASIC INFORMATION")?;
        writeln!(f, "Name: {}", info.full_name)?;
        writeln!(f, "Description: {}", info.description)?;
        writeln!(f, "Created: {}", info.created_at.format("%Y-%m-%d"))?;
        writeln!(f, "License: {}", info.license)?;
        writeln!(f, "Size: {} KB", info.size_kb)?;
        writeln!(f)?;

        section(f, "STATISTICS")?;
        writeln!(f, "Stars: {}", format_number(stats.stars))?;
        writeln!(f, "Forks: {}", format_number(stats.forks))?;
        writeln!(f, "Watchers: {}", format_number(stats.watchers))?;
        writeln!(f, "Open issues: {}", format_number(stats.open_issues))?;
        writeln!(f)?;

        let languages = analyze_languages(data);
        if !languages.is_empty() {
            section(f, "LANGUAGES")?;
            for lang in languages.iter().take(TOP_LANGUAGES) {
                writeln!(f, "{}: {:.1}%", lang.name, lang.percentage)?;
            }
            writeln!(f)?;
        }

        let activity = analyze_activity(data, self.now);
        section(f, "RECENT ACTIVITY")?;
        writeln!(f, "Commits (last week): {}", activity.commits_last_week)?;
        writeln!(f, "Commits (last month): {}", activity.commits_last_month)?;
        writeln!(f, "Issues (last week): {}", activity.issues_last_week)?;
        writeln!(f, "Issues (last month): {}", activity.issues_last_month)?;
        writeln!(f, "PRs (last week): {}", activity.prs_last_week)?;
        writeln!(f, "PRs (last month): {}", activity.prs_last_month)?;
        writeln!(f, "Average issue age: {:.1} days", activity.avg_issue_age)?;
        writeln!(f, "Average PR age: {:.1} days", activity.avg_pr_age)?;
        writeln!(f)?;

        let contributors = analyze_contributors(data);
        section(f, "CONTRIBUTORS")?;
        writeln!(f, "Total contributors: {}", contributors.total_contributors)?;
        writeln!(f, "Core team (100+ contributions): {}", contributors.core_team_size)?;
        writeln!(f, "Top {TOP_CONTRIBUTORS} contributors:")?;
        for (i, c) in contributors.top_contributors.iter().take(TOP_CONTRIBUTORS).enumerate() {
            writeln!(f, "  {}. {} ({} contributions)", i + 1, c.login, c.contributions)?;
        }
        writeln!(f)?;

        let health = analyze_health(data, self.now);
        section(f, "REPOSITORY HEALTH")?;
        writeln!(f, "Health score: {:.1}/100", health.health_score)?;
        writeln!(f, "Status: {}", health.maintenance_status)?;
        writeln!(f, "Last commit: {} days ago", health.inputs.last_commit_days)?;
        writeln!(f, "Last release: {} days ago", health.inputs.last_release_days)?;
        writeln!(f, "Stale issues: {}", health.inputs.stale_issues)?;
        writeln!(f, "Open issue ratio: {:.1}%", health.inputs.open_issues_ratio * 100.0)?;
        writeln!(f)?;

        if !data.releases.is_empty() {
            section(f, "RECENT RELEASES")?;
            for release in data.releases.iter().take(TOP_RELEASES) {
                writeln!(f, "{} ({}) - {}", release.tag_name, release.released_at().format("%Y-%m-%d"), release.author)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "Report generated at: {}", self.now.format("%Y-%m-%d %H:%M:%S UTC"))
    }
}
