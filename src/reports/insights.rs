use super::styling::{dim, heading};
use crate::analysis::analyze_languages;
use crate::facts::RepositoryData;
use std::io::{Result, Write};

const TOP_CONTRIBUTORS: usize = 5;
const MESSAGE_PREVIEW_CHARS: usize = 100;

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Shortens `message` to at most `max_chars` characters, marking truncation with an ellipsis.
fn preview(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        message.to_string()
    } else {
        let mut short: String = message.chars().take(max_chars).collect();
        short.push_str("...");
        short
    }
}

/// Prints the highlights a reader usually wants first.
pub fn write_insights(out: &mut impl Write, data: &RepositoryData, use_colors: bool) -> Result<()> {
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "{}", heading("INSIGHTS", use_colors))?;
    writeln!(out, "{}", "=".repeat(80))?;

    writeln!(out)?;
    writeln!(out, "{}", heading("TOP 5 CONTRIBUTORS", use_colors))?;
    if data.contributors.is_empty() {
        writeln!(out, "   {}", dim("none found", use_colors))?;
    }
    for (i, c) in data.contributors.iter().take(TOP_CONTRIBUTORS).enumerate() {
        writeln!(out, "   {}. {} ({} contributions)", i + 1, c.login, c.contributions)?;
    }

    if let Some(lang) = analyze_languages(data).first() {
        writeln!(out)?;
        writeln!(out, "{} {} ({:.1}%)", heading("DOMINANT LANGUAGE:", use_colors), lang.name, lang.percentage)?;
    }

    if let Some(release) = data.releases.first() {
        writeln!(out)?;
        writeln!(out, "{} {}", heading("LATEST RELEASE:", use_colors), release.tag_name)?;
        writeln!(out, "   Published: {}", release.released_at().format("%Y-%m-%d"))?;
        writeln!(out, "   By: {}", release.author)?;
    }

    if let Some(commit) = data.recent_commits.first() {
        writeln!(out)?;
        writeln!(out, "{} {}", heading("LAST COMMIT:", use_colors), commit.short_sha())?;
        if let Some(at) = commit.created_at {
            writeln!(out, "   Date: {}", at.format("%Y-%m-%d %H:%M"))?;
        }
        writeln!(out, "   By: {}", commit.author)?;
        writeln!(out, "   Message: {}", preview(&commit.message, MESSAGE_PREVIEW_CHARS))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", heading("CURRENT ACTIVITY", use_colors))?;
    writeln!(out, "   Open issues (sample): {}", data.open_sampled_issues())?;
    writeln!(out, "   Open PRs (sample): {}", data.open_sampled_prs())?;

    if !data.topics.is_empty() {
        writeln!(out)?;
        writeln!(out, "{} {}", heading("TOPICS:", use_colors), data.topics.join(", "))?;
    }

    let settings = &data.settings;
    writeln!(out)?;
    writeln!(out, "{}", heading("SETTINGS", use_colors))?;
    writeln!(out, "   Wiki enabled: {}", yes_no(settings.has_wiki))?;
    writeln!(out, "   Issues enabled: {}", yes_no(settings.has_issues))?;
    writeln!(out, "   Pages enabled: {}", yes_no(settings.has_pages))?;
    writeln!(out, "   Discussions enabled: {}", yes_no(settings.has_discussions))?;
    writeln!(out, "   Archived: {}", yes_no(settings.archived))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::records::{
        CommitData, Contributor, ExtractionMeta, IssueData, ItemState, ReleaseData, RepositoryMetadata, Settings,
    };
    use chrono::Utc;

    fn render(data: &RepositoryData) -> String {
        let mut out = Vec::new();
        write_insights(&mut out, data, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn empty() -> RepositoryData {
        RepositoryData::new(RepositoryMetadata::default(), ExtractionMeta::new(Utc::now(), "o", "r"))
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("subject\n\nbody", 100), "subject\n\nbody");
        assert_eq!(preview("subject\nbody", 9), "subject\nb...");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("ééééé", 2), "éé...");
        assert_eq!(preview("", 5), "");
    }

    #[test]
    fn test_empty_record() {
        let text = render(&empty());
        assert!(text.contains("none found"));
        assert!(!text.contains("DOMINANT LANGUAGE"));
        assert!(!text.contains("LATEST RELEASE"));
        assert!(!text.contains("LAST COMMIT"));
        assert!(!text.contains("TOPICS"));
        assert!(text.contains("Open issues (sample): 0"));
    }

    #[test]
    fn test_populated_record() {
        let mut data = empty();
        data.contributors = (1..=6)
            .map(|i| Contributor {
                login: format!("dev{i}"),
                contributions: 10,
                ..Contributor::default()
            })
            .collect();
        data.languages.insert("Go".to_string(), 3);
        data.languages.insert("C".to_string(), 1);
        data.releases.push(ReleaseData {
            tag_name: "v1.2.3".to_string(),
            author: "rel".to_string(),
            ..ReleaseData::default()
        });
        data.recent_commits.push(CommitData {
            sha: "0123456789abcdef".to_string(),
            message: "x".repeat(150),
            author: "alice".to_string(),
            ..CommitData::default()
        });
        data.recent_issues = vec![
            IssueData {
                state: ItemState::Open,
                ..IssueData::default()
            },
            IssueData {
                state: ItemState::Closed,
                ..IssueData::default()
            },
        ];
        data.topics = vec!["cli".to_string(), "rust".to_string()];
        data.settings = Settings {
            has_wiki: true,
            ..Settings::default()
        };

        let text = render(&data);
        assert!(text.contains("5. dev5"));
        assert!(!text.contains("dev6"));
        assert!(text.contains("DOMINANT LANGUAGE: Go (75.0%)"));
        assert!(text.contains("LATEST RELEASE: v1.2.3"));
        assert!(text.contains("LAST COMMIT: 01234567"));
        assert!(text.contains(&format!("Message: {}...", "x".repeat(100))));
        assert!(text.contains("Open issues (sample): 1"));
        assert!(text.contains("TOPICS: cli, rust"));
        assert!(text.contains("Wiki enabled: yes"));
        assert!(text.contains("Pages enabled: no"));
    }
}
