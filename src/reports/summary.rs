use super::styling::{dim, heading};
use crate::analysis::analyze_languages;
use crate::facts::RepositoryData;
use std::io::{Result, Write};

/// Prints what was extracted: identity, headline statistics and how much of each list came back.
pub fn write_summary(out: &mut impl Write, data: &RepositoryData, use_colors: bool) -> Result<()> {
    let info = &data.basic_info;
    let stats = &data.statistics;

    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "{}", heading(&format!("EXTRACTION SUMMARY - {}", info.full_name), use_colors))?;
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "Name: {}", info.name)?;
    writeln!(out, "Owner: {}", info.owner)?;
    writeln!(out, "Description: {}", info.description)?;
    writeln!(out, "URL: {}", info.url)?;
    writeln!(out, "Created: {}", info.created_at.format("%Y-%m-%d"))?;
    writeln!(out, "Last updated: {}", info.updated_at.format("%Y-%m-%d %H:%M"))?;

    writeln!(out)?;
    writeln!(out, "{}", heading("STATISTICS", use_colors))?;
    writeln!(out, "Stars: {}", stats.stars)?;
    writeln!(out, "Forks: {}", stats.forks)?;
    writeln!(out, "Watchers: {}", stats.watchers)?;
    writeln!(out, "Open issues: {}", stats.open_issues)?;

    writeln!(out)?;
    writeln!(out, "{}", heading("LANGUAGES", use_colors))?;
    for lang in analyze_languages(data) {
        writeln!(out, "   {}: {:.1}%", lang.name, lang.percentage)?;
    }

    writeln!(out)?;
    writeln!(out, "Contributors: {} found", data.contributors.len())?;
    writeln!(out, "Recent issues: {} found", data.recent_issues.len())?;
    writeln!(out, "Pull requests: {} found", data.recent_prs.len())?;
    writeln!(out, "Releases: {} found", data.releases.len())?;
    writeln!(out, "Recent commits: {} found", data.recent_commits.len())?;
    writeln!(out, "Recent events: {} found", data.recent_events.len())?;

    writeln!(out)?;
    writeln!(out, "{}", heading("RATE LIMITS", use_colors))?;
    match data.rate_limit.and_then(|r| r.core) {
        Some(core) => {
            let reset = core
                .reset
                .map_or_else(|| "unknown".to_string(), |at| at.format("%H:%M:%S UTC").to_string());
            writeln!(out, "   Core API: {}/{} (resets at {reset})", core.remaining, core.limit)?;
        }
        None => writeln!(out, "   {}", dim("Core API: unavailable", use_colors))?,
    }

    let warnings = &data.extraction_meta.warnings;
    if !warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", heading("WARNINGS", use_colors))?;
        for warning in warnings {
            writeln!(out, "   {warning}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Extraction completed in {:.2}s", data.extraction_meta.duration.as_secs_f64())?;

    Ok(())
}
