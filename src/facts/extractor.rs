//! The extraction pipeline.
//!
//! Nine independent reads run one after another. Only the repository metadata is required;
//! every later step is best-effort and leaves its field empty when it fails.

use crate::Result;
use crate::facts::records::{ExtractionMeta, RepositoryData};
use crate::facts::{Progress, RepoApi, RepoSpec};
use anyhow::Context;
use chrono::Utc;
use core::fmt::Display;
use std::time::Instant;

/// Log target for the extraction pipeline
const LOG_TARGET: &str = "extract";

/// Page size for the contributors list.
pub const CONTRIBUTORS_PAGE_SIZE: u8 = 20;

/// Page size for every other list.
pub const LIST_PAGE_SIZE: u8 = 10;

/// Names of the extraction steps, in execution order.
pub const STEPS: [&str; 9] = [
    "metadata",
    "languages",
    "contributors",
    "issues",
    "pull requests",
    "releases",
    "commits",
    "events",
    "rate limit",
];

/// Extracts everything the report needs about one repository.
///
/// # Errors
///
/// Fails only when the repository metadata cannot be fetched. Failures of the other steps are
/// logged and listed in [`ExtractionMeta::warnings`].
pub async fn extract(api: &impl RepoApi, spec: &RepoSpec, progress: &dyn Progress) -> Result<RepositoryData> {
    let start_time = Instant::now();
    let meta = ExtractionMeta::new(Utc::now(), spec.owner(), spec.repo());

    log::info!(target: LOG_TARGET, "Extracting repository data for '{spec}'");

    progress.step(0, STEPS.len(), STEPS[0]);
    let metadata = match api.repository(spec).await {
        Ok(metadata) => metadata,
        Err(e) => {
            progress.finish();
            return Err(e).with_context(|| format!("extracting {} for '{spec}'", STEPS[0]));
        }
    };

    let mut data = RepositoryData::new(metadata, meta);
    let mut run = Run {
        data: &mut data,
        progress,
        next_step: 1,
    };

    if let Some(languages) = run.step(api.languages(spec)).await {
        run.data.languages = languages;
    }
    if let Some(contributors) = run.step(api.contributors(spec, CONTRIBUTORS_PAGE_SIZE)).await {
        run.data.contributors = contributors;
    }
    if let Some(issues) = run.step(api.issues(spec, LIST_PAGE_SIZE)).await {
        run.data.recent_issues = issues;
    }
    if let Some(prs) = run.step(api.pull_requests(spec, LIST_PAGE_SIZE)).await {
        run.data.recent_prs = prs;
    }
    if let Some(releases) = run.step(api.releases(spec, LIST_PAGE_SIZE)).await {
        run.data.releases = releases;
    }
    if let Some(commits) = run.step(api.commits(spec, LIST_PAGE_SIZE)).await {
        run.data.recent_commits = commits;
    }
    if let Some(events) = run.step(api.events(spec, LIST_PAGE_SIZE)).await {
        run.data.recent_events = events;
    }
    if let Some(rate_limit) = run.step(api.rate_limit()).await {
        run.data.rate_limit = Some(rate_limit);
    }

    progress.finish();

    data.extraction_meta.duration = start_time.elapsed();
    log::info!(
        target: LOG_TARGET,
        "Completed extraction of '{spec}' in {:.3}s with {} warning(s)",
        data.extraction_meta.duration.as_secs_f64(),
        data.extraction_meta.warnings.len()
    );

    Ok(data)
}

/// Sequencing state for the best-effort steps.
struct Run<'a> {
    data: &'a mut RepositoryData,
    progress: &'a dyn Progress,
    next_step: usize,
}

impl Run<'_> {
    /// Awaits one step, turning a failure into a recorded warning.
    async fn step<T, E: Display>(&mut self, request: impl Future<Output = Result<T, E>>) -> Option<T> {
        let name = STEPS[self.next_step];
        self.progress.step(self.next_step, STEPS.len(), name);
        self.next_step += 1;

        let step_start = Instant::now();
        match request.await {
            Ok(value) => {
                log::debug!(target: LOG_TARGET, "Extracted {name} in {:.3}s", step_start.elapsed().as_secs_f64());
                Some(value)
            }
            Err(e) => {
                let warning = format!("could not extract {name}: {e:#}");
                log::warn!(target: LOG_TARGET, "{warning}");
                self.data.extraction_meta.warnings.push(warning);
                None
            }
        }
    }
}
