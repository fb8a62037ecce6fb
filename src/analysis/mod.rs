//! Pure metrics computed from an extracted [`RepositoryData`](crate::facts::RepositoryData).
//!
//! Nothing here performs I/O; functions that depend on the current time take it as a parameter.

mod activity;
mod contributors;
mod health;
mod languages;
mod maintenance_status;

pub use activity::{ActivityMetrics, analyze_activity};
pub use contributors::{CORE_TEAM_MIN_CONTRIBUTIONS, ContributorStats, analyze_contributors};
pub use health::{HealthInputs, RepositoryHealth, STALE_ISSUE_DAYS, analyze_health, health_score};
pub use languages::{LanguageStats, analyze_languages};
pub use maintenance_status::MaintenanceStatus;

use chrono::{DateTime, TimeDelta, Utc};

/// Fractional days elapsed between `then` and `now`.
#[expect(clippy::cast_precision_loss, reason = "Precision loss acceptable for ages in days")]
fn days_between(then: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - then).num_seconds() as f64 / TimeDelta::days(1).num_seconds() as f64
}
