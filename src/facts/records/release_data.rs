use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published (or draft) release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseData {
    pub tag_name: String,
    pub name: String,
    pub created_at: DateTime<Utc>,

    /// Absent for drafts.
    pub published_at: Option<DateTime<Utc>>,
    pub prerelease: bool,
    pub draft: bool,
    pub author: String,
}

impl ReleaseData {
    /// When the release became visible, falling back to its creation time for drafts.
    #[must_use]
    pub fn released_at(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }
}
