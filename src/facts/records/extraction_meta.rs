use chrono::{DateTime, Utc};
use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Version tag of the REST API the extraction targets.
pub const API_VERSION: &str = "v3";

/// Bookkeeping about the extraction run itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMeta {
    /// When the run started.
    pub extracted_at: DateTime<Utc>,
    pub owner: String,
    pub repo: String,

    /// Wall-clock time spent extracting.
    #[serde(with = "humantime_serde")]
    pub duration: Duration,
    pub api_version: String,

    /// Non-fatal failures, one per extraction step that did not succeed.
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl ExtractionMeta {
    #[must_use]
    pub fn new(extracted_at: DateTime<Utc>, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            extracted_at,
            owner: owner.into(),
            repo: repo.into(),
            duration: Duration::ZERO,
            api_version: API_VERSION.to_string(),
            warnings: Vec::new(),
        }
    }
}
