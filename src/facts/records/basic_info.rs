use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity and descriptive information about a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub full_name: String,

    /// Login of the owning user or organization.
    pub owner: String,
    pub description: String,

    /// Browser URL of the repository.
    pub url: String,
    pub homepage: String,
    pub clone_url: String,
    pub ssh_url: String,
    pub default_branch: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Time of the last push, absent for repositories that were never pushed to.
    pub pushed_at: Option<DateTime<Utc>>,

    /// Repository size as reported by GitHub, in kilobytes.
    #[serde(rename = "size_kb")]
    pub size_kb: u64,

    /// License display name, empty when no license was detected.
    pub license: String,
}
