use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit on the default branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitData {
    pub sha: String,
    pub message: String,

    /// Git author name, which is not necessarily a GitHub login.
    pub author: String,

    /// Authored timestamp; absent when the commit carries no author block.
    pub created_at: Option<DateTime<Utc>>,
    pub url: String,
}

impl CommitData {
    /// The first eight characters of the SHA.
    #[must_use]
    pub fn short_sha(&self) -> &str {
        self.sha.get(..8).unwrap_or(&self.sha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sha() {
        let commit = CommitData {
            sha: "0123456789abcdef".to_string(),
            ..CommitData::default()
        };
        assert_eq!(commit.short_sha(), "01234567");
    }

    #[test]
    fn test_short_sha_shorter_than_prefix() {
        let commit = CommitData {
            sha: "abc".to_string(),
            ..CommitData::default()
        };
        assert_eq!(commit.short_sha(), "abc");
    }
}
