use anyhow::bail;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use regex::Regex;
use std::sync::LazyLock;

/// Repository locations we know how to read an owner and name from, tried in order.
static PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        // https://host/owner/repo(.git)(/)
        Regex::new(r"^https?://[^/]+/([^/]+)/([^/]+?)(?:\.git)?/?$"),
        // https://host/owner/repo/tree/main/...
        Regex::new(r"^https?://[^/]+/([^/]+)/([^/]+)/.*$"),
        // git@host:owner/repo(.git)
        Regex::new(r"^git@[^:]+:([^/]+)/([^/]+?)(?:\.git)?$"),
        // owner/repo
        Regex::new(r"^([^/:@\s]+)/([^/\s]+)$"),
    ]
    .map(|re| re.expect("repository URL patterns are valid"))
});

pub const SUPPORTED_FORMATS: &str = "Supported formats:
  - https://github.com/owner/repo
  - https://github.com/owner/repo.git
  - git@github.com:owner/repo.git
  - owner/repo";

/// Identifies a repository by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    owner: String,
    repo: String,
}

impl RepoSpec {
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// File-name friendly form, `owner_repo`.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.owner, self.repo)
    }
}

impl FromStr for RepoSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        for pattern in PATTERNS.iter() {
            if let Some(captures) = pattern.captures(s)
                && let (Some(owner), Some(repo)) = (captures.get(1), captures.get(2))
            {
                let repo = repo.as_str().trim_end_matches(".git");
                if !repo.is_empty() {
                    return Ok(Self::new(owner.as_str(), repo));
                }
            }
        }

        bail!("invalid repository URL '{s}'\n\n{SUPPORTED_FORMATS}");
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
