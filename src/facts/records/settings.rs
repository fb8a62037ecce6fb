use serde::{Deserialize, Serialize};

/// Feature flags and merge permissions of a repository.
///
/// Built once when the repository metadata is translated and never modified afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[expect(clippy::struct_excessive_bools, reason = "Mirrors the flags exposed by the GitHub API")]
pub struct Settings {
    pub private: bool,
    pub fork: bool,
    pub archived: bool,
    pub disabled: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub has_pages: bool,
    pub has_discussions: bool,
    pub has_downloads: bool,
    pub allow_forking: bool,
    pub allow_merge_commit: bool,
    pub allow_squash_merge: bool,
    pub allow_rebase_merge: bool,
}
