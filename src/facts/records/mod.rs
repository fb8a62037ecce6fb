//! Plain value records that make up one extraction run.
//!
//! Every record mirrors one entry of a GitHub API response after translation by
//! [`crate::facts::hosting`]. Records carry no links to each other; list entries are
//! identified only by their position.

mod basic_info;
mod commit_data;
mod contributor;
mod event_data;
mod extraction_meta;
mod issue_data;
mod item_state;
mod pull_request_data;
mod rate_limit_data;
mod release_data;
mod repository_data;
mod repository_metadata;
mod settings;
mod statistics;

pub use basic_info::BasicInfo;
pub use commit_data::CommitData;
pub use contributor::Contributor;
pub use event_data::EventData;
pub use extraction_meta::{API_VERSION, ExtractionMeta};
pub use issue_data::IssueData;
pub use item_state::ItemState;
pub use pull_request_data::PullRequestData;
pub use rate_limit_data::{Rate, RateLimitData};
pub use release_data::ReleaseData;
pub use repository_data::RepositoryData;
pub use repository_metadata::RepositoryMetadata;
pub use settings::Settings;
pub use statistics::Statistics;
