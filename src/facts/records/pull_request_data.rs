use super::ItemState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recently updated pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestData {
    pub number: u64,
    pub title: String,
    pub state: ItemState,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub merged: bool,
    pub draft: bool,
}
