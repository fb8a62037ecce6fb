use super::ItemState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recently updated issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueData {
    pub number: u64,
    pub title: String,
    pub state: ItemState,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub labels: Vec<String>,
    pub comments: u64,
}
