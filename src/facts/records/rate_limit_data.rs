use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quota for one rate-limited API resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    pub limit: u64,
    pub remaining: u64,
    pub used: u64,
    pub reset: Option<DateTime<Utc>>,
}

/// Snapshot of the caller's API quotas, taken at the end of extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitData {
    pub core: Option<Rate>,
    pub search: Option<Rate>,
    pub graphql: Option<Rate>,
}
