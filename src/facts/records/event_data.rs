use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry of the repository's public event stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    /// Event type such as `PushEvent` or `IssuesEvent`.
    #[serde(rename = "type")]
    pub event_type: String,
    pub actor: String,
    pub created_at: DateTime<Utc>,
    pub public: bool,
}
