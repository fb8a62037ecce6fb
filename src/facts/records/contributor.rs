use serde::{Deserialize, Serialize};

/// A contributor as listed by the contributors endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
    pub avatar_url: String,

    /// Account type, typically `User` or `Bot`.
    #[serde(rename = "type")]
    pub account_type: String,
}
