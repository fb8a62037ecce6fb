use serde::{Deserialize, Serialize};
use strum::Display;

/// Open/closed state shared by issues and pull requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemState {
    Open,
    Closed,
    #[default]
    Unknown,
}

impl ItemState {
    /// Interprets a state string as delivered by the API.
    #[must_use]
    pub fn from_api(state: &str) -> Self {
        match state {
            "open" => Self::Open,
            "closed" => Self::Closed,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api() {
        assert_eq!(ItemState::from_api("open"), ItemState::Open);
        assert_eq!(ItemState::from_api("closed"), ItemState::Closed);
        assert_eq!(ItemState::from_api("merged"), ItemState::Unknown);
        assert_eq!(ItemState::from_api(""), ItemState::Unknown);
    }

    #[test]
    fn test_display_matches_serde() {
        assert_eq!(ItemState::Open.to_string(), "open");
        assert_eq!(serde_json::to_string(&ItemState::Closed).unwrap(), "\"closed\"");
    }
}
