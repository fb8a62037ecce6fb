use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Qualitative label for a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Excellent,
    #[strum(serialize = "Very Good")]
    VeryGood,
    Good,
    Fair,
    #[strum(serialize = "Needs Attention")]
    NeedsAttention,
    Critical,
}

impl MaintenanceStatus {
    /// Maps a 0..100 health score onto a label.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Self::Excellent,
            s if s >= 80.0 => Self::VeryGood,
            s if s >= 70.0 => Self::Good,
            s if s >= 60.0 => Self::Fair,
            s if s >= 50.0 => Self::NeedsAttention,
            _ => Self::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_boundaries() {
        assert_eq!(MaintenanceStatus::from_score(100.0), MaintenanceStatus::Excellent);
        assert_eq!(MaintenanceStatus::from_score(90.0), MaintenanceStatus::Excellent);
        assert_eq!(MaintenanceStatus::from_score(89.99), MaintenanceStatus::VeryGood);
        assert_eq!(MaintenanceStatus::from_score(80.0), MaintenanceStatus::VeryGood);
        assert_eq!(MaintenanceStatus::from_score(79.99), MaintenanceStatus::Good);
        assert_eq!(MaintenanceStatus::from_score(70.0), MaintenanceStatus::Good);
        assert_eq!(MaintenanceStatus::from_score(60.0), MaintenanceStatus::Fair);
        assert_eq!(MaintenanceStatus::from_score(50.0), MaintenanceStatus::NeedsAttention);
        assert_eq!(MaintenanceStatus::from_score(49.99), MaintenanceStatus::Critical);
        assert_eq!(MaintenanceStatus::from_score(0.0), MaintenanceStatus::Critical);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = MaintenanceStatus::iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, ["Excellent", "Very Good", "Good", "Fair", "Needs Attention", "Critical"]);
    }
}
