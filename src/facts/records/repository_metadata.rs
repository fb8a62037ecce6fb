use super::{BasicInfo, Settings, Statistics};

/// Everything the primary repository request yields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryMetadata {
    pub basic_info: BasicInfo,
    pub statistics: Statistics,
    pub settings: Settings,
    pub topics: Vec<String>,
}
