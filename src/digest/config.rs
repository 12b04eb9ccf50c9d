use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Maximum jobs kept in one day's digest.
    pub limit: usize,
    /// Threshold used when `minMatchScore` is absent or unparseable.
    /// Deliberately lower than the dashboard's default of 40.
    pub default_min_score: i64,
    pub history_limit: usize,
}

impl DigestConfig {
    pub fn v0() -> Self {
        Self {
            limit: 10,
            default_min_score: 1,
            history_limit: 5,
        }
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self::v0()
    }
}
