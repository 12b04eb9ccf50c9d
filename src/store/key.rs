use std::fmt;

use crate::types::identifiers::DayKey;

use super::StoreError;

pub const PREFERENCES: &str = "preferences";
pub const APPLICATION_STATUS: &str = "applicationStatus";
pub const SAVED_JOB_IDS: &str = "savedJobIds";
pub const TEST_CHECKLIST_STATE: &str = "testChecklistState";
pub const DIGEST_PREFIX: &str = "digest:";

/// A validated store key: non-empty ASCII letters, digits, '-' and ':'.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoreKey(String);

impl StoreKey {
    pub fn new(raw: impl Into<String>) -> Result<Self, StoreError> {
        let raw = raw.into();
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ':');
        if !valid {
            return Err(StoreError::InvalidKey(raw));
        }
        Ok(StoreKey(raw))
    }

    pub fn preferences() -> Self {
        StoreKey(PREFERENCES.into())
    }

    pub fn application_status() -> Self {
        StoreKey(APPLICATION_STATUS.into())
    }

    pub fn saved_job_ids() -> Self {
        StoreKey(SAVED_JOB_IDS.into())
    }

    pub fn test_checklist_state() -> Self {
        StoreKey(TEST_CHECKLIST_STATE.into())
    }

    /// `digest:<YYYY-MM-DD>`
    pub fn digest(day: &DayKey) -> Self {
        StoreKey(format!("{DIGEST_PREFIX}{}", day.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
