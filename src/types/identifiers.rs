use std::fmt;

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Identifier of a job posting. Serialized as a bare integer, and as a
/// string when used as a JSON map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl JobId {
    pub fn new(id: u64) -> Self {
        JobId(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for JobId {
    fn from(id: u64) -> Self {
        JobId(id)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DayKeyError {
    #[error("Day key is not a valid YYYY-MM-DD date: {0}")]
    Malformed(String),
    #[error("Day key is not in canonical YYYY-MM-DD form: {0}")]
    NonCanonical(String),
}

/// Calendar-day partition key for the digest cache, always `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(String);

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

impl DayKey {
    pub fn parse(raw: &str) -> Result<Self, DayKeyError> {
        let date = NaiveDate::parse_from_str(raw, DAY_KEY_FORMAT)
            .map_err(|_| DayKeyError::Malformed(raw.to_string()))?;

        // "2024-1-1" parses, but would split the cache across two keys
        let canonical = Self::from_date(date);
        if canonical.0 != raw {
            return Err(DayKeyError::NonCanonical(raw.to_string()));
        }

        Ok(canonical)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        DayKey(date.format(DAY_KEY_FORMAT).to_string())
    }

    /// Day key of an instant, in the instant's own time zone.
    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self::from_date(at.date_naive())
    }

    /// Day key of the local calendar day.
    pub fn today() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DayKey {
    type Error = DayKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DayKey::parse(&value)
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of a digest's job list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigestVersion(String);

impl DigestVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DigestVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
