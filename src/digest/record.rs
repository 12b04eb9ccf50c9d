use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{DayKey, DigestVersion};
use crate::types::scored_job::ScoredJob;

/// One day's frozen digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestRecord {
    pub day: DayKey,
    /// sha256 over the serialized `jobs`.
    pub version: DigestVersion,
    pub generated_at: DateTime<Utc>, // informational only
    pub jobs: Vec<ScoredJob>,
}

impl DigestRecord {
    pub fn new(day: DayKey, jobs: Vec<ScoredJob>, generated_at: DateTime<Utc>) -> Result<Self, serde_json::Error> {
        let version = Self::compute_version(&jobs)?;
        Ok(Self {
            day,
            version,
            generated_at,
            jobs,
        })
    }

    fn compute_version(jobs: &[ScoredJob]) -> Result<DigestVersion, serde_json::Error> {
        let bytes = serde_json::to_vec(jobs)?;
        Ok(DigestVersion::from_content(&bytes))
    }

    /// Recompute the content hash and compare with the stored one.
    pub fn verify(&self) -> bool {
        Self::compute_version(&self.jobs).is_ok_and(|v| v == self.version)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Generated, but nothing cleared the threshold.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// What a caller should show for a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestView {
    NotGenerated,
    NoMatchesToday(DigestRecord),
    Ready(DigestRecord),
}

impl DigestView {
    pub fn from_cached(cached: Option<DigestRecord>) -> Self {
        match cached {
            None => DigestView::NotGenerated,
            Some(record) if record.is_empty() => DigestView::NoMatchesToday(record),
            Some(record) => DigestView::Ready(record),
        }
    }

    pub fn record(&self) -> Option<&DigestRecord> {
        match self {
            DigestView::NotGenerated => None,
            DigestView::NoMatchesToday(record) | DigestView::Ready(record) => Some(record),
        }
    }
}
