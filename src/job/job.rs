use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::JobId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkMode {
    Remote,
    Hybrid,
    Onsite,
}

impl WorkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Remote => "Remote",
            WorkMode::Hybrid => "Hybrid",
            WorkMode::Onsite => "Onsite",
        }
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single externally sourced job posting. Read-only to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub mode: WorkMode,
    /// Range token such as "0-1", "1-3" or "3-5".
    pub experience: String,
    pub skills: Vec<String>,
    pub salary_range: String,
    pub posted_days_ago: u32,
    pub source: String,
    pub apply_url: String,
}

impl Job {
    /// Leading number of `salary_range` ("3-5 LPA" -> 3, "₹15k-₹40k" -> 15).
    /// `None` when the range carries no digits at all.
    pub fn salary_floor(&self) -> Option<u64> {
        let digits: String = self
            .salary_range
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}
