use std::collections::BTreeMap;

use crate::job::{ApplicationStatus, Job, Status, WorkMode};
use crate::types::identifiers::JobId;

/// Threshold for "only show matches" when `minMatchScore` is absent or
/// unparseable. The digest uses its own, lower default.
pub const DASHBOARD_DEFAULT_MIN_SCORE: i64 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Fewest days since posting first.
    #[default]
    Latest,
    MatchScore,
    /// Highest salary floor first; ranges without a number go last.
    Salary,
}

/// Dashboard filter bar. `None` fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Case-insensitive substring of title or company.
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub mode: Option<WorkMode>,
    pub experience: Option<String>,
    pub source: Option<String>,
    pub status: Option<Status>,
    /// Keep only jobs at or above the preferences' threshold.
    /// Ignored when there are no preferences.
    pub only_matches: bool,
    pub sort: SortOrder,
}

impl JobFilter {
    pub fn matches(&self, job: &Job, statuses: &BTreeMap<JobId, ApplicationStatus>) -> bool {
        if let Some(keyword) = self.keyword.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
            let keyword = keyword.to_lowercase();
            let hit = job.title.to_lowercase().contains(&keyword)
                || job.company.to_lowercase().contains(&keyword);
            if !hit {
                return false;
            }
        }

        if self.location.as_ref().is_some_and(|l| *l != job.location) {
            return false;
        }
        if self.mode.is_some_and(|m| m != job.mode) {
            return false;
        }
        if self.experience.as_ref().is_some_and(|e| *e != job.experience) {
            return false;
        }
        if self.source.as_ref().is_some_and(|s| *s != job.source) {
            return false;
        }

        if let Some(wanted) = self.status {
            let current = statuses.get(&job.id).map(|s| s.status).unwrap_or_default();
            if current != wanted {
                return false;
            }
        }

        true
    }
}
