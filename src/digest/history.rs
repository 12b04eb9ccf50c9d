use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::job::{ApplicationStatus, Job, Status};
use crate::types::identifiers::JobId;

/// A tracked status change resolved against the job list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate<'a> {
    pub job: &'a Job,
    pub status: Status,
    pub timestamp: DateTime<Utc>,
}

/// Most recent status changes, newest first.
///
/// Skips `Not Applied`, entries without a timestamp, and ids missing from
/// `jobs`. Equal timestamps keep ascending id order.
pub fn recent_status_updates<'a>(
    statuses: &BTreeMap<JobId, ApplicationStatus>,
    jobs: &'a [Job],
    limit: usize,
) -> Vec<StatusUpdate<'a>> {
    let mut updates: Vec<StatusUpdate<'a>> = statuses
        .iter()
        .filter(|(_, entry)| entry.status != Status::NotApplied)
        .filter_map(|(id, entry)| {
            let timestamp = entry.timestamp?;
            let job = jobs.iter().find(|job| job.id == *id)?;
            Some(StatusUpdate {
                job,
                status: entry.status,
                timestamp,
            })
        })
        .collect();

    updates.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    updates.truncate(limit);
    updates
}
