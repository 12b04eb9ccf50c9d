use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::job::{Job, Preferences};
use crate::scoring::{RuleScorer, Scorer};
use crate::store::{KeyValueStore, StoreKey, TrackerStore};
use crate::types::identifiers::DayKey;
use crate::types::scored_job::ScoredJob;

use super::config::DigestConfig;
use super::history::{recent_status_updates, StatusUpdate};
use super::record::{DigestRecord, DigestView};
use super::DigestError;

/// Builds at most one digest per calendar day and serves it frozen until
/// it is reset.
pub struct DigestManager<S> {
    scorer: S,
    config: DigestConfig,
}

impl Default for DigestManager<RuleScorer> {
    fn default() -> Self {
        Self {
            scorer: RuleScorer::default(),
            config: DigestConfig::v0(),
        }
    }
}

impl<S: Scorer> DigestManager<S> {
    pub fn new(scorer: S, config: DigestConfig) -> Self {
        Self { scorer, config }
    }

    pub fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// Score, filter by threshold, order, and truncate. Touches no store.
    pub fn rank(&self, jobs: &[Job], prefs: &Preferences) -> Vec<ScoredJob> {
        let min_score = prefs.min_match_score_or(self.config.default_min_score);

        // 1. Scoring + threshold
        let mut ranked: Vec<ScoredJob> = jobs
            .iter()
            .filter_map(|job| {
                let score = self.scorer.score(job, Some(prefs));
                (i64::from(score) >= min_score).then(|| ScoredJob {
                    job: job.clone(),
                    score,
                })
            })
            .collect();

        // 2. Ordering: score desc, then posted_days_ago asc. Stable, so full
        // ties keep input order.
        ranked.sort_by(|a, b| match b.score.cmp(&a.score) {
            Ordering::Equal => a.job.posted_days_ago.cmp(&b.job.posted_days_ago),
            other => other,
        });

        debug_assert!(ranked.windows(2).all(|w| {
            let (a, b) = (&w[0], &w[1]);
            a.score > b.score || (a.score == b.score && a.job.posted_days_ago <= b.job.posted_days_ago)
        }));

        // 3. Truncation
        ranked.truncate(self.config.limit);
        ranked
    }

    /// The stored digest for `day`, if one exists and is intact.
    pub fn get_cached_digest<K: KeyValueStore>(
        &self,
        store: &TrackerStore<K>,
        day: &DayKey,
    ) -> Result<Option<DigestRecord>, DigestError> {
        let Some(record) = store.read_json::<DigestRecord>(&StoreKey::digest(day))? else {
            return Ok(None);
        };

        if record.day != *day {
            warn!("Digest stored under {day} claims day {}; ignoring", record.day);
            return Ok(None);
        }
        if !record.verify() {
            warn!("Digest for {day} failed its content hash check; ignoring");
            return Ok(None);
        }

        Ok(Some(record))
    }

    /// Return the day's digest, generating and persisting it first if none
    /// is cached. A cached digest wins even when `jobs` or `prefs` changed.
    pub fn generate_digest<K: KeyValueStore>(
        &self,
        store: &mut TrackerStore<K>,
        jobs: &[Job],
        prefs: &Preferences,
        day: &DayKey,
    ) -> Result<DigestRecord, DigestError> {
        self.generate_digest_at(store, jobs, prefs, day, Utc::now())
    }

    pub fn generate_digest_at<K: KeyValueStore>(
        &self,
        store: &mut TrackerStore<K>,
        jobs: &[Job],
        prefs: &Preferences,
        day: &DayKey,
        now: DateTime<Utc>,
    ) -> Result<DigestRecord, DigestError> {
        if let Some(cached) = self.get_cached_digest(store, day)? {
            debug!("Digest for {day} already generated; serving cached copy");
            return Ok(cached);
        }

        let ranked = self.rank(jobs, prefs);
        let record = DigestRecord::new(day.clone(), ranked, now)?;

        // Persist before handing the record out
        store.write_json(&StoreKey::digest(day), &record)?;

        if record.is_empty() {
            info!("Digest for {day}: no matches today ({} jobs considered)", jobs.len());
        } else {
            info!(
                "Digest for {day}: {} of {} jobs selected, version {}",
                record.len(),
                jobs.len(),
                record.version.as_str()
            );
        }

        Ok(record)
    }

    /// Forget the day's digest so the next generation recomputes it.
    pub fn reset_digest<K: KeyValueStore>(
        &self,
        store: &mut TrackerStore<K>,
        day: &DayKey,
    ) -> Result<(), DigestError> {
        store.clear(&StoreKey::digest(day))?;
        info!("Digest for {day} reset");
        Ok(())
    }

    pub fn view<K: KeyValueStore>(&self, store: &TrackerStore<K>, day: &DayKey) -> Result<DigestView, DigestError> {
        Ok(DigestView::from_cached(self.get_cached_digest(store, day)?))
    }

    /// Latest tracked status changes shown alongside the digest.
    pub fn status_history<'a, K: KeyValueStore>(
        &self,
        store: &TrackerStore<K>,
        jobs: &'a [Job],
    ) -> Result<Vec<StatusUpdate<'a>>, DigestError> {
        let statuses = store.application_statuses()?;
        Ok(recent_status_updates(&statuses, jobs, self.config.history_limit))
    }
}
