pub mod filters;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::job::{ApplicationStatus, Job, Preferences};
use crate::scoring::{score_all, RuleScorer, Scorer};
use crate::types::identifiers::JobId;
use crate::types::scored_job::ScoredJob;

pub use filters::{JobFilter, SortOrder, DASHBOARD_DEFAULT_MIN_SCORE};

/// Dashboard view over the job list. Rescores on every call; only the
/// digest freezes scores.
pub struct JobSelector<S> {
	scorer: S,
}

impl Default for JobSelector<RuleScorer> {
	fn default() -> Self {
		Self {
			scorer: RuleScorer::default(),
		}
	}
}

impl<S: Scorer> JobSelector<S> {
	pub fn new(scorer: S) -> Self {
		Self { scorer }
	}

	pub fn select(
		&self,
		jobs: &[Job],
		prefs: Option<&Preferences>,
		statuses: &BTreeMap<JobId, ApplicationStatus>,
		filter: &JobFilter,
	) -> Vec<ScoredJob> {
		// 1. Scoring Phase
		let scored = score_all(&self.scorer, jobs, prefs);

		// 2. Filtering Phase
		let min_score = prefs.map(|p| p.min_match_score_or(DASHBOARD_DEFAULT_MIN_SCORE));
		let mut selected: Vec<ScoredJob> = scored
			.into_iter()
			.filter(|sj| filter.matches(&sj.job, statuses))
			.filter(|sj| match (filter.only_matches, min_score) {
				(true, Some(min)) => i64::from(sj.score) >= min,
				_ => true,
			})
			.collect();

		// 3. Ordering Phase
		selected.sort_by(|a, b| compare(filter.sort, a, b));
		selected
	}
}

fn compare(order: SortOrder, a: &ScoredJob, b: &ScoredJob) -> Ordering {
	let newest_first = a.job.posted_days_ago.cmp(&b.job.posted_days_ago);
	match order {
		SortOrder::Latest => newest_first,
		SortOrder::MatchScore => b.score.cmp(&a.score).then(newest_first),
		SortOrder::Salary => match (a.job.salary_floor(), b.job.salary_floor()) {
			(Some(x), Some(y)) => y.cmp(&x).then(newest_first),
			(Some(_), None) => Ordering::Less,
			(None, Some(_)) => Ordering::Greater,
			(None, None) => newest_first,
		},
	}
}
