pub mod rules;
pub mod weights;

use crate::job::{Job, Preferences};
use crate::types::scored_job::{ScoreColor, ScoredJob};

pub use rules::{RuleScorer, ScoreDetails, Scorer};
pub use weights::{MatchRule, ScoringWeights};

/// Score a job with the default v0 weights. Always in `[0, 100]`; 0 when
/// there are no preferences.
pub fn score(job: &Job, prefs: Option<&Preferences>) -> u8 {
    RuleScorer::default().score(job, prefs)
}

pub fn score_color(score: u8) -> ScoreColor {
    ScoreColor::from_score(score)
}

/// Score every job in input order. Nothing is cached between calls.
pub fn score_all<S: Scorer>(scorer: &S, jobs: &[Job], prefs: Option<&Preferences>) -> Vec<ScoredJob> {
    jobs.iter()
        .map(|job| ScoredJob {
            job: job.clone(),
            score: scorer.score(job, prefs),
        })
        .collect()
}
