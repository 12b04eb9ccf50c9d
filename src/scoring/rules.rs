use crate::job::{Job, Preferences};

use super::weights::{MatchRule, ScoringWeights};

/// Which rules fired for a job, and the uncapped sum of their bonuses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreDetails {
    pub matched: Vec<MatchRule>,
    pub raw_total: u32,
}

pub trait Scorer {
    fn evaluate(&self, job: &Job, prefs: Option<&Preferences>) -> ScoreDetails;

    fn max_score(&self) -> u8 {
        100
    }

    fn score_value(&self, details: &ScoreDetails) -> u8 {
        let cap = self.max_score();
        let score = details.raw_total.min(u32::from(cap)) as u8;
        debug_assert!(score <= cap, "score {score} out of range [0, {cap}]");
        score
    }

    fn score(&self, job: &Job, prefs: Option<&Preferences>) -> u8 {
        let details = self.evaluate(job, prefs);
        self.score_value(&details)
    }
}

/// v0: additive keyword/attribute rules.
#[derive(Debug, Clone, Default)]
pub struct RuleScorer {
    weights: ScoringWeights,
}

impl RuleScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}

impl Scorer for RuleScorer {
    fn evaluate(&self, job: &Job, prefs: Option<&Preferences>) -> ScoreDetails {
        let Some(prefs) = prefs else {
            return ScoreDetails::default();
        };

        let keywords = prefs.role_keyword_tokens();
        let locations = prefs.location_tokens();
        let skills = prefs.skill_tokens();

        let mut matched = Vec::new();

        let title = job.title.to_lowercase();
        if keywords.iter().any(|k| title.contains(k.as_str())) {
            matched.push(MatchRule::TitleKeyword);
        }

        let description = job.description.to_lowercase();
        if keywords.iter().any(|k| description.contains(k.as_str())) {
            matched.push(MatchRule::DescriptionKeyword);
        }

        let location = job.location.to_lowercase();
        if locations.iter().any(|l| location.contains(l.as_str())) {
            matched.push(MatchRule::Location);
        }

        if prefs.prefers_mode(job.mode) {
            matched.push(MatchRule::Mode);
        }

        match prefs.experience_level.as_deref() {
            Some(level) if !level.is_empty() && level == job.experience => matched.push(MatchRule::Experience),
            Some("Fresher") if job.experience == "0-1" => matched.push(MatchRule::ExperienceSoft),
            _ => {}
        }

        // Either side may be the narrower term: "react" vs "react.js"
        let job_skills: Vec<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();
        let skill_overlap = skills.iter().any(|s| {
            job_skills
                .iter()
                .any(|js| js.contains(s.as_str()) || s.contains(js.as_str()))
        });
        if skill_overlap {
            matched.push(MatchRule::Skill);
        }

        if job.posted_days_ago <= self.weights.recency_window_days {
            matched.push(MatchRule::Recency);
        }

        if job.source == self.weights.preferred_source {
            matched.push(MatchRule::Source);
        }

        let raw_total = matched.iter().map(|r| self.weights.bonus(*r)).sum();

        ScoreDetails { matched, raw_total }
    }

    fn max_score(&self) -> u8 {
        self.weights.max_score
    }
}
