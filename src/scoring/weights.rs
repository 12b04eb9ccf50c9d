use serde::{Deserialize, Serialize};

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub title_keyword: u32,
    pub description_keyword: u32,
    pub location: u32,
    pub mode: u32,
    pub experience: u32,
    pub experience_soft: u32,
    pub skill: u32,
    pub recency: u32,
    pub source: u32,

    pub recency_window_days: u32,
    pub preferred_source: String,
    pub max_score: u8,
}

impl ScoringWeights {
    pub fn v0() -> Self {
        Self {
            title_keyword: 25,
            description_keyword: 15,
            location: 15,
            mode: 10,
            experience: 10,
            experience_soft: 5,
            skill: 15,
            recency: 5,
            source: 5,
            recency_window_days: 2,
            preferred_source: "LinkedIn".into(),
            max_score: 100,
        }
    }

    pub(crate) fn bonus(&self, rule: MatchRule) -> u32 {
        match rule {
            MatchRule::TitleKeyword => self.title_keyword,
            MatchRule::DescriptionKeyword => self.description_keyword,
            MatchRule::Location => self.location,
            MatchRule::Mode => self.mode,
            MatchRule::Experience => self.experience,
            MatchRule::ExperienceSoft => self.experience_soft,
            MatchRule::Skill => self.skill,
            MatchRule::Recency => self.recency,
            MatchRule::Source => self.source,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::v0()
    }
}

/// One additive scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    TitleKeyword,
    DescriptionKeyword,
    Location,
    Mode,
    Experience,
    ExperienceSoft,
    Skill,
    Recency,
    Source,
}
