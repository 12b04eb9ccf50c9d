use serde::{Deserialize, Serialize};

use crate::job::Job;

/// A job paired with the score it received in one scoring pass.
/// Never persisted on its own; digests snapshot these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: Job,
    pub score: u8,
}

impl ScoredJob {
    pub fn color(&self) -> ScoreColor {
        ScoreColor::from_score(self.score)
    }
}

/// Display band of a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Green,
    Amber,
    Neutral,
    Grey,
}

impl ScoreColor {
    /// Bands, highest first, each with an inclusive lower bound:
    /// 80 green, 60 amber, 40 neutral, anything below grey.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreColor::Green,
            60..=79 => ScoreColor::Amber,
            40..=59 => ScoreColor::Neutral,
            _ => ScoreColor::Grey,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreColor::Green => "green",
            ScoreColor::Amber => "amber",
            ScoreColor::Neutral => "neutral",
            ScoreColor::Grey => "grey",
        }
    }
}
