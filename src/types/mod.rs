pub mod identifiers;
pub mod scored_job;

pub use identifiers::{DayKey, DayKeyError, DigestVersion, JobId};
pub use scored_job::{ScoreColor, ScoredJob};
